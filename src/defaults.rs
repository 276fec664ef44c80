use common::{Order, PaymentMethod, SalesPoint, TrendingItem};

/// Initial values for every dashboard slice.
///
/// Passed to [`crate::DashboardState::new`] so the starting state is an
/// explicit input instead of shared globals.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardDefaults {
    pub sales: Vec<SalesPoint>,
    pub trending: Vec<TrendingItem>,
    pub orders: Vec<Order>,
    pub total_orders: u64,
    pub new_customers: u64,
    pub total_sales: u64,
}

impl DashboardDefaults {
    /// No data at all; every list empty and every counter zero.
    pub fn empty() -> Self {
        Self {
            sales: Vec::new(),
            trending: Vec::new(),
            orders: Vec::new(),
            total_orders: 0,
            new_customers: 0,
            total_sales: 0,
        }
    }

    /// Sample data shown until a real data source answers.
    pub fn sample() -> Self {
        Self {
            sales: sample_sales(),
            trending: sample_trending(),
            orders: sample_orders(),
            total_orders: 21_375,
            new_customers: 1_012,
            total_sales: 24_254,
        }
    }
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_sales() -> Vec<SalesPoint> {
    vec![
        SalesPoint::new("09:00 AM", 30.0),
        SalesPoint::new("12:00 PM", 120.0),
        SalesPoint::new("04:00 PM", 230.0),
        SalesPoint::new("08:00 PM", 110.0),
        SalesPoint::new("12:00 PM", 135.0),
    ]
}

fn sample_trending() -> Vec<TrendingItem> {
    [
        (1, "Cappuccino", "$85.00", 240),
        (2, "Latte", "$70.50", 220),
        (3, "Frappuccino", "$82.50", 200),
        (4, "Mocha", "$40.50", 100),
        (5, "Espresso", "$30.00", 80),
    ]
    .into_iter()
    .map(|(id, name, price, qty)| TrendingItem {
        id,
        name: name.to_string(),
        price: price.to_string(),
        qty,
    })
    .collect()
}

fn sample_orders() -> Vec<Order> {
    [
        ("254215", "Cappuccino", "27 Oct 2023, 01:05 PM", "2B", "$200", PaymentMethod::Cash),
        ("124215", "Americano", "28 Oct 2023, 10:25 PM", "8B", "$80", PaymentMethod::Card),
        ("334215", "Mocha", "28 Oct 2023, 10:45 PM", "5A", "$40", PaymentMethod::Card),
    ]
    .into_iter()
    .map(|(id, name, date, table, price, payment)| Order {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        table: table.to_string(),
        price: price.to_string(),
        payment,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_sizes() {
        let defaults = DashboardDefaults::sample();

        assert_eq!(defaults.sales.len(), 5);
        assert_eq!(defaults.trending.len(), 5);
        assert_eq!(defaults.orders.len(), 3);
        assert_eq!(defaults.total_orders, 21375);
        assert_eq!(defaults.new_customers, 1012);
        assert_eq!(defaults.total_sales, 24254);
    }

    #[test]
    fn test_sample_keys_are_unique() {
        let defaults = DashboardDefaults::sample();

        let trending_ids: HashSet<_> = defaults.trending.iter().map(|t| t.id).collect();
        let order_ids: HashSet<_> = defaults.orders.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(trending_ids.len(), defaults.trending.len());
        assert_eq!(order_ids.len(), defaults.orders.len());
    }

    #[test]
    fn test_default_is_sample() {
        assert_eq!(DashboardDefaults::default(), DashboardDefaults::sample());
    }

    #[test]
    fn test_empty_defaults() {
        let defaults = DashboardDefaults::empty();
        assert!(defaults.sales.is_empty());
        assert!(defaults.orders.is_empty());
        assert_eq!(defaults.total_sales, 0);
    }
}
