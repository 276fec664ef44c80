use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of the sales series.
///
/// The order of points in a series is the chart x-axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Axis label (e.g. "09:00 AM")
    pub time: String,
    /// Sales value at that label
    pub value: f64,
}

impl SalesPoint {
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
        }
    }
}

/// An item in the "Trending Coffee" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    /// Unique key of the item
    pub id: u32,
    pub name: String,
    /// Already formatted price (e.g. "$85.00")
    pub price: String,
    /// Number of units sold
    pub qty: u32,
}

/// How an order was paid.
///
/// On the wire this is a plain string. Values other than "Cash" and "Card"
/// are kept verbatim in [`PaymentMethod::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Cash,
    Card,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Other(other) => other,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Cash" => PaymentMethod::Cash,
            "Card" => PaymentMethod::Card,
            _ => PaymentMethod::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the "Recent Order" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order number (e.g. "254215")
    pub id: String,
    /// Ordered item name
    pub name: String,
    /// Already formatted timestamp (e.g. "27 Oct 2023, 01:05 PM")
    pub date: String,
    /// Table label (e.g. "2B")
    pub table: String,
    /// Already formatted price (e.g. "$200")
    pub price: String,
    pub payment: PaymentMethod,
}

/// Response body of the dashboard data endpoint.
///
/// Every field is optional: a backend may send only the slices it has. The
/// dashboard keeps its current value for any slice that is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<SalesPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<Vec<TrendingItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_customers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<u64>,
}

impl DashboardPayload {
    /// Returns true when the payload carries no slice at all.
    pub fn is_empty(&self) -> bool {
        self.sales.is_none()
            && self.trending.is_none()
            && self.orders.is_none()
            && self.total_orders.is_none()
            && self.new_customers.is_none()
            && self.total_sales.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_decodes_camel_case_kpis() {
        let body = r#"{
            "sales": [{"time": "09:00 AM", "value": 30}, {"time": "12:00 PM", "value": 120.5}],
            "trending": [{"id": 1, "name": "Cappuccino", "price": "$85.00", "qty": 240}],
            "orders": [{
                "id": "254215",
                "name": "Cappuccino",
                "date": "27 Oct 2023, 01:05 PM",
                "table": "2B",
                "price": "$200",
                "payment": "Cash"
            }],
            "totalOrders": 21375,
            "newCustomers": 1012,
            "totalSales": 24254
        }"#;

        let payload: DashboardPayload = serde_json::from_str(body).expect("payload should decode");

        let sales = payload.sales.expect("sales present");
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[1], SalesPoint::new("12:00 PM", 120.5));
        assert_eq!(payload.trending.expect("trending present")[0].qty, 240);
        assert_eq!(payload.orders.expect("orders present")[0].payment, PaymentMethod::Cash);
        assert_eq!(payload.total_orders, Some(21375));
        assert_eq!(payload.new_customers, Some(1012));
        assert_eq!(payload.total_sales, Some(24254));
    }

    #[test]
    fn test_partial_payload_leaves_missing_fields_none() {
        let payload: DashboardPayload =
            serde_json::from_str(r#"{"totalSales": 10}"#).expect("payload should decode");

        assert_eq!(payload.total_sales, Some(10));
        assert!(payload.sales.is_none());
        assert!(payload.orders.is_none());
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_empty_object_is_empty_payload() {
        let payload: DashboardPayload = serde_json::from_str("{}").expect("payload should decode");
        assert!(payload.is_empty());
        assert_eq!(payload, DashboardPayload::default());
    }

    #[test]
    fn test_unknown_payment_method_is_preserved() {
        let method: PaymentMethod = serde_json::from_str(r#""Voucher""#).unwrap();
        assert_eq!(method, PaymentMethod::Other("Voucher".to_string()));
        assert_eq!(serde_json::to_string(&method).unwrap(), r#""Voucher""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), r#""Card""#);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Cash.to_string(), "Cash");
        assert_eq!(PaymentMethod::Other("QRIS".into()).to_string(), "QRIS");
    }

    #[test]
    fn test_serialized_payload_omits_absent_fields() {
        let payload = DashboardPayload {
            new_customers: Some(3),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"newCustomers":3}"#);
    }
}
