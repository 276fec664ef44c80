use std::fmt;
use std::sync::Arc;

use common::{DashboardPayload, Order, SalesPoint, TrendingItem};
use tracing::{debug, info};

use crate::chart::{ChartDataset, derive_chart_dataset};
use crate::defaults::DashboardDefaults;

/// One independently replaceable piece of dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Sales,
    Trending,
    Orders,
    TotalOrders,
    NewCustomers,
    TotalSales,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slice::Sales => "sales",
            Slice::Trending => "trending",
            Slice::Orders => "orders",
            Slice::TotalOrders => "totalOrders",
            Slice::NewCustomers => "newCustomers",
            Slice::TotalSales => "totalSales",
        };
        f.write_str(name)
    }
}

/// Whole-value replacement of dashboard state, one variant per slice plus a
/// payload variant for the startup load.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    ReplaceSales(Vec<SalesPoint>),
    ReplaceTrending(Vec<TrendingItem>),
    ReplaceOrders(Vec<Order>),
    SetTotalOrders(u64),
    SetNewCustomers(u64),
    SetTotalSales(u64),
    ApplyPayload(DashboardPayload),
}

/// State held by the dashboard view.
///
/// Lists are behind `Arc` so cloning the state (as a UI reducer does on every
/// action) only copies pointers. The chart dataset is derived from the sales
/// slice and rebuilt only when that slice is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    sales: Arc<Vec<SalesPoint>>,
    chart: Arc<ChartDataset>,
    trending: Arc<Vec<TrendingItem>>,
    orders: Arc<Vec<Order>>,
    total_orders: u64,
    new_customers: u64,
    total_sales: u64,
}

impl DashboardState {
    pub fn new(defaults: DashboardDefaults) -> Self {
        let chart = Arc::new(derive_chart_dataset(&defaults.sales));

        Self {
            sales: Arc::new(defaults.sales),
            chart,
            trending: Arc::new(defaults.trending),
            orders: Arc::new(defaults.orders),
            total_orders: defaults.total_orders,
            new_customers: defaults.new_customers,
            total_sales: defaults.total_sales,
        }
    }

    pub fn sales(&self) -> &[SalesPoint] {
        &self.sales
    }

    /// The chart dataset derived from the current sales slice.
    pub fn chart(&self) -> &ChartDataset {
        &self.chart
    }

    /// Shared handle to the chart dataset, cheap to pass to render code.
    pub fn chart_handle(&self) -> Arc<ChartDataset> {
        Arc::clone(&self.chart)
    }

    pub fn trending(&self) -> &[TrendingItem] {
        &self.trending
    }

    pub fn trending_handle(&self) -> Arc<Vec<TrendingItem>> {
        Arc::clone(&self.trending)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_handle(&self) -> Arc<Vec<Order>> {
        Arc::clone(&self.orders)
    }

    pub fn total_orders(&self) -> u64 {
        self.total_orders
    }

    pub fn new_customers(&self) -> u64 {
        self.new_customers
    }

    pub fn total_sales(&self) -> u64 {
        self.total_sales
    }

    /// Replaces the sales series and re-derives the chart dataset.
    pub fn replace_sales(&mut self, sales: Vec<SalesPoint>) {
        debug!(points = sales.len(), "Replacing sales slice");
        self.chart = Arc::new(derive_chart_dataset(&sales));
        self.sales = Arc::new(sales);
    }

    pub fn replace_trending(&mut self, trending: Vec<TrendingItem>) {
        debug!(items = trending.len(), "Replacing trending slice");
        self.trending = Arc::new(trending);
    }

    pub fn replace_orders(&mut self, orders: Vec<Order>) {
        debug!(orders = orders.len(), "Replacing orders slice");
        self.orders = Arc::new(orders);
    }

    pub fn set_total_orders(&mut self, value: u64) {
        self.total_orders = value;
    }

    pub fn set_new_customers(&mut self, value: u64) {
        self.new_customers = value;
    }

    pub fn set_total_sales(&mut self, value: u64) {
        self.total_sales = value;
    }

    /// Applies a single action.
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ReplaceSales(sales) => self.replace_sales(sales),
            DashboardAction::ReplaceTrending(trending) => self.replace_trending(trending),
            DashboardAction::ReplaceOrders(orders) => self.replace_orders(orders),
            DashboardAction::SetTotalOrders(value) => self.set_total_orders(value),
            DashboardAction::SetNewCustomers(value) => self.set_new_customers(value),
            DashboardAction::SetTotalSales(value) => self.set_total_sales(value),
            DashboardAction::ApplyPayload(payload) => {
                self.apply_payload(payload);
            }
        }
    }

    /// Applies every slice present in `payload` and returns the slices that
    /// were replaced. Slices missing from the payload keep their value.
    pub fn apply_payload(&mut self, payload: DashboardPayload) -> Vec<Slice> {
        if payload.is_empty() {
            info!("Dashboard payload carried no slices, keeping current state");
            return Vec::new();
        }

        let DashboardPayload {
            sales,
            trending,
            orders,
            total_orders,
            new_customers,
            total_sales,
        } = payload;

        let mut replaced = Vec::with_capacity(6);

        if let Some(sales) = sales {
            self.replace_sales(sales);
            replaced.push(Slice::Sales);
        }
        if let Some(trending) = trending {
            self.replace_trending(trending);
            replaced.push(Slice::Trending);
        }
        if let Some(orders) = orders {
            self.replace_orders(orders);
            replaced.push(Slice::Orders);
        }
        if let Some(value) = total_orders {
            self.set_total_orders(value);
            replaced.push(Slice::TotalOrders);
        }
        if let Some(value) = new_customers {
            self.set_new_customers(value);
            replaced.push(Slice::NewCustomers);
        }
        if let Some(value) = total_sales {
            self.set_total_sales(value);
            replaced.push(Slice::TotalSales);
        }

        info!(slices = ?replaced, "Applied dashboard payload");
        replaced
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardDefaults::sample())
    }
}
