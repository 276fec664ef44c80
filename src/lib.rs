//! Core of the Nogops coffee-shop dashboard.
//!
//! The dashboard view owns five data slices (sales series, trending items,
//! recent orders and three KPI counters), derives a chart dataset from the
//! sales series and can be populated once at startup from an external
//! [`DashboardSource`]. Rendering lives in the `frontend` crate; everything
//! here is plain Rust so it can be unit tested natively.

pub mod chart;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod state;

pub use chart::{ChartDataset, derive_chart_dataset};
pub use defaults::DashboardDefaults;
pub use error::{DashboardError, Result};
pub use loader::{DashboardSource, LoadOutcome, StartupLoad, ViewLifetime};
pub use state::{DashboardAction, DashboardState, Slice};

pub use common::{DashboardPayload, Order, PaymentMethod, SalesPoint, TrendingItem};
