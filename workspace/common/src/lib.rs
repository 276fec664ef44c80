//! Common transport-layer types shared between the dashboard and whatever
//! backend serves its data.
//! These structs mirror the `/dashboard` payload so the frontend can
//! deserialize responses without duplicating shapes.

mod dashboard;
pub mod format;

pub use dashboard::{DashboardPayload, Order, PaymentMethod, SalesPoint, TrendingItem};
