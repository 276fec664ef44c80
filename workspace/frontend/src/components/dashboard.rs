mod chart;
mod orders;
mod stats;
mod trending;
mod view;

pub use view::Dashboard;
