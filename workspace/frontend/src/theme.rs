//! Soft coffee palette shared by the dashboard components.

pub const BACKGROUND: &str = "#f7efe9";
pub const CARD: &str = "#fbf5f3";
pub const ACCENT: &str = "#c77a67";
pub const ACCENT_DARK: &str = "#a65f4a";
pub const MUTED_TEXT: &str = "#7a6b67";

/// Fill under the sales line (accent at 12% opacity)
pub const ACCENT_FILL: &str = "rgba(199,122,103,0.12)";
pub const GRID_LINE: &str = "rgba(200,200,200,0.12)";
