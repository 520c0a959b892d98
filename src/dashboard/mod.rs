//! Web dashboard module
//!
//! Serves the single dashboard page at `/`, rendered server-side:
//! - Department and physician selectors
//! - Four KPI cards and the low-bed alert region
//! - Wait time, occupancy and department charts as inline SVG
//! - The upcoming appointments table
//!
//! Changing a selector submits the form, which runs a fresh pipeline pass.

pub mod handler;
pub mod render;
pub mod types;

pub use handler::{assets_handler, dashboard_handler, view_handler};
pub use render::render_page;
pub use types::DashboardQuery;
