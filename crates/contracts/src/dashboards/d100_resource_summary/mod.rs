pub mod dto;

pub use dto::{humanize, DashboardSummary, DashboardTile};
