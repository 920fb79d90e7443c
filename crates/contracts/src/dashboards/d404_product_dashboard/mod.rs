pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod state;
pub mod summary;

pub use config::{load_config, DashboardConfig, FALLBACK_COLOR};
pub use dataset::{Category, CategoryShare, DailySales, Dataset, Product, StockStatus};
pub use error::DashboardError;
pub use filter::{filter_products, match_ranges, CategoryFilter};
pub use state::{DashboardState, RefreshTicket, RefreshToggle, TimeRange};
pub use summary::{stat_cards, stock_alerts, summarize, SalesSummary, StockAlerts};
