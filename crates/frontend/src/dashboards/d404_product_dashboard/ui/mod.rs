mod category_chart;
mod dashboard;
mod inventory_table;
mod sales_chart;
mod stock_alerts;

pub use dashboard::ProductDashboard;
