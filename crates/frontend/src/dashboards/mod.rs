pub mod d404_product_dashboard;

pub use d404_product_dashboard::ui::ProductDashboard;
