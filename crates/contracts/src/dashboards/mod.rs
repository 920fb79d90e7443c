pub mod d404_product_dashboard;
