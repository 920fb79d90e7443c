pub mod card_animated;
pub mod indicator_set;
pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod ui;
