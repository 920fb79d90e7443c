pub mod charts;
pub mod components;
pub mod icons;
pub mod list_utils;
