pub mod select;
pub mod status_bar;
