pub mod event_log;
pub mod select;
pub mod status_bar;
