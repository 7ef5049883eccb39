pub mod api;
pub mod core;
pub mod listing;
pub mod models;
pub mod stores;
pub mod ui;
pub mod utils;
pub mod validation;
