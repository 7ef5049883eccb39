pub mod user;
pub mod view;
