pub mod synthetic;
pub mod text;
