pub mod paging;
pub mod search;
pub mod sort;
pub mod view_model;

pub use view_model::{UserListView, ViewSnapshot};
