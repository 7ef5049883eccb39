pub mod user_list;
