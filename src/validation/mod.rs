pub mod new_user;
