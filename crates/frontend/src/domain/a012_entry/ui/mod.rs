pub mod add;
pub mod info;
pub mod list;
