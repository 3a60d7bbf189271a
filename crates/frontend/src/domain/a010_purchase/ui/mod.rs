pub mod details;
pub mod info;
pub mod list;
