pub mod add;
pub mod fields;
pub mod history;
pub mod list;
