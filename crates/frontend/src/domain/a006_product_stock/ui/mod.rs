pub mod damaged;
pub mod list;
