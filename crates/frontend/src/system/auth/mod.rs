pub mod api;
pub mod context;
pub mod guard;
pub mod idle;
pub mod storage;

pub use context::{use_auth, AuthContext};
