pub mod context;
pub mod select;

pub use context::{use_agency, AgencyContext};
pub use select::SelectAgencyPage;
