//! Proforma creation and edition, and the step that performs a proforma.
//!
//! - view_model.rs: loading the proforma, option lists and the submit
//! - view.rs: the wizard page

mod view;
mod view_model;

pub use view::SaleDetails;
