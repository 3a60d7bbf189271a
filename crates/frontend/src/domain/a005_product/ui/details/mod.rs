//! Product add/edit page. The product is sent as multipart so the picture
//! can travel with the fields.
//!
//! - view_model.rs: form state and the multipart submit
//! - view.rs: inputs and preview

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
