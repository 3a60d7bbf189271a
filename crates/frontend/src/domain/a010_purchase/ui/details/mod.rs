//! New purchase: header, lines from the agency stock and the first payment.

mod view;
mod view_model;

pub use view::PurchaseAdd;
