pub mod choices;
pub mod endpoints;
pub mod form;
pub mod line_items;
pub mod list;
pub mod number;
pub mod report;
pub mod validation;
