pub mod choices;
pub mod components;
pub mod config;
pub mod detail_view;
pub mod form_view;
pub mod http;
pub mod icons;
pub mod line_editor;
pub mod list_view;
pub mod navigator;
pub mod page_frame;
pub mod product_picker;
