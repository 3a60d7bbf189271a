pub mod choice_select;
pub mod line_items_table;
pub mod modal;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod stepper;
pub mod validated_input;

pub use choice_select::ChoiceSelect;
pub use line_items_table::LineItemsTable;
pub use modal::Modal;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stepper::DocumentStepper;
pub use validated_input::{PreviewField, ValidatedInput};
