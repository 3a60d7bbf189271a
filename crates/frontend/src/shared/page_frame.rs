//! Root wrapper of every routed page.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element so a page can be located from the DOM inspector.

use leptos::prelude::*;

/// Paginated table of records.
pub const PAGE_CAT_LIST: &str = "list";
/// Add/edit wizard.
pub const PAGE_CAT_FORM: &str = "form";
/// Read-only view of one document.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Login, agency selection, dashboard and reports.
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a011_sale--list"`.
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
