use contracts::domain::a012_entry::aggregate::Entry;
use contracts::domain::common::document::display_date;
use contracts::domain::common::label_of;
use contracts::shared::endpoints;
use contracts::shared::number::format_quantity;
use leptos::prelude::*;
use thaw::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::detail_view::{detail_row, DetailFrame, DetailViewModel};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

#[component]
pub fn EntryInfo() -> impl IntoView {
    let auth = use_auth();
    let vm = DetailViewModel::<Entry>::new();
    if let Some(id) = route_id() {
        vm.load(auth, endpoints::item(endpoints::ENTRIES, id));
    }

    let body = vm.render(|entry: Entry| view! {
        <div class="detail__header">
            {detail_row("Proveedor", label_of(&entry.suppliers))}
            {detail_row("Fecha", display_date(&entry.entry_date))}
            {detail_row("Factura", entry.invoice_number.clone())}
        </div>
        <Table class="detail__items">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Producto"</TableHeaderCell>
                    <TableHeaderCell>"Código"</TableHeaderCell>
                    <TableHeaderCell>"Almacén"</TableHeaderCell>
                    <TableHeaderCell>"Cantidad"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {entry.entry_items.into_iter().map(|item| {
                    let warehouse = item.products_stock.warehouse_name();
                    let quantity = format_quantity(item.quantity);
                    let name = item.products_stock.products.name;
                    let code = item.products_stock.products.code;
                    view! {
                        <TableRow>
                            <TableCell>{name}</TableCell>
                            <TableCell>{code}</TableCell>
                            <TableCell>{warehouse}</TableCell>
                            <TableCell>{quantity}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    });

    view! {
        <DetailFrame title="Detalle de entrada" page_id="a012_entry--info" back_path=paths::list(SECTION)>
            {body}
        </DetailFrame>
    }
}
