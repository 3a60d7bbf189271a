use contracts::domain::a013_output::aggregate::Output;
use contracts::domain::common::document::display_date;
use contracts::domain::common::{label_of, or_dash};
use contracts::shared::endpoints;
use contracts::shared::number::format_quantity;
use leptos::prelude::*;
use thaw::*;

use super::super::SECTION;
use crate::routes::paths;
use crate::shared::detail_view::{detail_row, DetailFrame, DetailViewModel};
use crate::shared::list_view::{action_button, RowAction};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

#[component]
pub fn OutputInfo() -> impl IntoView {
    let auth = use_auth();
    let vm = DetailViewModel::<Output>::new();
    if let Some(id) = route_id() {
        vm.load(auth, endpoints::item(endpoints::OUTPUTS, id));
    }

    let body = vm.render(|output: Output| {
        let pdf = RowAction::new_tab("Nota de salida PDF", "download", output.pdf_path());
        view! {
            <div class="detail__header">
                {detail_row("Cliente", label_of(&output.clients))}
                {detail_row("Fecha", display_date(&output.output_date))}
                {detail_row("Nota", or_dash(&output.note))}
            </div>
            <div class="row-actions">{action_button(pdf)}</div>
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
                    {output.output_items.into_iter().map(|item| {
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
        }
    });

    view! {
        <DetailFrame title="Detalle de salida" page_id="a013_output--info" back_path=paths::list(SECTION)>
            {body}
        </DetailFrame>
    }
}
