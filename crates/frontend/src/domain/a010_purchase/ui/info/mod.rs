use contracts::domain::a010_purchase::aggregate::{Purchase, PurchaseItem};
use contracts::domain::common::document::display_date;
use contracts::shared::choices::{label_for, TRANSACTION_TYPES};
use contracts::shared::endpoints;
use contracts::shared::number::{format_amount, format_quantity};
use leptos::prelude::*;
use thaw::*;

use super::super::SECTION;
use crate::domain::a014_payment::ui::history::PaymentHistory;
use crate::routes::paths;
use crate::shared::components::DocumentStepper;
use crate::shared::detail_view::{detail_row, DetailFrame, DetailViewModel};
use crate::shared::list_view::{action_button, RowAction};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

fn items_table(items: Vec<PurchaseItem>) -> impl IntoView {
    view! {
        <Table class="detail__items">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Producto"</TableHeaderCell>
                    <TableHeaderCell>"Código"</TableHeaderCell>
                    <TableHeaderCell>"Almacén"</TableHeaderCell>
                    <TableHeaderCell>"Cantidad"</TableHeaderCell>
                    <TableHeaderCell>"Precio unitario"</TableHeaderCell>
                    <TableHeaderCell>"Total"</TableHeaderCell>
                    <TableHeaderCell>"Ingresado"</TableHeaderCell>
                    <TableHeaderCell>"Estado"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {items.into_iter().map(|item| {
                    let warehouse = item.products_stock.warehouse_name();
                    let quantity = format_quantity(item.quantity);
                    let unit_price = format_amount(item.unit_price);
                    let total_price = format_amount(item.total_price);
                    let entered = format_quantity(item.entered_stock);
                    let status = item.status_display;
                    let name = item.products_stock.products.name;
                    let code = item.products_stock.products.code;
                    view! {
                        <TableRow>
                            <TableCell>{name}</TableCell>
                            <TableCell>{code}</TableCell>
                            <TableCell>{warehouse}</TableCell>
                            <TableCell>{quantity}</TableCell>
                            <TableCell>{unit_price}</TableCell>
                            <TableCell>{total_price}</TableCell>
                            <TableCell>{entered}</TableCell>
                            <TableCell>{status}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
pub fn PurchaseInfo() -> impl IntoView {
    let auth = use_auth();
    let vm = DetailViewModel::<Purchase>::new();
    if let Some(id) = route_id() {
        vm.load(auth, endpoints::item(endpoints::PURCHASES, id));
    }

    let body = vm.render(move |purchase: Purchase| {
        let user = auth.session.with_untracked(|s| s.as_ref().and_then(|s| s.user_type()));
        let mut actions = Vec::new();
        if purchase.can_register_entry(user) {
            actions.push(RowAction::route(
                "Realizar entrada almacén",
                "log-in",
                paths::action(SECTION, paths::ADD_ENTRY, purchase.id),
            ));
        }
        if purchase.can_register_payment(user) {
            actions.push(RowAction::route(
                "Agregar pago",
                "wallet",
                paths::action(SECTION, paths::ADD_PAYMENT, purchase.id),
            ));
        }
        view! {
            <DocumentStepper stepper=purchase.stepper() />
            <div class="detail__header">
                {detail_row("Comprador", purchase.buyer.full_name())}
                {detail_row("Proveedor", purchase.supplier_name())}
                {detail_row("Fecha", display_date(&purchase.purchase_date))}
                {detail_row("Factura", purchase.invoice_number.clone())}
                {detail_row("Tipo", label_for(&TRANSACTION_TYPES, &purchase.purchase_type))}
                {detail_row("Estado", purchase.status.label().to_string())}
                {detail_row("Total", format_amount(purchase.total))}
                {detail_row("Saldo", format_amount(purchase.balance_due))}
            </div>
            <div class="row-actions">{actions.into_iter().map(action_button).collect_view()}</div>
            <h3>"Productos"</h3>
            {items_table(purchase.purchase_items)}
            <h3>"Pagos"</h3>
            <PaymentHistory payments=purchase.payments />
        }
    });

    view! {
        <DetailFrame title="Detalle de compra" page_id="a010_purchase--info" back_path=paths::list(SECTION)>
            {body}
        </DetailFrame>
    }
}
