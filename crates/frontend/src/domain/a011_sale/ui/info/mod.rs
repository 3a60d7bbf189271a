use contracts::domain::a011_sale::aggregate::{Sale, SaleItem};
use contracts::domain::common::document::display_date;
use contracts::domain::common::label_of;
use contracts::shared::endpoints;
use contracts::shared::number::{format_amount, format_quantity};
use contracts::system::auth::Session;
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

fn sale_actions(sale: &Sale, session: &Session) -> Vec<RowAction> {
    let user = session.user_type();
    let mut actions = vec![RowAction::new_tab(
        "Proforma PDF",
        "download",
        endpoints::proforma_pdf(sale.id),
    )];
    if sale.is_editable() && session.has_permission("core.change_sale") {
        actions.push(RowAction::route(
            "Realizar venta",
            "wallet",
            paths::action(SECTION, paths::PERFORM, sale.id),
        ));
    }
    if sale.can_register_output(user) {
        actions.push(RowAction::route(
            "Realizar salida almacén",
            "log-out",
            paths::action(SECTION, paths::ADD_OUTPUT, sale.id),
        ));
    }
    if sale.can_register_payment(user) {
        actions.push(RowAction::route(
            "Agregar pago",
            "wallet",
            paths::action(SECTION, paths::ADD_PAYMENT, sale.id),
        ));
    }
    actions
}

fn items_table(items: Vec<SaleItem>) -> impl IntoView {
    view! {
        <Table class="detail__items">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Producto"</TableHeaderCell>
                    <TableHeaderCell>"Código"</TableHeaderCell>
                    <TableHeaderCell>"Cantidad"</TableHeaderCell>
                    <TableHeaderCell>"Precio"</TableHeaderCell>
                    <TableHeaderCell>"Subtotal"</TableHeaderCell>
                    <TableHeaderCell>"Descuento (%)"</TableHeaderCell>
                    <TableHeaderCell>"Total"</TableHeaderCell>
                    <TableHeaderCell>"Despachado"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {items.into_iter().map(|item| {
                    let product = item.product();
                    view! {
                        <TableRow>
                            <TableCell>{product.name}</TableCell>
                            <TableCell>{product.code}</TableCell>
                            <TableCell>{format_quantity(item.quantity)}</TableCell>
                            <TableCell>{format_amount(item.unit_price)}</TableCell>
                            <TableCell>{format_amount(item.sub_total_price)}</TableCell>
                            <TableCell>{format_quantity(item.discount)}</TableCell>
                            <TableCell>{format_amount(item.total_price)}</TableCell>
                            <TableCell>{format_quantity(item.dispatched_stock)}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
pub fn SaleInfo() -> impl IntoView {
    let auth = use_auth();
    let vm = DetailViewModel::<Sale>::new();
    if let Some(id) = route_id() {
        vm.load(auth, endpoints::item(endpoints::SALES, id));
    }

    let body = vm.render(move |sale: Sale| {
        let actions = auth
            .session
            .with_untracked(|s| s.as_ref().map(|s| sale_actions(&sale, s)))
            .unwrap_or_default();
        view! {
            <DocumentStepper stepper=sale.stepper() />
            <div class="detail__header">
                {detail_row("Vendedor", sale.seller.full_name())}
                {detail_row("Cliente", sale.client_name())}
                {detail_row("Canal de venta", label_of(&sale.selling_channels))}
                {detail_row("Tipo", sale.type_label())}
                {detail_row("Fecha", display_date(&sale.sale_date))}
                {detail_row("Estado", sale.status.label().to_string())}
                {detail_row("Total", format_amount(sale.total))}
                {detail_row("Saldo", format_amount(sale.balance_due))}
            </div>
            <div class="row-actions">{actions.into_iter().map(action_button).collect_view()}</div>
            <h3>"Productos"</h3>
            {items_table(sale.sale_items)}
            <h3>"Pagos"</h3>
            <PaymentHistory payments=sale.payments />
        }
    });

    view! {
        <DetailFrame title="Detalle de venta" page_id="a011_sale--info" back_path=paths::list(SECTION)>
            {body}
        </DetailFrame>
    }
}
