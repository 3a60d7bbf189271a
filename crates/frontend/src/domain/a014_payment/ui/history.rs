use contracts::domain::common::document::{display_date, PaymentRecord};
use contracts::shared::number::format_amount;
use leptos::prelude::*;
use thaw::*;

/// Payments already registered against a purchase or sale.
#[component]
pub fn PaymentHistory(payments: Vec<PaymentRecord>) -> impl IntoView {
    if payments.is_empty() {
        return view! { <p class="detail__empty">"Sin pagos registrados."</p> }.into_any();
    }
    view! {
        <Table class="payments">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Fecha"</TableHeaderCell>
                    <TableHeaderCell>"Método"</TableHeaderCell>
                    <TableHeaderCell>"Monto"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {payments.into_iter().map(|p| {
                    let date = display_date(&p.payment_date);
                    let method = p.method_label();
                    let amount = format_amount(p.amount);
                    view! {
                        <TableRow>
                            <TableCell>{date}</TableCell>
                            <TableCell>{method}</TableCell>
                            <TableCell>{amount}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}
