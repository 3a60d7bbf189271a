use contracts::domain::a010_purchase::aggregate::Purchase;
use contracts::domain::a011_sale::aggregate::Sale;
use contracts::domain::a014_payment::aggregate::TransactionType;
use contracts::domain::a014_payment::form::PaymentForm;
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use contracts::shared::number::format_amount;
use leptos::prelude::*;

use super::fields::{PaymentFields, PaymentPreview};
use crate::domain::{a010_purchase, a011_sale};
use crate::routes::paths;
use crate::shared::components::PreviewField;
use crate::shared::form_view::{FormViewModel, WizardFrame};
use crate::shared::http::{send, ApiRequest};
use crate::shared::navigator::route_id;
use crate::system::auth::use_auth;

/// Pays down the balance of the purchase or sale in the route.
#[component]
pub fn PaymentAdd(transaction_type: TransactionType) -> impl IntoView {
    let auth = use_auth();
    let id = route_id().unwrap_or_default();
    let vm = FormViewModel::new(
        PaymentForm::new(id, transaction_type, "", 0.0, 0.0),
        FormMode::Create,
    );
    let section = match transaction_type {
        TransactionType::Compra => {
            vm.load(auth, endpoints::item(endpoints::PURCHASES, id), move |p: Purchase| {
                PaymentForm::new(p.id, transaction_type, p.supplier_name(), p.total, p.balance_due)
            });
            a010_purchase::SECTION
        }
        TransactionType::Venta => {
            vm.load(auth, endpoints::item(endpoints::SALES, id), move |s: Sale| {
                PaymentForm::new(s.id, transaction_type, s.client_name(), s.total, s.balance_due)
            });
            a011_sale::SECTION
        }
    };

    let form = vm.form;
    let summary = move || {
        let (counterparty, total, balance) =
            form.with(|f| (f.counterparty.clone(), f.total, f.balance_due));
        view! {
            <PreviewField label=transaction_type.counterparty_label() value=Signal::stored(counterparty) />
            <PreviewField label="Total" value=Signal::stored(format_amount(total)) />
            <PreviewField label="Saldo pendiente" value=Signal::stored(format_amount(balance)) />
        }
    };
    let on_next = Callback::new(move |_| {
        vm.next(auth, |payload| async move {
            send(ApiRequest::post(endpoints::PAYMENTS).json(&payload)?).await
        })
    });

    view! {
        <WizardFrame
            title=format!("Agregar pago de {}", transaction_type.label().to_lowercase())
            page_id="a014_payment--details"
            wizard=vm.wizard
            back_path=paths::list(section)
            on_next=on_next
            ready=Signal::derive(move || vm.is_ready())
            loading=vm.loading
            load_error=vm.load_error
            form=move || view! {
                {summary}
                <PaymentFields form=form />
            }
            preview=move || view! {
                {summary}
                <PaymentPreview form=form />
            }
        />
    }
}
