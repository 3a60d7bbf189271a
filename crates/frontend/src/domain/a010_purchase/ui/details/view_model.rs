use contracts::domain::a010_purchase::form::PurchaseForm;
use contracts::shared::choices::{find_choice, label_for, Choice, TRANSACTION_TYPES};
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use contracts::shared::number::format_amount;
use leptos::prelude::*;

use crate::shared::choices::named_choices;
use crate::shared::form_view::FormViewModel;
use crate::shared::http::{send, ApiRequest};
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct PurchaseAddViewModel {
    pub base: FormViewModel<PurchaseForm>,
    pub suppliers: RwSignal<Vec<Choice>>,
}

impl PurchaseAddViewModel {
    pub fn new(agency: i64) -> Self {
        Self {
            base: FormViewModel::new(PurchaseForm::new(agency), FormMode::Create),
            suppliers: named_choices(endpoints::ALL_SUPPLIERS),
        }
    }

    pub fn supplier_name(&self) -> String {
        let id = self.base.form.with(|f| f.supplier.clone());
        self.suppliers
            .with(|s| find_choice(s, &id).map(|c| c.label.clone()).unwrap_or_default())
    }

    pub fn type_label(&self) -> String {
        self.base
            .form
            .with(|f| label_for(&TRANSACTION_TYPES, &f.purchase_type))
    }

    pub fn total(&self) -> String {
        format_amount(self.base.form.with(PurchaseForm::total))
    }

    pub fn next(&self, auth: AuthContext) {
        self.base.next(auth, |payload| async move {
            send(ApiRequest::post(endpoints::PURCHASES).json(&payload)?).await
        });
    }
}
