use contracts::domain::a011_sale::aggregate::Sale;
use contracts::domain::a011_sale::form::{SaleForm, SaleMode};
use contracts::shared::choices::{find_choice, Choice};
use contracts::shared::endpoints;
use contracts::shared::form::FormMode;
use leptos::prelude::*;

use crate::shared::choices::named_choices;
use crate::shared::form_view::{save, FormViewModel};
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct SaleDetailsViewModel {
    pub base: FormViewModel<SaleForm>,
    pub sale_mode: SaleMode,
    pub clients: RwSignal<Vec<Choice>>,
    pub channels: RwSignal<Vec<Choice>>,
}

impl SaleDetailsViewModel {
    /// `id` is required outside [`SaleMode::Proforma`].
    pub fn new(sale_mode: SaleMode, id: Option<i64>, agency: i64) -> Self {
        let mode = match sale_mode {
            SaleMode::Proforma => FormMode::Create,
            SaleMode::Edit | SaleMode::Perform => FormMode::from_id(id),
        };
        let mut form = SaleForm::new(agency);
        form.mode = sale_mode;
        Self {
            base: FormViewModel::new(form, mode),
            sale_mode,
            clients: named_choices(endpoints::ALL_CLIENTS),
            channels: named_choices(endpoints::ALL_SELLING_CHANNELS),
        }
    }

    pub fn load_if_needed(&self, auth: AuthContext, agency: i64) {
        let perform = self.sale_mode == SaleMode::Perform;
        if let FormMode::Edit(id) = self.base.mode() {
            self.base.load(auth, endpoints::item(endpoints::SALES, id), move |s: Sale| {
                SaleForm::from_sale(&s, agency, perform)
            });
        }
    }

    /// Prices depend on the channel, so lines picked under another one go.
    pub fn change_channel(&self, channel: String) {
        self.base.form.update(|f| {
            if f.selling_channel != channel {
                f.selling_channel = channel;
                f.lines = Default::default();
            }
        });
    }

    pub fn title(&self) -> &'static str {
        match self.sale_mode {
            SaleMode::Proforma => "Agregar proforma",
            SaleMode::Edit => "Editar proforma",
            SaleMode::Perform => "Realizar venta",
        }
    }

    pub fn label_of(choices: RwSignal<Vec<Choice>>, value: String) -> String {
        choices.with(|c| find_choice(c, &value).map(|c| c.label.clone()).unwrap_or_default())
    }

    pub fn next(&self, auth: AuthContext) {
        let mode = self.base.mode();
        self.base
            .next(auth, move |payload| save(endpoints::SALES, mode, payload));
    }
}
