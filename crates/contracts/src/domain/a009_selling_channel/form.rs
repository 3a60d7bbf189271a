use super::aggregate::{ChannelPricePayload, SellingChannel, SellingChannelPayload};
use crate::domain::common::NAME_RULE;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};
use crate::shared::line_items::{CatalogItem, LineField, LineForm, LineItem, LineItems, PickerScope};
use crate::shared::validation::parse_date;

pub const DATE_ORDER_ERROR: &str = "La fecha final no puede ser anterior a la inicial.";

#[derive(Debug, Clone, PartialEq)]
pub struct SellingChannelForm {
    pub name: ValidatedField,
    pub lines: LineItems,
}

impl Default for SellingChannelForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            lines: LineItems::new(),
        }
    }
}

impl From<&SellingChannel> for SellingChannelForm {
    fn from(channel: &SellingChannel) -> Self {
        let lines = channel
            .products
            .iter()
            .map(|p| {
                let mut line = LineItem::new(CatalogItem {
                    id: p.id,
                    name: p.name.clone(),
                    code: p.code.clone(),
                    price: p.price,
                    ..Default::default()
                });
                if let Some(date) = &p.start_date {
                    line.dispatch(LineField::StartDate, FieldAction::Change(date.clone()));
                }
                if let Some(date) = &p.end_date {
                    line.dispatch(LineField::EndDate, FieldAction::Change(date.clone()));
                }
                line
            })
            .collect();
        Self {
            name: ValidatedField::with_value(NAME_RULE, channel.name.clone()),
            lines: LineItems::from_items(lines),
        }
    }
}

impl SellingChannelForm {
    pub const SCOPE: PickerScope = PickerScope::Products;

    /// Marks every line whose end date precedes its start date.
    pub fn check_date_order(&mut self) {
        let inverted: Vec<usize> = self
            .lines
            .items()
            .iter()
            .enumerate()
            .filter(|(_, l)| is_inverted(l))
            .map(|(i, _)| i)
            .collect();
        for index in inverted {
            self.lines.set_error(index, LineField::EndDate, DATE_ORDER_ERROR);
        }
    }
}

fn is_inverted(line: &LineItem) -> bool {
    match (parse_date(&line.start_date.value), parse_date(&line.end_date.value)) {
        (Some(start), Some(end)) => end < start,
        _ => false,
    }
}

fn optional(field: &ValidatedField) -> Option<String> {
    field.is_present().then(|| field.value.trim().to_string())
}

impl FormModel for SellingChannelForm {
    type Payload = SellingChannelPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name])
            && self
                .lines
                .items()
                .iter()
                .all(|l| l.is_ready(&[LineField::Price]) && !is_inverted(l))
    }

    fn payload(&self) -> SellingChannelPayload {
        SellingChannelPayload {
            name: self.name.value.trim().to_string(),
            product_channel_price: self
                .lines
                .items()
                .iter()
                .map(|l| ChannelPricePayload {
                    product: l.product_id(),
                    price: l.price.value.trim().to_string(),
                    start_date: optional(&l.start_date),
                    end_date: optional(&l.end_date),
                })
                .collect(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("name") {
            self.name.dispatch(FieldAction::Error(message));
        }
        self.lines
            .apply_errors(&errors.items("product_channel_price"));
    }
}

impl LineForm for SellingChannelForm {
    fn lines(&self) -> &LineItems {
        &self.lines
    }

    fn lines_mut(&mut self) -> &mut LineItems {
        &mut self.lines
    }

    fn lines_changed(&mut self) {
        self.check_date_order();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> SellingChannelForm {
        let mut form = SellingChannelForm::default();
        form.name.dispatch(FieldAction::Change("Mayoristas".into()));
        form.lines.add(CatalogItem {
            id: 5,
            name: "Cemento".into(),
            ..Default::default()
        });
        form.lines.change(5, LineField::Price, "48".into());
        form
    }

    #[test]
    fn test_blank_dates_are_sent_as_null() {
        let form = filled();
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({
                "name": "Mayoristas",
                "product_channel_price": [
                    {"product": 5, "price": "48", "start_date": null, "end_date": null}
                ]
            })
        );
    }

    #[test]
    fn test_inverted_dates_flag_the_line() {
        let mut form = filled();
        form.lines.change(5, LineField::StartDate, "2024-05-10".into());
        form.lines.change(5, LineField::EndDate, "2024-05-01".into());
        assert!(!form.is_ready());
        form.check_date_order();
        assert_eq!(form.lines.items()[0].end_date.feedback(), Some(DATE_ORDER_ERROR));
    }

    #[test]
    fn test_line_edits_recheck_date_order() {
        let mut form = filled();
        form.lines_mut().change(5, LineField::StartDate, "2024-05-10".into());
        form.lines_mut().change(5, LineField::EndDate, "2024-05-01".into());
        form.lines_changed();
        assert_eq!(form.lines().items()[0].end_date.feedback(), Some(DATE_ORDER_ERROR));
    }

    #[test]
    fn test_malformed_date_is_invalid() {
        let mut form = filled();
        form.lines.change(5, LineField::StartDate, "10/05/2024".into());
        assert_eq!(
            form.lines.items()[0].start_date.feedback(),
            Some("Ingrese una fecha válida o deje vacío")
        );
        assert!(!form.is_ready());
    }
}
