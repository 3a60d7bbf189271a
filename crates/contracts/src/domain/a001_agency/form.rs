use super::aggregate::{Agency, AgencyPayload};
use crate::domain::common::{ADDRESS_RULE as LOCATION_RULE, NAME_RULE};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, ValidatedField};

#[derive(Debug, Clone, PartialEq)]
pub struct AgencyForm {
    pub name: ValidatedField,
    pub location: ValidatedField,
    /// Selected city code; empty until chosen.
    pub city: String,
}

impl Default for AgencyForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            location: ValidatedField::new(LOCATION_RULE),
            city: String::new(),
        }
    }
}

impl From<&Agency> for AgencyForm {
    fn from(agency: &Agency) -> Self {
        Self {
            name: ValidatedField::with_value(NAME_RULE, agency.name.clone()),
            location: ValidatedField::with_value(LOCATION_RULE, agency.location.clone()),
            city: agency.city.clone(),
        }
    }
}

impl FormModel for AgencyForm {
    type Payload = AgencyPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name, &self.location]) && !self.city.is_empty()
    }

    fn payload(&self) -> AgencyPayload {
        AgencyPayload {
            name: self.name.value.trim().to_string(),
            location: self.location.value.trim().to_string(),
            city: self.city.clone(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("name") {
            self.name.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("location") {
            self.location.dispatch(FieldAction::Error(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormMode, Wizard, WizardCommand, WizardStep};
    use serde_json::json;

    fn filled() -> AgencyForm {
        let mut form = AgencyForm::default();
        form.name.dispatch(FieldAction::Change("Sucursal Centro".into()));
        form.location
            .dispatch(FieldAction::Change("Av. Siempre Viva 123".into()));
        form.city = "LP".into();
        form
    }

    #[test]
    fn test_payload_sends_city_code() {
        let form = filled();
        assert!(form.is_ready());
        assert_eq!(
            serde_json::to_value(form.payload()).expect("serialize"),
            json!({"name": "Sucursal Centro", "location": "Av. Siempre Viva 123", "city": "LP"})
        );
    }

    #[test]
    fn test_city_is_required() {
        let mut form = filled();
        form.city.clear();
        assert!(!form.is_ready());
    }

    #[test]
    fn test_duplicate_name_returns_to_editing() {
        let mut form = filled();
        let mut wizard = Wizard::new(FormMode::Create);
        wizard.next(form.is_ready());
        assert_eq!(wizard.next(form.is_ready()), WizardCommand::Submit);

        // 422 from the server
        let body = json!({"name": ["Ya existe una agencia con este nombre."]});
        form.apply_server_errors(&FieldErrors::from_value(body));
        wizard.submit_failed();

        assert_eq!(wizard.step(), WizardStep::Editing);
        assert_eq!(
            form.name.feedback(),
            Some("Ya existe una agencia con este nombre.")
        );
        assert!(form.location.is_valid());
        assert!(!form.is_ready());
    }

    #[test]
    fn test_created_agency_reaches_done() {
        let form = filled();
        let mut wizard = Wizard::new(FormMode::Create);
        wizard.next(form.is_ready());
        wizard.next(form.is_ready());
        wizard.submit_succeeded();
        assert_eq!(wizard.step(), WizardStep::Done);
    }

    #[test]
    fn test_edit_prefills_fields() {
        let agency = Agency {
            id: 2,
            name: "Sucursal Sur".into(),
            location: "Calle Comercio 455".into(),
            city: "CBBA".into(),
        };
        let form = AgencyForm::from(&agency);
        assert!(form.is_ready());
        assert_eq!(form.payload().city, "CBBA");
    }
}
