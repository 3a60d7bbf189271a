use super::aggregate::{Client, ClientPayload};
use crate::domain::common::{ADDRESS_RULE, NAME_RULE};
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FieldRule, FormModel, ValidatedField};
use crate::shared::validation::{validate_ci_number, validate_email, validate_phone_number};

pub const PHONE_RULE: FieldRule = FieldRule::new(validate_phone_number, "Ingrese numero valido");
pub const CI_NIT_RULE: FieldRule = FieldRule::new(validate_ci_number, "Ingrese ci/nit valido");
pub const EMAIL_RULE: FieldRule = FieldRule::new(validate_email, "Ingrese correo valido");

#[derive(Debug, Clone, PartialEq)]
pub struct ClientForm {
    pub name: ValidatedField,
    pub phone: ValidatedField,
    pub nit: ValidatedField,
    pub email: ValidatedField,
    pub address: ValidatedField,
    /// `distribution`, `showroom` or `projects`; empty until chosen.
    pub client_type: String,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            name: ValidatedField::new(NAME_RULE),
            phone: ValidatedField::new(PHONE_RULE),
            nit: ValidatedField::new(CI_NIT_RULE),
            email: ValidatedField::new(EMAIL_RULE),
            address: ValidatedField::new(ADDRESS_RULE),
            client_type: String::new(),
        }
    }
}

impl From<&Client> for ClientForm {
    fn from(c: &Client) -> Self {
        Self {
            name: ValidatedField::with_value(NAME_RULE, c.name.clone()),
            phone: ValidatedField::with_value(PHONE_RULE, c.phone.clone()),
            nit: ValidatedField::with_value(CI_NIT_RULE, c.nit.clone()),
            email: ValidatedField::with_value(EMAIL_RULE, c.email.clone()),
            address: ValidatedField::with_value(ADDRESS_RULE, c.address.clone()),
            client_type: c.client_type.clone(),
        }
    }
}

impl FormModel for ClientForm {
    type Payload = ClientPayload;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.name, &self.phone, &self.nit, &self.email, &self.address])
            && !self.client_type.is_empty()
    }

    fn payload(&self) -> ClientPayload {
        ClientPayload {
            name: self.name.value.trim().to_string(),
            phone: self.phone.value.trim().to_string(),
            nit: self.nit.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            address: self.address.value.trim().to_string(),
            client_type: self.client_type.clone(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        let fields: [(&str, &mut ValidatedField); 5] = [
            ("name", &mut self.name),
            ("phone", &mut self.phone),
            ("nit", &mut self.nit),
            ("email", &mut self.email),
            ("address", &mut self.address),
        ];
        for (key, field) in fields {
            if let Some(message) = errors.first(key) {
                field.dispatch(FieldAction::Error(message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListRow;
    use serde_json::json;

    fn filled() -> ClientForm {
        let mut form = ClientForm::default();
        let set = |f: &mut ValidatedField, v: &str| f.dispatch(FieldAction::Change(v.into()));
        set(&mut form.name, "Constructora Illimani");
        set(&mut form.phone, "22456789");
        set(&mut form.nit, "4455667");
        set(&mut form.email, "compras@illimani.com");
        set(&mut form.address, "Calle Loayza 250, Centro");
        form
    }

    #[test]
    fn test_client_type_is_required() {
        let mut form = filled();
        assert!(!form.is_ready());
        form.client_type = "projects".into();
        assert!(form.is_ready());
        assert_eq!(form.payload().client_type, "projects");
    }

    #[test]
    fn test_short_ci_is_rejected() {
        let mut form = filled();
        form.nit.dispatch(FieldAction::Change("12345".into()));
        assert_eq!(form.nit.feedback(), Some("Ingrese ci/nit valido"));
    }

    #[test]
    fn test_list_shows_client_type_label() {
        let client: Client = serde_json::from_value(json!({
            "id": 1, "name": "Juan Pérez", "phone": "70000000", "nit": "1234567",
            "email": "juan@correo.com", "address": "Zona Sur, calle 21", "client_type": "showroom"
        }))
        .expect("parse");
        assert_eq!(client.cells()[5], "Showroom");
        assert!(ClientForm::from(&client).is_ready());
    }
}
