use super::LoginRequest;
use crate::shared::form::{all_ready, FieldAction, FieldErrors, FormModel, FieldRule, ValidatedField};
use crate::shared::validation::{validate_email, validate_password_length};

pub const LOGIN_FAILED: &str = "Usuario incorrecto, verifique sus datos.";

const EMAIL_RULE: FieldRule = FieldRule::new(validate_email, "Ingrese un correo electrónico válido.");
const PASSWORD_RULE: FieldRule = FieldRule::new(validate_password_length, "Ingrese su contraseña.");

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub email: ValidatedField,
    pub password: ValidatedField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: ValidatedField::new(EMAIL_RULE),
            password: ValidatedField::new(PASSWORD_RULE),
        }
    }
}

impl LoginForm {
    /// Marks the untouched fields so their feedback shows after a blocked
    /// submit.
    pub fn touch_all(&mut self) {
        self.email.dispatch(FieldAction::Focus);
        self.password.dispatch(FieldAction::Focus);
    }
}

impl FormModel for LoginForm {
    type Payload = LoginRequest;

    fn is_ready(&self) -> bool {
        all_ready(&[&self.email, &self.password])
    }

    fn payload(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
        }
    }

    fn apply_server_errors(&mut self, errors: &FieldErrors) {
        if let Some(message) = errors.first("email") {
            self.email.dispatch(FieldAction::Error(message));
        }
        if let Some(message) = errors.first("password") {
            self.password.dispatch(FieldAction::Error(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_needs_email_and_password() {
        let mut form = LoginForm::default();
        form.email.dispatch(FieldAction::Change("ana@tienda.bo".into()));
        assert!(!form.is_ready());
        form.password.dispatch(FieldAction::Change("secreta".into()));
        assert!(form.is_ready());
        assert_eq!(form.payload().email, "ana@tienda.bo");
    }

    #[test]
    fn test_blocked_submit_shows_feedback() {
        let mut form = LoginForm::default();
        form.touch_all();
        assert_eq!(form.email.feedback(), Some("Ingrese un correo electrónico válido."));
        assert_eq!(form.password.feedback(), Some("Ingrese su contraseña."));
    }
}
