//! Edit → preview → submit lifecycle shared by every add/edit page.

use serde::{Deserialize, Serialize};

pub const FALLBACK_ERROR: &str = "Ocurrió un problema.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn from_id(id: Option<i64>) -> Self {
        id.map(FormMode::Edit).unwrap_or(FormMode::Create)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Editing,
    Previewing,
    Submitting,
    Done,
}

/// What the caller has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardCommand {
    Stay,
    /// Issue the POST/PUT. Emitted once per preview.
    Submit,
    /// Back was pressed on the form itself; navigate away.
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    mode: FormMode,
    step: WizardStep,
    error: Option<String>,
}

impl Wizard {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            step: WizardStep::Editing,
            error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_form(&self) -> bool {
        self.step == WizardStep::Editing
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.step, WizardStep::Submitting | WizardStep::Done)
    }

    /// "Next". `ready` is the combined present-and-valid check of the form.
    pub fn next(&mut self, ready: bool) -> WizardCommand {
        match self.step {
            WizardStep::Editing if ready => {
                self.step = WizardStep::Previewing;
                WizardCommand::Stay
            }
            WizardStep::Previewing if ready => {
                self.step = WizardStep::Submitting;
                self.error = None;
                WizardCommand::Submit
            }
            _ => WizardCommand::Stay,
        }
    }

    /// "Cancel" on the form, "Back" on the preview.
    pub fn back(&mut self) -> WizardCommand {
        match self.step {
            WizardStep::Editing => WizardCommand::Leave,
            WizardStep::Previewing => {
                self.step = WizardStep::Editing;
                WizardCommand::Stay
            }
            WizardStep::Submitting | WizardStep::Done => WizardCommand::Stay,
        }
    }

    pub fn submit_failed(&mut self) {
        self.submit_failed_with(FALLBACK_ERROR);
    }

    pub fn submit_failed_with(&mut self, message: impl Into<String>) {
        if self.step == WizardStep::Submitting {
            self.step = WizardStep::Editing;
            self.error = Some(message.into());
        }
    }

    pub fn submit_succeeded(&mut self) {
        if self.step == WizardStep::Submitting {
            self.step = WizardStep::Done;
            self.error = None;
        }
    }

    pub fn next_label(&self) -> &'static str {
        match (self.mode, self.step) {
            (FormMode::Edit(_), _) => "Guardar Cambios",
            (FormMode::Create, WizardStep::Editing) => "Siguiente",
            (FormMode::Create, _) => "Finalizar",
        }
    }

    pub fn back_label(&self) -> &'static str {
        if self.is_form() {
            "Cancelar"
        } else {
            "Atrás"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_does_not_advance() {
        let mut wizard = Wizard::new(FormMode::Create);
        assert_eq!(wizard.next(false), WizardCommand::Stay);
        assert_eq!(wizard.step(), WizardStep::Editing);
    }

    #[test]
    fn test_second_next_submits_exactly_once() {
        let mut wizard = Wizard::new(FormMode::Create);
        assert_eq!(wizard.next(true), WizardCommand::Stay);
        assert_eq!(wizard.step(), WizardStep::Previewing);

        assert_eq!(wizard.next(true), WizardCommand::Submit);
        assert_eq!(wizard.step(), WizardStep::Submitting);
        assert_eq!(wizard.next(true), WizardCommand::Stay);
        assert!(wizard.is_busy());
    }

    #[test]
    fn test_back_navigation() {
        let mut wizard = Wizard::new(FormMode::Create);
        wizard.next(true);
        assert_eq!(wizard.back_label(), "Atrás");
        assert_eq!(wizard.back(), WizardCommand::Stay);
        assert_eq!(wizard.step(), WizardStep::Editing);
        assert_eq!(wizard.back_label(), "Cancelar");
        assert_eq!(wizard.back(), WizardCommand::Leave);
    }

    #[test]
    fn test_failure_returns_to_editing_with_message() {
        let mut wizard = Wizard::new(FormMode::Create);
        wizard.next(true);
        wizard.next(true);
        wizard.submit_failed();
        assert_eq!(wizard.step(), WizardStep::Editing);
        assert_eq!(wizard.error(), Some(FALLBACK_ERROR));

        wizard.next(true);
        wizard.next(true);
        assert_eq!(wizard.error(), None);
        wizard.submit_succeeded();
        assert_eq!(wizard.step(), WizardStep::Done);
    }

    #[test]
    fn test_outcomes_ignored_outside_submit() {
        let mut wizard = Wizard::new(FormMode::Create);
        wizard.submit_succeeded();
        assert_eq!(wizard.step(), WizardStep::Editing);
        wizard.submit_failed();
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn test_labels() {
        let mut wizard = Wizard::new(FormMode::Create);
        assert_eq!(wizard.next_label(), "Siguiente");
        wizard.next(true);
        assert_eq!(wizard.next_label(), "Finalizar");
        assert_eq!(Wizard::new(FormMode::Edit(4)).next_label(), "Guardar Cambios");
    }
}
