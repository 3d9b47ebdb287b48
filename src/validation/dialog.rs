use crate::core::error::FormErrors;

/// Field state behind a creation dialog.
///
/// `validate` runs on submit and either yields the value handed to the parent
/// screen or the per-field errors to show inline. `Default` is the empty form a
/// dialog resets to.
pub trait Form: Default {
    type Output;

    fn validate(&self) -> Result<Self::Output, FormErrors>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Modal form lifecycle shared by every creation dialog:
///
/// ```text
/// closed -> open -> submit invalid -> open (errors shown)
///                -> submit valid   -> callback, reset, closed
/// ```
///
/// Closing a dialog without submitting also resets its fields and errors.
#[derive(Debug, Default)]
pub struct Dialog<F: Form> {
    state: DialogState,
    form: F,
    errors: FormErrors,
}

impl<F: Form> Dialog<F> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            form: F::default(),
            errors: FormErrors::new(),
        }
    }

    /// An open dialog whose fields are already filled in
    pub fn opened(form: F) -> Self {
        Self {
            state: DialogState::Open,
            form,
            errors: FormErrors::new(),
        }
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
        self.form = F::default();
        self.errors = FormErrors::new();
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Validate and, on success, hand the output to `on_submit` then reset and close.
    ///
    /// On failure the dialog stays open with the errors recorded; `on_submit`
    /// is not called.
    pub fn submit_with<R, C>(&mut self, on_submit: C) -> Result<R, FormErrors>
    where
        C: FnOnce(F::Output) -> R,
    {
        if !self.is_open() {
            return Err(FormErrors::single("dialog", "Dialog is not open"));
        }

        match self.form.validate() {
            Ok(output) => {
                let result = on_submit(output);
                self.close();
                Ok(result)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn submit(&mut self) -> Result<F::Output, FormErrors> {
        self.submit_with(|output| output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct NameForm {
        name: String,
    }

    impl Form for NameForm {
        type Output = String;

        fn validate(&self) -> Result<String, FormErrors> {
            if self.name.trim().is_empty() {
                return Err(FormErrors::single("name", "Name is required"));
            }
            Ok(self.name.trim().to_string())
        }
    }

    #[test]
    fn test_new_dialog_is_closed() {
        let dialog: Dialog<NameForm> = Dialog::new();
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(dialog.errors().is_empty());
    }

    #[test]
    fn test_submit_on_closed_dialog_is_rejected() {
        let mut dialog: Dialog<NameForm> = Dialog::new();
        dialog.form_mut().name = "x".to_string();
        let errors = dialog.submit().unwrap_err();
        assert_eq!(errors.get("dialog"), Some("Dialog is not open"));
    }

    #[test]
    fn test_invalid_submit_keeps_dialog_open_with_errors() {
        let mut dialog: Dialog<NameForm> = Dialog::new();
        dialog.open();

        let mut called = false;
        let result = dialog.submit_with(|_| called = true);

        assert!(result.is_err());
        assert!(!called);
        assert!(dialog.is_open());
        assert_eq!(dialog.errors().get("name"), Some("Name is required"));
    }

    #[test]
    fn test_valid_submit_invokes_callback_resets_and_closes() {
        let mut dialog = Dialog::opened(NameForm {
            name: "  admin-role ".to_string(),
        });

        let mut received = Vec::new();
        dialog.submit_with(|name| received.push(name)).unwrap();

        assert_eq!(received, vec!["admin-role".to_string()]);
        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(dialog.form(), &NameForm::default());
        assert!(dialog.errors().is_empty());
    }

    #[test]
    fn test_errors_cleared_after_later_success() {
        let mut dialog: Dialog<NameForm> = Dialog::new();
        dialog.open();
        assert!(dialog.submit().is_err());

        dialog.form_mut().name = "ok".to_string();
        assert_eq!(dialog.submit().unwrap(), "ok");
        assert!(dialog.errors().is_empty());
    }

    #[test]
    fn test_closing_resets_fields() {
        let mut dialog: Dialog<NameForm> = Dialog::new();
        dialog.set_open(true);
        dialog.form_mut().name = "draft".to_string();
        dialog.set_open(false);

        assert!(!dialog.is_open());
        assert!(dialog.form().name.is_empty());
    }
}
