//! Remote form submission lifecycle.
//!
//! Every AJAX form on the site behaves the same way: validation gates the
//! submit, the submit control is disabled while a request is in flight and
//! re-enabled exactly once whatever happens, and at any moment at most one
//! of {field error, error banner, success banner} is visible.
//!
//! There is no request cancellation. Closing a popup resets its form and
//! bumps the form's generation; a response that comes back for an earlier
//! generation is dropped without touching the UI.

use clubdeck_ui::message::{MessageBox, Tone};

use crate::i18n::{self, Lang, Msg};
use crate::validate::Validator;

/// One named input with its validators and current error.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    value: String,
    validators: Vec<Validator>,
    error: Option<Msg>,
}

impl Field {
    /// Creates an empty field.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            value: String::new(),
            validators: Vec::new(),
            error: None,
        }
    }

    /// Adds a validator; validators run in the order added and the first
    /// failure wins.
    #[must_use]
    pub fn validator(mut self, v: Validator) -> Self {
        self.validators.push(v);
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the current validation error.
    #[must_use]
    pub fn error(&self) -> Option<Msg> {
        self.error
    }

    fn check(&self) -> Option<Msg> {
        self.validators.iter().find_map(|v| v(&self.value))
    }
}

/// Proof that a submit started; pairs a response to the right generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Result of a finished request, as the form cares about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Server accepted the submission.
    Success {
        /// Server-supplied message, shown verbatim.
        message: String,
        /// Optional follow-up navigation target.
        redirect: Option<String>,
    },
    /// Server or transport rejected the submission.
    Failure {
        /// Message to show in the error banner.
        message: String,
    },
}

impl Outcome {
    /// Success with a message and no redirect.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
            redirect: None,
        }
    }

    /// Failure with a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// State machine shared by every submit-by-request form.
#[derive(Debug, Clone)]
pub struct RemoteForm {
    lang: Lang,
    fields: Vec<Field>,
    busy: bool,
    generation: u64,
    banner: MessageBox,
    reset_on_success: bool,
}

impl RemoteForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            fields: Vec::new(),
            busy: false,
            generation: 0,
            banner: MessageBox::new(),
            reset_on_success: false,
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Clears field values after a successful submission (invite and
    /// password forms do; the login form redirects instead).
    #[must_use]
    pub fn reset_on_success(mut self, yes: bool) -> Self {
        self.reset_on_success = yes;
        self
    }

    /// Returns the interface language.
    #[must_use]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the value of the named field, if it exists.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(Field::value)
    }

    /// Returns the validation error of the named field.
    #[must_use]
    pub fn field_error(&self, name: &str) -> Option<Msg> {
        self.fields.iter().find(|f| f.name == name)?.error
    }

    /// Updates a field value, revalidating it as the user types.
    ///
    /// Typing hides any banner, so a fresh attempt never sits under a
    /// stale error or success message.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.banner.hide();
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
            field.error = field.check();
        }
    }

    /// Runs every field's validators and records the failures.
    ///
    /// Returns whether the whole form is valid.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            field.error = field.check();
            ok &= field.error.is_none();
        }
        if !ok {
            self.banner.hide();
        }
        ok
    }

    /// Returns whether all fields currently pass their validators.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.check().is_none())
    }

    /// Returns whether a request is in flight (submit control disabled).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the banner slot.
    #[must_use]
    pub fn banner(&self) -> &MessageBox {
        &self.banner
    }

    /// Shows a form-level error produced by the client itself, clearing
    /// any field errors so only one message is visible.
    pub fn show_error(&mut self, msg: Msg) {
        for field in &mut self.fields {
            field.error = None;
        }
        self.banner.show(Tone::Error, i18n::text(self.lang, msg));
    }

    /// Starts a submission.
    ///
    /// Refuses (returns `None`) while a request is in flight or when
    /// validation fails; an invalid form never reaches the network.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.busy || !self.validate() {
            return None;
        }
        self.busy = true;
        self.banner.hide();
        Some(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Completes the submission started by `ticket`.
    ///
    /// Re-enables the submit control exactly once and shows the outcome
    /// banner. Returns `false` when the ticket is stale (the form was
    /// reset while the request was in flight); a stale outcome changes
    /// nothing.
    pub fn finish_submit(&mut self, ticket: &SubmitTicket, outcome: Outcome) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.busy = false;
        for field in &mut self.fields {
            field.error = None;
        }
        match outcome {
            Outcome::Success { message, .. } => {
                self.banner.show(Tone::Success, message);
                if self.reset_on_success {
                    for field in &mut self.fields {
                        field.value.clear();
                    }
                }
            }
            Outcome::Failure { message } => {
                self.banner.show(Tone::Error, message);
            }
        }
        true
    }

    /// Resets the form: values, errors, banner and busy flag cleared, and
    /// the generation bumped so in-flight responses get dropped.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.banner.hide();
        self.busy = false;
        self.generation += 1;
    }
}
