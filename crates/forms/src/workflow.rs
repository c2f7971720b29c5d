//! Submission workflow.
//!
//! ```text
//! Editing --submit--> Submitting --success--> Succeeded (fields reset)
//!    ^                    |
//!    |                    +--failure--> Failed (fields kept)
//!    +------- any edit ---------------------+
//! ```
//!
//! Validation failures never leave `Editing` and never reach the relay.
//! `submit` borrows the session mutably for the whole round trip, so a second
//! submission cannot start while one is in flight.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use agrisite_core::{DomainResult, SubmissionId};

use crate::notification::Notification;
use crate::payload::{build_payload, AccessKey};
use crate::relay::{FormRelay, RelayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Local pre-submission check failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("terms and conditions were not accepted")]
    TermsNotAccepted,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ValidationError {
    pub fn notification(&self) -> Notification {
        match self {
            ValidationError::TermsNotAccepted => Notification::failure(
                "Please agree to terms and conditions",
                "You must accept our terms and conditions to proceed.",
            ),
            ValidationError::MissingFields(fields) => Notification::failure(
                "Please fill in all required fields",
                format!("Missing: {}.", fields.join(", ")),
            ),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// A form that can go through the workflow.
pub trait FormState: Serialize + Default + Clone + PartialEq + core::fmt::Debug + Send + Sync {
    /// Short name used in logs.
    const KIND: &'static str;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Apply one raw input change (camelCase field name, raw string value).
    ///
    /// Only the named field changes.
    fn set_field(&mut self, field: &str, value: &str) -> DomainResult<()>;

    fn success_notice() -> Notification;

    fn failure_notice() -> Notification {
        Notification::relay_failed()
    }

    /// E-mail subject line added to the payload, if the form has none of its own.
    fn email_subject(&self) -> Option<&'static str> {
        None
    }

    /// Whether every field is back at its initial value.
    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Relay handle plus the credential sent with every payload.
#[derive(Clone)]
pub struct Submitter {
    relay: Arc<dyn FormRelay>,
    access_key: AccessKey,
}

impl Submitter {
    pub fn new(relay: Arc<dyn FormRelay>, access_key: AccessKey) -> Self {
        Self { relay, access_key }
    }

    pub fn access_key(&self) -> &AccessKey {
        &self.access_key
    }

    pub fn relay(&self) -> &dyn FormRelay {
        self.relay.as_ref()
    }
}

impl core::fmt::Debug for Submitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Submitter")
            .field("relay", &"<dyn FormRelay>")
            .field("access_key", &self.access_key)
            .finish()
    }
}

/// One visitor's copy of a form and where it is in the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession<F> {
    form: F,
    state: WorkflowState,
    notification: Option<Notification>,
}

impl<F: FormState> Default for FormSession<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormState> FormSession<F> {
    pub fn new() -> Self {
        Self::from_form(F::default())
    }

    /// Resume a session from already-entered values.
    pub fn from_form(form: F) -> Self {
        Self {
            form,
            state: WorkflowState::Editing,
            notification: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Last notification raised by a submit attempt.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Edit the form in place; always returns the session to `Editing`.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.form);
        self.state = WorkflowState::Editing;
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> DomainResult<()> {
        self.form.set_field(field, value)?;
        self.state = WorkflowState::Editing;
        Ok(())
    }

    /// Run one submission attempt.
    ///
    /// On success the form is reset to its defaults; on any failure the
    /// entered values are left exactly as they were.
    pub async fn submit(&mut self, submitter: &Submitter) -> Result<Notification, SubmissionError> {
        let submission_id = SubmissionId::new();

        if let Err(err) = self.form.validate() {
            tracing::info!(
                form = F::KIND,
                %submission_id,
                reason = %err,
                "submission rejected before sending"
            );
            self.state = WorkflowState::Editing;
            self.notification = Some(err.notification());
            return Err(err.into());
        }

        self.state = WorkflowState::Submitting;
        tracing::debug!(form = F::KIND, %submission_id, "sending submission to relay");

        match self.send(submitter).await {
            Ok(()) => {
                tracing::info!(form = F::KIND, %submission_id, "submission delivered");
                let notice = F::success_notice();
                self.form = F::default();
                self.state = WorkflowState::Succeeded;
                self.notification = Some(notice.clone());
                Ok(notice)
            }
            Err(err) => {
                tracing::warn!(form = F::KIND, %submission_id, error = %err, "submission failed");
                self.state = WorkflowState::Failed;
                self.notification = Some(F::failure_notice());
                Err(err.into())
            }
        }
    }

    async fn send(&self, submitter: &Submitter) -> Result<(), RelayError> {
        let payload = build_payload(submitter.access_key(), self.form.email_subject(), &self.form)
            .map_err(|e| RelayError::Encode(e.to_string()))?;

        let resp = submitter.relay().submit(&payload).await?;
        if resp.success {
            Ok(())
        } else {
            Err(RelayError::Rejected(resp.message.unwrap_or_default()))
        }
    }
}

/// Names of required fields whose value is blank.
pub(crate) fn missing_fields(
    fields: impl IntoIterator<Item = (&'static str, bool)>,
) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}
