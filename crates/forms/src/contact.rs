//! "Send us a Message" contact form.

use serde::{Deserialize, Serialize};

use agrisite_core::{DomainError, DomainResult, ValueObject};

use crate::choice::{blank_as_none, parse_optional, Subject};
use crate::notification::Notification;
use crate::workflow::{filled, missing_fields, FormState, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "blank_as_none")]
    pub subject: Option<Subject>,
    pub message: String,
}

impl ValueObject for ContactForm {}

impl FormState for ContactForm {
    const KIND: &'static str = "contact";

    fn validate(&self) -> Result<(), ValidationError> {
        missing_fields([
            ("first name", filled(&self.first_name)),
            ("last name", filled(&self.last_name)),
            ("email", filled(&self.email)),
            ("phone", filled(&self.phone)),
            ("message", filled(&self.message)),
        ])
    }

    fn set_field(&mut self, field: &str, value: &str) -> DomainResult<()> {
        match field {
            "firstName" => self.first_name = value.to_string(),
            "lastName" => self.last_name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "subject" => self.subject = parse_optional(value)?,
            "message" => self.message = value.to_string(),
            other => {
                return Err(DomainError::validation(format!(
                    "contact form has no field '{other}'"
                )));
            }
        }
        Ok(())
    }

    fn success_notice() -> Notification {
        Notification::success(
            "Message Sent Successfully!",
            "We'll get back to you within 24 hours.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use crate::workflow::testing::{submitter, RecordingRelay};
    use crate::workflow::{FormSession, SubmissionError, WorkflowState};
    use serde_json::json;

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: "Ravi".into(),
            last_name: "Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "+91 90000 00000".into(),
            subject: Some(Subject::Bulk),
            message: "Need 40 bags of neem cake.".into(),
        }
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let mut form = filled_form();
        form.set_field("email", "new@example.com").unwrap();

        let mut expected = filled_form();
        expected.email = "new@example.com".into();
        assert_eq!(form, expected);
    }

    #[test]
    fn set_field_parses_and_clears_the_subject() {
        let mut form = ContactForm::default();
        form.set_field("subject", "soil").unwrap();
        assert_eq!(form.subject, Some(Subject::Soil));
        form.set_field("subject", "").unwrap();
        assert_eq!(form.subject, None);
    }

    #[test]
    fn set_field_rejects_unknown_fields() {
        let mut form = ContactForm::default();
        assert!(form.set_field("gstNumber", "x").is_err());
        assert!(form.is_blank());
    }

    #[test]
    fn subject_is_optional_but_names_are_not() {
        let mut form = filled_form();
        form.subject = None;
        assert!(form.validate().is_ok());

        form.first_name = "  ".into();
        form.message.clear();
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["first name", "message"]))
        );
    }

    #[test]
    fn json_uses_front_end_field_names() {
        let mut form = filled_form();
        form.subject = None;
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["firstName"], "Ravi");
        assert_eq!(value["subject"], "");

        let back: ContactForm = serde_json::from_value(json!({"firstName": "Ravi"})).unwrap();
        assert_eq!(back.first_name, "Ravi");
        assert_eq!(back.subject, None);
        assert!(back.email.is_empty());
    }

    #[tokio::test]
    async fn success_resets_every_field() {
        let relay = RecordingRelay::answering(true);
        let mut session = FormSession::from_form(filled_form());

        let notice = session.submit(&submitter(relay.clone())).await.unwrap();

        assert_eq!(notice.title, "Message Sent Successfully!");
        assert!(!notice.is_failure());
        assert_eq!(session.state(), WorkflowState::Succeeded);
        assert!(session.form().is_blank());
        assert_eq!(session.form().first_name, "");
        assert_eq!(session.form().message, "");
        assert_eq!(relay.call_count(), 1);
    }

    #[tokio::test]
    async fn payload_merges_key_and_fields() {
        let relay = RecordingRelay::answering(true);
        let mut session = FormSession::from_form(filled_form());
        session.submit(&submitter(relay.clone())).await.unwrap();

        assert_eq!(
            relay.last_payload().unwrap(),
            json!({
                "access_key": "test-key",
                "firstName": "Ravi",
                "lastName": "Kumar",
                "email": "ravi@example.com",
                "phone": "+91 90000 00000",
                "subject": "bulk",
                "message": "Need 40 bags of neem cake.",
            })
        );
    }

    #[tokio::test]
    async fn rejected_submission_keeps_values() {
        let relay = RecordingRelay::answering(false);
        let mut session = FormSession::from_form(filled_form());

        let err = session.submit(&submitter(relay.clone())).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Relay(RelayError::Rejected(_))));
        assert_eq!(session.state(), WorkflowState::Failed);
        assert_eq!(session.form(), &filled_form());
        let notice = session.notification().unwrap();
        assert_eq!(notice.title, "Something went wrong!");
        assert!(notice.is_failure());
    }

    #[tokio::test]
    async fn transport_failure_keeps_values() {
        let relay = RecordingRelay::failing(RelayError::Transport("connection refused".into()));
        let mut session = FormSession::from_form(filled_form());

        let err = session.submit(&submitter(relay.clone())).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Relay(RelayError::Transport(_))));
        assert_eq!(session.form(), &filled_form());
        assert_eq!(relay.call_count(), 1);
    }

    #[tokio::test]
    async fn editing_after_failure_returns_to_editing() {
        let relay = RecordingRelay::answering(false);
        let mut session = FormSession::from_form(filled_form());
        let _ = session.submit(&submitter(relay)).await;

        session.set_field("message", "Second try").unwrap();
        assert_eq!(session.state(), WorkflowState::Editing);
        assert_eq!(session.form().message, "Second try");
        assert_eq!(session.form().first_name, "Ravi");
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_relay() {
        let relay = RecordingRelay::answering(true);
        let mut session: FormSession<ContactForm> = FormSession::new();
        session.set_field("firstName", "Ravi").unwrap();
        let before = session.form().clone();

        let err = session.submit(&submitter(relay.clone())).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Validation(ValidationError::MissingFields(_))));
        assert_eq!(relay.call_count(), 0);
        assert_eq!(session.form(), &before);
        assert_eq!(session.state(), WorkflowState::Editing);
    }

    #[tokio::test]
    async fn each_submit_is_a_single_attempt() {
        let relay = RecordingRelay::answering(false);
        let s = submitter(relay.clone());
        let mut session = FormSession::from_form(filled_form());

        let _ = session.submit(&s).await;
        assert_eq!(relay.call_count(), 1);
        let _ = session.submit(&s).await;
        assert_eq!(relay.call_count(), 2);
    }
}
