//! Wholesaler registration form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agrisite_core::{DomainError, DomainResult, ValueObject};

use crate::choice::{blank_as_none, parse_optional, BusinessType, MonthlyVolume, ProductInterest};
use crate::notification::Notification;
use crate::workflow::{filled, missing_fields, FormState, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WholesalerForm {
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gst_number: String,
    #[serde(with = "blank_as_none")]
    pub business_type: Option<BusinessType>,
    #[serde(with = "blank_as_none")]
    pub monthly_volume: Option<MonthlyVolume>,
    pub products_of_interest: BTreeSet<ProductInterest>,
    pub comments: String,
    pub agree_to_terms: bool,
}

impl WholesalerForm {
    /// Flip one interest checkbox.
    pub fn toggle_interest(&mut self, interest: ProductInterest) {
        if !self.products_of_interest.remove(&interest) {
            self.products_of_interest.insert(interest);
        }
    }

    /// Set one interest checkbox to an explicit state.
    pub fn set_interest(&mut self, interest: ProductInterest, checked: bool) {
        if checked {
            self.products_of_interest.insert(interest);
        } else {
            self.products_of_interest.remove(&interest);
        }
    }

    pub fn is_interested_in(&self, interest: ProductInterest) -> bool {
        self.products_of_interest.contains(&interest)
    }
}

impl ValueObject for WholesalerForm {}

impl FormState for WholesalerForm {
    const KIND: &'static str = "wholesaler";

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        missing_fields([
            ("business name", filled(&self.business_name)),
            ("contact person", filled(&self.contact_person)),
            ("email", filled(&self.email)),
            ("phone", filled(&self.phone)),
            ("business address", filled(&self.address)),
            ("business type", self.business_type.is_some()),
            ("monthly volume", self.monthly_volume.is_some()),
        ])
    }

    fn set_field(&mut self, field: &str, value: &str) -> DomainResult<()> {
        match field {
            "businessName" => self.business_name = value.to_string(),
            "contactPerson" => self.contact_person = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "address" => self.address = value.to_string(),
            "gstNumber" => self.gst_number = value.to_string(),
            "businessType" => self.business_type = parse_optional(value)?,
            "monthlyVolume" => self.monthly_volume = parse_optional(value)?,
            "productsOfInterest" => self.toggle_interest(value.parse()?),
            "comments" => self.comments = value.to_string(),
            "agreeToTerms" => {
                self.agree_to_terms = value.parse().map_err(|_| {
                    DomainError::validation(format!("agreeToTerms must be true or false, got '{value}'"))
                })?
            }
            other => {
                return Err(DomainError::validation(format!(
                    "wholesaler form has no field '{other}'"
                )));
            }
        }
        Ok(())
    }

    fn success_notice() -> Notification {
        Notification::success(
            "Application Submitted Successfully!",
            "We'll review your application and contact you within 48 hours.",
        )
    }

    fn email_subject(&self) -> Option<&'static str> {
        Some("New Wholesaler Application")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::{submitter, RecordingRelay};
    use crate::workflow::{FormSession, SubmissionError, WorkflowState};
    use proptest::prelude::*;

    fn filled_form() -> WholesalerForm {
        let mut form = WholesalerForm {
            business_name: "Kisan Agro Traders".into(),
            contact_person: "Meena Sharma".into(),
            email: "orders@kisanagro.example".into(),
            phone: "+91 91234 56789".into(),
            address: "Main Market, Aligarh".into(),
            gst_number: "09ABCDE1234F1Z5".into(),
            business_type: Some(BusinessType::Distributor),
            monthly_volume: Some(MonthlyVolume::From100kTo250k),
            comments: String::new(),
            agree_to_terms: true,
            ..Default::default()
        };
        form.toggle_interest(ProductInterest::OrganicFertilizers);
        form.toggle_interest(ProductInterest::Seeds);
        form
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut form = WholesalerForm::default();
        form.toggle_interest(ProductInterest::Pesticides);
        assert!(form.is_interested_in(ProductInterest::Pesticides));
        form.toggle_interest(ProductInterest::Pesticides);
        assert!(!form.is_interested_in(ProductInterest::Pesticides));
    }

    #[test]
    fn set_interest_is_idempotent() {
        let mut form = WholesalerForm::default();
        form.set_interest(ProductInterest::Seeds, true);
        form.set_interest(ProductInterest::Seeds, true);
        assert_eq!(form.products_of_interest.len(), 1);
        form.set_interest(ProductInterest::Seeds, false);
        form.set_interest(ProductInterest::Seeds, false);
        assert!(form.products_of_interest.is_empty());
    }

    #[test]
    fn consent_is_checked_before_required_fields() {
        let form = WholesalerForm::default();
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn gst_and_comments_are_optional() {
        let mut form = filled_form();
        form.gst_number.clear();
        form.products_of_interest.clear();
        assert!(form.validate().is_ok());

        form.monthly_volume = None;
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["monthly volume"]))
        );
    }

    #[test]
    fn set_field_handles_every_input_kind() {
        let mut form = WholesalerForm::default();
        form.set_field("businessType", "cooperative").unwrap();
        form.set_field("monthlyVolume", "1000k+").unwrap();
        form.set_field("productsOfInterest", "Farm Equipment").unwrap();
        form.set_field("agreeToTerms", "true").unwrap();

        assert_eq!(form.business_type, Some(BusinessType::Cooperative));
        assert_eq!(form.monthly_volume, Some(MonthlyVolume::Above1000k));
        assert!(form.is_interested_in(ProductInterest::FarmEquipment));
        assert!(form.agree_to_terms);

        assert!(form.set_field("agreeToTerms", "yes").is_err());
        assert!(form.set_field("productsOfInterest", "Tractors").is_err());
    }

    #[test]
    fn json_round_trips_interests_as_labels() {
        let value = serde_json::to_value(filled_form()).unwrap();
        assert_eq!(
            value["productsOfInterest"],
            serde_json::json!(["Organic Fertilizers", "Seeds"])
        );
        assert_eq!(value["agreeToTerms"], true);
        assert_eq!(value["monthlyVolume"], "100k-250k");
    }

    #[tokio::test]
    async fn no_consent_means_no_network_call() {
        let relay = RecordingRelay::answering(true);
        let mut form = filled_form();
        form.agree_to_terms = false;
        let mut session = FormSession::from_form(form.clone());

        let err = session.submit(&submitter(relay.clone())).await.unwrap_err();

        assert_eq!(err, SubmissionError::Validation(ValidationError::TermsNotAccepted));
        assert_eq!(relay.call_count(), 0);
        assert_eq!(session.form(), &form);
        assert_eq!(session.state(), WorkflowState::Editing);
        assert_eq!(
            session.notification().unwrap().title,
            "Please agree to terms and conditions"
        );
    }

    #[tokio::test]
    async fn accepted_application_is_sent_and_reset() {
        let relay = RecordingRelay::answering(true);
        let mut session = FormSession::from_form(filled_form());

        let notice = session.submit(&submitter(relay.clone())).await.unwrap();

        assert_eq!(notice.title, "Application Submitted Successfully!");
        assert!(session.form().is_blank());
        assert!(!session.form().agree_to_terms);
        assert!(session.form().products_of_interest.is_empty());

        let payload = relay.last_payload().unwrap();
        assert_eq!(payload["access_key"], "test-key");
        assert_eq!(payload["subject"], "New Wholesaler Application");
        assert_eq!(payload["businessName"], "Kisan Agro Traders");
    }

    fn interest() -> impl Strategy<Value = ProductInterest> {
        prop::sample::select(ProductInterest::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity(toggles in prop::collection::vec(interest(), 0..12), extra in interest()) {
            let mut form = WholesalerForm::default();
            for t in &toggles {
                form.toggle_interest(*t);
            }
            let before = form.clone();
            form.toggle_interest(extra);
            form.toggle_interest(extra);
            prop_assert_eq!(form, before);
        }

        #[test]
        fn toggling_never_touches_other_fields(toggles in prop::collection::vec(interest(), 0..12)) {
            let mut form = filled_form();
            for t in &toggles {
                form.toggle_interest(*t);
            }
            let mut expected = filled_form();
            expected.products_of_interest = form.products_of_interest.clone();
            prop_assert_eq!(form, expected);
        }
    }
}
