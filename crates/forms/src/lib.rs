//! Contact and wholesaler forms.
//!
//! Form state is plain data edited field by field. Submitting runs local
//! validation, then makes exactly one call to the external form relay and
//! turns the answer into a notification for the visitor.

pub mod choice;
pub mod contact;
pub mod notification;
pub mod payload;
pub mod relay;
pub mod wholesaler;
pub mod workflow;

pub use choice::{BusinessType, MonthlyVolume, ProductInterest, Subject};
pub use contact::ContactForm;
pub use notification::{Notification, Variant};
pub use payload::{build_payload, AccessKey};
pub use relay::{FormRelay, HttpFormRelay, RelayError, RelayResponse, DEFAULT_RELAY_URL};
pub use wholesaler::WholesalerForm;
pub use workflow::{FormSession, FormState, SubmissionError, Submitter, ValidationError, WorkflowState};
