//! Outbound relay payload: access key merged with the form fields.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Credential identifying the site to the form relay.
///
/// Injected from configuration. `Debug` is redacted so the key never ends up
/// in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AccessKey(<redacted>)")
    }
}

#[derive(Serialize)]
struct Envelope<'a, F> {
    access_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
    #[serde(flatten)]
    form: &'a F,
}

/// Build the JSON object posted to the relay.
///
/// `subject` becomes the e-mail subject line; pass `None` when the form
/// already carries its own `subject` field.
pub fn build_payload<F: Serialize>(
    access_key: &AccessKey,
    subject: Option<&str>,
    form: &F,
) -> Result<JsonValue, serde_json::Error> {
    serde_json::to_value(Envelope {
        access_key: access_key.expose(),
        subject,
        form,
    })
}
