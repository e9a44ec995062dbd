//! Contact Submission
//!
//! Posts the validated contact form as JSON. Any 2xx response counts as
//! delivered; the server may reply with `{"message": "..."}` to customize
//! the confirmation text.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::NotifyKind;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent. We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again later.";

/// Request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Trimmed values; an empty phone is left out
    pub fn new(name: &str, email: &str, phone: &str, subject: &str, message: &str) -> Self {
        let phone = phone.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

/// Optional server reply
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected submission with status {0}")]
    Rejected(u16),
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for SubmitError {
    fn from(value: JsValue) -> Self {
        SubmitError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Delivery channel for contact submissions
#[allow(async_fn_in_trait)]
pub trait SubmissionChannel {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, SubmitError>;
}

/// HTTP POST through `window.fetch`
#[derive(Debug, Clone)]
pub struct FetchChannel {
    endpoint: String,
}

impl FetchChannel {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl SubmissionChannel for FetchChannel {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitReceipt, SubmitError> {
        let body = serde_json::to_string(submission)?;

        let headers = web_sys::Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        headers.set("Accept", "application/json")?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = web_sys::Request::new_with_str_and_init(&self.endpoint, &init)?;
        let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        if !response.ok() {
            return Err(SubmitError::Rejected(response.status()));
        }

        // A body that is missing or not JSON still counts as delivered
        let receipt = match response.json() {
            Ok(promise) => match JsFuture::from(promise).await {
                Ok(value) => serde_wasm_bindgen::from_value(value).unwrap_or_default(),
                Err(_) => SubmitReceipt::default(),
            },
            Err(_) => SubmitReceipt::default(),
        };
        Ok(receipt)
    }
}

/// Notification text and kind for a finished submission
pub fn outcome_notification(outcome: &Result<SubmitReceipt, SubmitError>) -> (String, NotifyKind) {
    match outcome {
        Ok(receipt) => (
            receipt.message.clone().unwrap_or_else(|| SUCCESS_MESSAGE.to_string()),
            NotifyKind::Success,
        ),
        Err(_) => (FAILURE_MESSAGE.to_string(), NotifyKind::Error),
    }
}
