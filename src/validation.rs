//! Input validation for new contact messages.
//!
//! The required-field rule always applies. Length and email-syntax limits
//! mirror the client form and are only enforced when the server runs with
//! [`ValidationPolicy::Strict`].

use validator::Validate;

use crate::error::ApiError;
use crate::model::CreateMessageRequest;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";

pub const NAME_MAX_LEN: u64 = 100;
pub const PHONE_MAX_LEN: u64 = 30;
pub const EMAIL_MAX_LEN: u64 = 200;
pub const MESSAGE_MAX_LEN: u64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Non-empty after trimming.
    #[default]
    Required,
    /// Non-empty, plus length caps and email syntax.
    Strict,
}

/// Trimmed submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MessageDraft {
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = PHONE_MAX_LEN))]
    pub phone: String,
    #[validate(email, length(max = EMAIL_MAX_LEN))]
    pub email: String,
    #[validate(length(max = MESSAGE_MAX_LEN))]
    pub message: String,
}

/// Validate `request` under `policy`, short-circuiting on the first failing rule.
pub fn validate(request: &CreateMessageRequest, policy: ValidationPolicy) -> Result<MessageDraft, ApiError> {
    let (Some(name), Some(phone), Some(email), Some(message)) = (
        trimmed(&request.name),
        trimmed(&request.phone),
        trimmed(&request.email),
        trimmed(&request.message),
    ) else {
        return Err(ApiError::Validation(REQUIRED_MESSAGE.to_owned()));
    };

    let draft = MessageDraft {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    };

    if policy == ValidationPolicy::Strict {
        if let Err(errors) = draft.validate() {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            return Err(ApiError::Validation(format!("Invalid fields: {}.", fields.join(", "))));
        }
    }

    Ok(draft)
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
