//! Message validation.
//!
//! Everything here is pure: no I/O, no state, same input same output.
//! [`validate_message`] is the check the order pipeline runs before any request is sent.

/// Longest accepted message, in characters, after trimming.
pub const MAX_MESSAGE_LENGTH: usize = 500;

pub const EMPTY_MESSAGE_ERROR: &str = "Please enter a message";
pub const MESSAGE_TOO_LONG_ERROR: &str = "Message is too long (max 500 characters)";

/// Result of a validation check. `error` is set only when `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// A reusable validator over string input.
pub type Validator = Box<dyn Fn(&str) -> ValidationResult + Send + Sync>;

/// Validates an order message: trimmed, non-empty, at most [`MAX_MESSAGE_LENGTH`] characters.
pub fn validate_message(message: &str) -> ValidationResult {
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return ValidationResult::invalid(EMPTY_MESSAGE_ERROR);
    }

    if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
        return ValidationResult::invalid(MESSAGE_TOO_LONG_ERROR);
    }

    ValidationResult::valid()
}

pub fn validate_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_max_length(value: &str, max_length: usize) -> bool {
    value.chars().count() <= max_length
}

pub fn validate_min_length(value: &str, min_length: usize) -> bool {
    value.chars().count() >= min_length
}

/// Fails with `message` when the value is blank.
pub fn required_validator(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if validate_not_empty(value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(message.clone())
        }
    })
}

/// Fails when the value is shorter than `min` or longer than `max` characters.
pub fn length_validator(min: usize, max: usize) -> Validator {
    Box::new(move |value: &str| {
        if !validate_min_length(value, min) {
            ValidationResult::invalid(format!("Minimum {min} characters required"))
        } else if !validate_max_length(value, max) {
            ValidationResult::invalid(format!("Maximum {max} characters allowed"))
        } else {
            ValidationResult::valid()
        }
    })
}

/// Runs validators in order and returns the first failure.
pub fn combine_validations(validators: Vec<Validator>) -> Validator {
    Box::new(move |value: &str| {
        validators
            .iter()
            .map(|validator| validator(value))
            .find(|result| !result.is_valid)
            .unwrap_or_else(ValidationResult::valid)
    })
}

/// Flags describing an input message, for enabling and labelling an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCheck {
    pub is_valid: bool,
    pub is_empty: bool,
    pub is_too_long: bool,
}

pub fn check_message(message: &str) -> MessageCheck {
    let trimmed = message.trim();
    let is_empty = trimmed.is_empty();
    let is_too_long = trimmed.chars().count() > MAX_MESSAGE_LENGTH;
    MessageCheck {
        is_valid: !is_empty && !is_too_long,
        is_empty,
        is_too_long,
    }
}

/// The hint to show next to the input, or an empty string.
pub fn validation_message(message: &str) -> &'static str {
    let check = check_message(message);
    if check.is_empty {
        EMPTY_MESSAGE_ERROR
    } else if check.is_too_long {
        MESSAGE_TOO_LONG_ERROR
    } else {
        ""
    }
}

/// Whether the submit action should be enabled.
pub fn can_submit(message: &str, is_loading: bool) -> bool {
    check_message(message).is_valid && !is_loading
}
