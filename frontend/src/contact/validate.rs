use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::locale::Locale;

// Structural check only: something@something.something, no whitespace.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// One of the three contact form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ORDER: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name` attribute of the matching form control.
    pub fn control_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is empty")]
    EmptyName,
    #[error("email is empty or malformed")]
    InvalidEmail,
    #[error("message is empty")]
    EmptyMessage,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::EmptyName => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::EmptyMessage => Field::Message,
        }
    }

    /// Text shown next to the offending field.
    pub fn message(self, locale: Locale) -> &'static str {
        match self {
            FieldError::EmptyName => locale.t("이름을 입력해 주세요.", "Please enter your name."),
            FieldError::InvalidEmail => {
                locale.t("올바른 이메일을 입력해 주세요.", "Please enter a valid email.")
            }
            FieldError::EmptyMessage => {
                locale.t("메시지를 입력해 주세요.", "Please enter a message.")
            }
        }
    }
}

pub type FieldResult = Result<(), FieldError>;

pub fn validate_name(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(FieldError::EmptyName);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> FieldResult {
    let value = value.trim();
    if value.is_empty() || !EMAIL_SHAPE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(FieldError::EmptyMessage);
    }
    Ok(())
}

pub fn validate(field: Field, value: &str) -> FieldResult {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank() {
        assert_eq!(validate_name(""), Err(FieldError::EmptyName));
        assert_eq!(validate_name("   \t"), Err(FieldError::EmptyName));
        assert_eq!(validate_name(" Jane "), Ok(()));
    }

    #[test]
    fn email_requires_basic_shape() {
        for ok in ["jane@example.com", "  a@b.co  ", "first.last@sub.domain.kr"] {
            assert_eq!(validate_email(ok), Ok(()), "{ok}");
        }
        for bad in ["", "   ", "not-an-email", "a@b", "@b.com", "a@.", "a b@c.com", "a@b@c.com"] {
            assert_eq!(validate_email(bad), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn message_rejects_blank() {
        assert_eq!(validate_message("\n\n"), Err(FieldError::EmptyMessage));
        assert_eq!(validate_message("hi"), Ok(()));
    }

    #[test]
    fn validation_is_repeatable() {
        for (field, value) in [
            (Field::Name, ""),
            (Field::Email, "kim@"),
            (Field::Email, "kim@example.com"),
            (Field::Message, "Looking for TOPIK prep"),
        ] {
            assert_eq!(validate(field, value), validate(field, value));
        }
    }

    #[test]
    fn errors_point_back_at_their_field() {
        for field in Field::ORDER {
            let err = validate(field, "").unwrap_err();
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn messages_are_localized() {
        assert_eq!(FieldError::EmptyName.message(Locale::Ko), "이름을 입력해 주세요.");
        assert_eq!(FieldError::EmptyName.message(Locale::En), "Please enter your name.");
        assert_eq!(
            FieldError::InvalidEmail.message(Locale::En),
            "Please enter a valid email."
        );
        assert_eq!(FieldError::EmptyMessage.message(Locale::Ko), "메시지를 입력해 주세요.");
    }
}
