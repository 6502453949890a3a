//! 問い合わせフォーム
//!
//! 送信は擬似的なもので、[`SUBMIT_DELAY_MS`] 待ったあと必ず成功し、
//! フォームを空に戻す。再送・キャンセルはない。

use serde::{Deserialize, Serialize};

/// 擬似送信の待ち時間（ms）
pub const SUBMIT_DELAY_MS: u64 = 1000;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.as_str()),
            FieldError::InvalidEmail => write!(f, "email address is invalid"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// 入力欄の `name` 属性で値を更新する
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// 全項目必須。メールは `local@domain.tld` の形
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.get(field).trim().is_empty() {
                errors.push(FieldError::Required(field));
            }
        }
        if !self.email.trim().is_empty() && !looks_like_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "New house".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().is_valid());
    }

    #[test]
    fn test_required_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&FieldError::Required(Field::Message)));
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut form = filled();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), vec![FieldError::Required(Field::Subject)]);
    }

    #[test]
    fn test_subdomain_email_is_valid() {
        let mut form = filled();
        form.email = "ada@mail.example.co.uk".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["ada", "@example.com", "ada@example", "ada@@example.com", "ada@.com", "a da@x.io", "ada@x..io", "ada@x.io."] {
            let mut form = filled();
            form.email = email.to_string();
            assert_eq!(form.validate(), vec![FieldError::InvalidEmail], "{}", email);
        }
    }

    #[test]
    fn test_set_by_field_name() {
        let mut form = ContactForm::default();
        let field = Field::from_name("subject").unwrap();
        form.set(field, "Office fit-out".to_string());
        assert_eq!(form.subject, "Office fit-out");
        assert!(Field::from_name("phone").is_none());
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
