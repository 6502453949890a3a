//! 外部リンクの組み立て（WhatsApp / mailto / tel）

use crate::site::FIRM_NAME;

const WHATSAPP_BASE: &str = "https://wa.me";

/// WhatsAppのメッセージ付きリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    pub number: String,
    pub message: String,
}

impl WhatsAppLink {
    pub fn new(number: &str, message: impl Into<String>) -> Self {
        Self {
            number: digits_only(number),
            message: message.into(),
        }
    }

    /// プロジェクト詳細からの問い合わせ
    pub fn project_inquiry(number: &str, project_name: &str) -> Self {
        Self::new(number, project_inquiry_message(project_name))
    }

    /// サービス詳細からの問い合わせ
    pub fn service_inquiry(number: &str, service_title: &str) -> Self {
        Self::new(number, service_inquiry_message(service_title))
    }

    /// `https://wa.me/{番号}?text={エンコード済みメッセージ}`
    pub fn url(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            self.number,
            urlencoding::encode(&self.message)
        )
    }
}

impl std::fmt::Display for WhatsAppLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url())
    }
}

pub fn project_inquiry_message(project_name: &str) -> String {
    format!(
        "Hello {}! I'm interested in a project like \"{}\". Could you provide more information about starting a similar project?",
        FIRM_NAME, project_name
    )
}

pub fn service_inquiry_message(service_title: &str) -> String {
    format!(
        "Hello! I'm interested in your \"{}\" service. Could you provide more information?",
        service_title
    )
}

/// wa.me は数字のみ受け付ける（`+`・空白・ハイフンを除去）
fn digits_only(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// 電話番号は `+` と数字だけ残す
pub fn tel(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_message() {
        let link = WhatsAppLink::new("+1234567890", "Hi there? \"A&B\"");
        assert_eq!(
            link.url(),
            "https://wa.me/1234567890?text=Hi%20there%3F%20%22A%26B%22"
        );
    }

    #[test]
    fn test_number_is_normalized() {
        let link = WhatsAppLink::new("+1 (555) 123-4567", "x");
        assert_eq!(link.number, "15551234567");
    }

    #[test]
    fn test_project_inquiry_message() {
        let link = WhatsAppLink::project_inquiry("+1234567890", "Sky Villa");
        assert!(link.message.contains("\"Sky Villa\""));
        assert!(link.message.starts_with("Hello Johnek Architects!"));
        assert!(link.url().contains("%22Sky%20Villa%22"));
    }

    #[test]
    fn test_service_inquiry_message() {
        let message = service_inquiry_message("Interior Design");
        assert_eq!(
            message,
            "Hello! I'm interested in your \"Interior Design\" service. Could you provide more information?"
        );
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        let link = WhatsAppLink::new("1", "Café");
        assert_eq!(link.url(), "https://wa.me/1?text=Caf%C3%A9");
    }

    #[test]
    fn test_mailto_and_tel() {
        assert_eq!(mailto(" info@johnekarchitects.com "), "mailto:info@johnekarchitects.com");
        assert_eq!(tel("+1 (555) 123-4567"), "tel:+15551234567");
    }
}
