//! 問い合わせフォームの対話入力と擬似送信

use crate::error::{SiteError, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use johnek_common::contact::{ContactForm, Field, SUBMIT_DELAY_MS, SUBMIT_SUCCESS_MESSAGE};
use log::info;
use std::time::Duration;

/// 未入力の項目だけ対話で埋める
pub fn complete_interactively(mut form: ContactForm) -> Result<ContactForm> {
    for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
        if !form.get(field).trim().is_empty() {
            continue;
        }
        let value: String = Input::new()
            .with_prompt(prompt_for(field))
            .interact_text()
            .map_err(|e| SiteError::Input(e.to_string()))?;
        form.set(field, value);
    }
    Ok(form)
}

fn prompt_for(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Email Address",
        Field::Subject => "Subject",
        Field::Message => "Message",
    }
}

/// 検証して送信する。送信は待つだけで必ず成功する
pub async fn submit(form: &ContactForm) -> Result<&'static str> {
    let errors = form.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(SiteError::Input(messages.join(", ")));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Sending...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;

    spinner.finish_and_clear();
    info!(
        "event=contact_submit module=inquiry status=ok subject_len={} message_len={}",
        form.subject.chars().count(),
        form.message.chars().count()
    );
    Ok(SUBMIT_SUCCESS_MESSAGE)
}
