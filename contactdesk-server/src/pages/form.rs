//! Contact form page
//!
//! Browser-side constraints (`required`, `pattern`, `minlength`) come from
//! the same constants the server validates with. The server check is still
//! authoritative: it trims first and counts characters, not UTF-16 units.

use std::fmt::Write;

use contactdesk_core::validation::{EMAIL_SHAPE, MESSAGE_MIN_CHARS};
use contactdesk_core::{Field, FieldErrors};
use serde::Deserialize;

use super::{escape, layout, Notice};

pub const SUBMIT_FAILED: &str = "送信に失敗しました。もう一度お試しください。";

// Disables the button while the request is in flight. The flag resets when
// the response page loads, whatever the outcome.
const SUBMITTING_SCRIPT: &str =
    "var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='送信中...';";

/// Form field values, as posted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Everything needed to render the form
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub values: FormValues,
    pub errors: Option<FieldErrors>,
    pub notice: Option<Notice>,
}

impl FormView {
    /// Empty form with a confirmation banner
    pub fn submitted() -> Self {
        Self {
            notice: Some(Notice::success("送信完了", "お問い合わせありがとうございます。")),
            ..Self::default()
        }
    }

    /// Keep what the user typed and point at the broken fields
    pub fn invalid(values: FormValues, errors: FieldErrors) -> Self {
        Self {
            values,
            errors: Some(errors),
            notice: None,
        }
    }

    /// Keep what the user typed so they can retry
    pub fn failed(values: FormValues, description: impl Into<String>) -> Self {
        Self {
            values,
            errors: None,
            notice: Some(Notice::error(description)),
        }
    }

    fn field_error(&self, field: Field) -> Option<String> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(ToString::to_string)
    }
}

/// Render the contact form page.
pub fn render(view: &FormView) -> String {
    let mut body = String::new();
    body.push_str("<h1>お問い合わせ</h1>\n");
    body.push_str(
        "<p>ご質問・ご要望などございましたら、下記フォームよりお気軽にお問い合わせください。</p>\n",
    );

    let _ = writeln!(
        body,
        r#"<form method="post" action="/contact" onsubmit="{}">"#,
        escape(SUBMITTING_SCRIPT)
    );

    // Name
    body.push_str("<div class=\"field\">\n");
    let _ = writeln!(body, r#"<label for="name">{}</label>"#, Field::Name.label());
    let _ = writeln!(
        body,
        r#"<input id="name" name="name" type="text" required placeholder="山田 太郎" value="{}">"#,
        escape(&view.values.name)
    );
    push_field_error(&mut body, view.field_error(Field::Name));
    body.push_str("</div>\n");

    // Email
    body.push_str("<div class=\"field\">\n");
    let _ = writeln!(body, r#"<label for="email">{}</label>"#, Field::Email.label());
    let _ = writeln!(
        body,
        r#"<input id="email" name="email" type="text" inputmode="email" required pattern="{}" placeholder="example@example.com" value="{}">"#,
        escape(EMAIL_SHAPE),
        escape(&view.values.email)
    );
    push_field_error(&mut body, view.field_error(Field::Email));
    body.push_str("</div>\n");

    // Message
    body.push_str("<div class=\"field\">\n");
    body.push_str("<label for=\"message\">お問い合わせ内容</label>\n");
    let _ = writeln!(
        body,
        r#"<textarea id="message" name="message" required minlength="{MESSAGE_MIN_CHARS}" placeholder="お問い合わせ内容を入力してください">{}</textarea>"#,
        escape(&view.values.message)
    );
    push_field_error(&mut body, view.field_error(Field::Message));
    body.push_str("</div>\n");

    body.push_str("<button type=\"submit\">送信する</button>\n</form>\n");

    layout("お問い合わせ", view.notice.as_ref(), &body)
}

fn push_field_error(body: &mut String, message: Option<String>) {
    if let Some(message) = message {
        let _ = writeln!(body, r#"<p class="field-error">{}</p>"#, escape(&message));
    }
}
