//! Server-rendered HTML pages
//!
//! Pages are plain strings assembled with `write!`. Every piece of user
//! data goes through [`escape`] on the way in.

pub mod form;
pub mod listing;

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// A transient banner at the top of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "エラー".into(),
            description: description.into(),
        }
    }

    fn render(&self, out: &mut String) {
        let (class, role) = match self.kind {
            NoticeKind::Success => ("notice notice-success", "status"),
            NoticeKind::Error => ("notice notice-error", "alert"),
        };
        let _ = writeln!(
            out,
            r#"<div class="{class}" role="{role}"><strong>{}</strong> {}</div>"#,
            escape(&self.title),
            escape(&self.description),
        );
    }
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    out.push_str("</head>\n<body>\n<main>\n");
    if let Some(notice) = notice {
        notice.render(&mut out);
    }
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// Landing page pointing at the contact form
pub fn home() -> String {
    let body = concat!(
        "<h1>お問い合わせシステム</h1>\n",
        "<p>ご質問・ご要望などございましたら、お気軽にお問い合わせください。</p>\n",
        "<p><a href=\"/contact\">お問い合わせはこちら</a></p>\n",
    );
    layout("お問い合わせシステム", None, body)
}

/// Minimal page for unknown resources
pub fn not_found(what: &str) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>見つかりません</h1>\n<p>{}</p>", escape(what));
    body.push_str("<p><a href=\"/\">トップへ戻る</a></p>\n");
    layout("見つかりません", None, &body)
}
