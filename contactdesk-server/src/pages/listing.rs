//! Inquiry listing and detail pages

use std::fmt::Write;

use chrono_tz::Tz;
use contactdesk_core::display::{detail_timestamp, list_timestamp, preview, PREVIEW_CHARS};
use contactdesk_core::Inquiry;

use super::{escape, layout, Notice};

pub const EMPTY_PLACEHOLDER: &str = "お問い合わせはまだありません";

const COLUMNS: [&str; 5] = ["日時", "お名前", "メールアドレス", "メッセージ", "操作"];

/// Render the table of inquiries. `notice` carries a fetch failure; the
/// caller passes an empty slice in that case.
pub fn render_list(inquiries: &[Inquiry], notice: Option<&Notice>, tz: Tz) -> String {
    let mut body = String::new();
    body.push_str("<h1>お問い合わせ一覧</h1>\n<p>受け付けたお問い合わせの一覧です。</p>\n");
    body.push_str("<table>\n<thead>\n<tr>");
    for column in COLUMNS {
        let _ = write!(body, "<th>{column}</th>");
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");

    if inquiries.is_empty() {
        let _ = writeln!(
            body,
            r#"<tr><td colspan="{}" class="empty">{EMPTY_PLACEHOLDER}</td></tr>"#,
            COLUMNS.len()
        );
    }

    for inquiry in inquiries {
        let _ = writeln!(
            body,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/inquiries/{}">詳細</a></td></tr>"#,
            list_timestamp(inquiry.created_at, tz),
            escape(&inquiry.name),
            escape(&inquiry.email),
            escape(&preview(&inquiry.message, PREVIEW_CHARS)),
            inquiry.id,
        );
    }

    body.push_str("</tbody>\n</table>\n");
    layout("お問い合わせ一覧", notice, &body)
}

/// Render one inquiry in full.
pub fn render_detail(inquiry: &Inquiry, tz: Tz) -> String {
    let mut body = String::new();
    body.push_str("<h1>お問い合わせ詳細</h1>\n<dl>\n");
    let _ = writeln!(
        body,
        "<dt>受付日時</dt><dd>{}</dd>",
        detail_timestamp(inquiry.created_at, tz)
    );
    let _ = writeln!(body, "<dt>お名前</dt><dd>{}</dd>", escape(&inquiry.name));
    let _ = writeln!(body, "<dt>メールアドレス</dt><dd>{}</dd>", escape(&inquiry.email));
    let _ = writeln!(
        body,
        r#"<dt>お問い合わせ内容</dt><dd style="white-space: pre-wrap">{}</dd>"#,
        escape(&inquiry.message)
    );
    body.push_str("</dl>\n<p><a href=\"/inquiries\">一覧へ戻る</a></p>\n");
    layout("お問い合わせ詳細", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn inquiry(name: &str, message: &str) -> Inquiry {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Inquiry {
            id: Uuid::new_v4(),
            name: name.into(),
            email: "ann@example.com".into(),
            message: message.into(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn empty_list_renders_placeholder_row() {
        let html = render_list(&[], None, chrono_tz::Asia::Tokyo);

        assert!(html.contains(EMPTY_PLACEHOLDER));
        assert!(html.contains(r#"colspan="5""#));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn rows_are_escaped_and_truncated() {
        let long = "x".repeat(100);
        let rows = vec![inquiry("<b>Ann</b>", &long)];
        let html = render_list(&rows, None, chrono_tz::Asia::Tokyo);

        assert!(html.contains("&lt;b&gt;Ann&lt;/b&gt;"));
        assert!(html.contains("2024/05/01 18:30"));
        assert!(html.contains(&format!("{}…", "x".repeat(PREVIEW_CHARS))));
        assert!(!html.contains(&long));
        assert!(html.contains(&format!(r#"href="/inquiries/{}""#, rows[0].id)));
        assert!(!html.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn failure_notice_with_empty_table() {
        let notice = Notice::error("データの取得に失敗しました");
        let html = render_list(&[], Some(&notice), chrono_tz::Asia::Tokyo);

        assert!(html.contains("データの取得に失敗しました"));
        assert!(html.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn detail_shows_full_message() {
        let message = format!("{}\nsecond line", "y".repeat(80));
        let html = render_detail(&inquiry("Ann", &message), chrono_tz::Asia::Tokyo);

        assert!(html.contains(&message));
        assert!(html.contains("2024年05月01日 18:30"));
    }
}
