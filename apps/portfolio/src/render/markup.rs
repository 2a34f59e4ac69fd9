//! Small HTML building blocks shared by the views.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
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
    out
}

pub fn pill(text: &str) -> String {
    format!(r#"<span class="pill">{}</span>"#, escape(text))
}

pub fn pills(texts: &[&str]) -> String {
    let inner: String = texts.iter().map(|t| pill(t)).collect();
    format!(r#"<div class="pills">{inner}</div>"#)
}

pub fn metric(value: &str, label: &str) -> String {
    format!(
        r#"<div class="metric"><p class="metric-value">{}</p><p class="metric-label">{}</p></div>"#,
        escape(value),
        escape(label)
    )
}

/// `<ul>` with one `<li>` per item, in iteration order.
pub fn list<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let inner: String = items
        .into_iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{inner}</ul>")
}

/// Anchor to an outbound destination. `http(s)` targets open in a new tab.
pub fn link(href: &str, label: &str, class: &str) -> String {
    let target = if href.starts_with("mailto:") {
        ""
    } else {
        r#" target="_blank" rel="noreferrer""#
    };
    format!(
        r#"<a class="{}" href="{}"{target}>{}</a>"#,
        escape(class),
        escape(href),
        escape(label)
    )
}
