use crate::content::links::{EMAIL_HREF, LINKEDIN_HREF, RESUME_HREF};
use crate::models::view::View;
use crate::render::markup::{escape, link};

/// Navigation bar: one submit button per [`View`] plus the outbound links.
///
/// The buttons post `view=<name>` to `/navigate`; the active one is marked with
/// `aria-current="page"`.
pub fn render_nav(active: View) -> String {
    let buttons: String = View::ALL
        .iter()
        .map(|v| {
            let (class, current) = if *v == active {
                ("nav-button active", r#" aria-current="page""#)
            } else {
                ("nav-button", "")
            };
            format!(
                r#"<button type="submit" name="view" value="{}" class="{class}"{current}>{}</button>"#,
                v.as_str(),
                escape(v.label())
            )
        })
        .collect();

    format!(
        concat!(
            r#"<nav class="nav">"#,
            r#"<form method="post" action="/navigate" class="nav-views">{}</form>"#,
            r#"<div class="nav-links">{}{}{}</div>"#,
            "</nav>"
        ),
        buttons,
        link(RESUME_HREF, "Resume (PDF)", "button outline"),
        link(LINKEDIN_HREF, "LinkedIn", "button"),
        link(EMAIL_HREF, "Email", "button"),
    )
}
