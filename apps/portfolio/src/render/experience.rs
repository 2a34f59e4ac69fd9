use crate::models::content::{EducationEntry, NoteEntry, WorkHistoryEntry};
use crate::render::markup::{escape, list};

fn history_card(entry: &WorkHistoryEntry) -> String {
    format!(
        concat!(
            r#"<article class="history-card">"#,
            "<h3>{} – {}</h3>",
            r#"<p class="meta">{} | {}</p>"#,
            "{}",
            "</article>"
        ),
        escape(&entry.title_line),
        escape(&entry.organization),
        escape(&entry.date_range),
        escape(&entry.location_line),
        list(entry.responsibilities.iter().map(String::as_str))
    )
}

fn education_card(entry: &EducationEntry) -> String {
    let secondary = entry
        .secondary_line()
        .map(|line| format!(r#"<p class="meta">{}</p>"#, escape(&line)))
        .unwrap_or_default();
    format!(
        r#"<article class="education-card"><h3>{}</h3>{secondary}</article>"#,
        escape(&entry.title)
    )
}

/// Renders the Experience view body.
///
/// A direct structural mapping: one history card per work entry, one card per
/// education entry, one card holding every note. Input order is kept throughout.
pub fn render_experience(
    work_history: &[WorkHistoryEntry],
    education: &[EducationEntry],
    notes: &[NoteEntry],
) -> String {
    let history: String = work_history.iter().map(history_card).collect();
    let credentials: String = education.iter().map(education_card).collect();

    format!(
        concat!(
            r#"<section id="experience-header"><h1>Experience</h1>"#,
            "<p>Detailed professional experience, education, certifications, and additional information.</p></section>",
            r#"<section id="professional-experience"><h2>Professional Experience</h2>{}</section>"#,
            r#"<section id="education"><h2>Education &amp; Certifications</h2><div class="grid">{}</div></section>"#,
            r#"<section id="additional-information"><h2>Additional Information</h2>"#,
            r#"<article class="notes-card">{}</article></section>"#
        ),
        history,
        credentials,
        list(notes.iter().map(NoteEntry::as_str))
    )
}
