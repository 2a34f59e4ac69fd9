use std::sync::Arc;

use tracing::info;

use crate::content::ContentRepository;
use crate::models::view::View;
use crate::render::{render_experience, render_home, render_nav};

const STYLESHEET: &str = concat!(
    "body{font-family:system-ui,sans-serif;max-width:72rem;margin:0 auto;padding:3rem 1.5rem;color:#0f172a;background:#f8fafc}",
    ".nav{display:flex;flex-wrap:wrap;gap:.75rem;margin-bottom:3rem}.nav-links{margin-left:auto;display:flex;gap:.75rem}",
    ".nav-button,.button{padding:.25rem .75rem;border-radius:.375rem;border:1px solid #cbd5e1;background:#fff;color:#334155;text-decoration:none}",
    ".nav-button.active{background:#4f46e5;color:#fff}",
    ".grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:1.5rem}",
    "article,.metric{border:1px solid #e2e8f0;border-radius:1rem;background:#fff;padding:1.5rem;margin-bottom:1.5rem}",
    ".pill{display:inline-block;border:1px solid #e2e8f0;border-radius:9999px;padding:.25rem .75rem;font-size:.75rem;margin-right:.5rem}",
    ".metric-value{font-size:1.875rem;font-weight:700;color:#4f46e5}.tag{color:#4f46e5;font-size:.75rem}",
    "#contact{background:#0f172a;color:#fff;border-radius:1rem;padding:2.5rem;text-align:center}"
);

/// The mounted page: the selected [`View`] plus the read-only content behind it.
#[derive(Debug, Clone)]
pub struct Portfolio {
    view: View,
    content: Arc<ContentRepository>,
}

impl Portfolio {
    pub fn new(content: Arc<ContentRepository>) -> Self {
        Self {
            view: View::default(),
            content,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn content(&self) -> &ContentRepository {
        &self.content
    }

    /// Switches the composed view. Selecting the current view is a no-op.
    pub fn select(&mut self, view: View) {
        if self.view != view {
            info!("View changed: {} -> {}", self.view, view);
            self.view = view;
        }
    }

    /// Renders the navigation bar and the selected view as a full HTML document.
    pub fn render(&self) -> String {
        let body = match self.view {
            View::Home => render_home(),
            View::Experience => render_experience(
                &self.content.work_history,
                &self.content.education,
                &self.content.notes,
            ),
        };

        format!(
            concat!(
                "<!DOCTYPE html>",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>Asad Khan · {}</title><style>{}</style></head>",
                r#"<body>{}<main data-view="{}">{}</main></body></html>"#
            ),
            self.view.label(),
            STYLESHEET,
            render_nav(self.view),
            self.view.as_str(),
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount() -> Portfolio {
        Portfolio::new(Arc::new(ContentRepository::load()))
    }

    #[test]
    fn test_default_renders_home() {
        let page = mount();
        assert_eq!(page.view(), View::Home);
        let html = page.render();
        assert!(html.contains(r#"<main data-view="home">"#));
        assert!(html.contains(r#"<section id="hero">"#));
        assert!(!html.contains("history-card"));
    }

    #[test]
    fn test_select_experience_renders_experience() {
        let mut page = mount();
        page.select(View::Experience);
        let html = page.render();
        assert!(html.contains(r#"<main data-view="experience">"#));
        assert!(html.contains(r#"<section id="professional-experience">"#));
        assert!(!html.contains(r#"<section id="hero">"#));
    }

    #[test]
    fn test_select_home_after_experience() {
        let mut page = mount();
        page.select(View::Experience);
        page.select(View::Home);
        assert_eq!(page.render(), mount().render());
    }

    #[test]
    fn test_repeated_select_home_is_idempotent() {
        let mut page = mount();
        let before = page.render();
        for _ in 0..3 {
            page.select(View::Home);
        }
        let after = page.render();
        assert_eq!(before, after);
        assert_eq!(after.matches(r#"<article class="capability-card">"#).count(), 6);
    }

    #[test]
    fn test_experience_scenario_order() {
        let mut page = mount();
        page.select(View::Experience);
        let html = page.render();
        let first = html.find(r#"<article class="history-card">"#).unwrap();
        let sun = html.find("Sun Life Financial").unwrap();
        let cipla = html.find("Cipla").unwrap();
        let consulting = html.find("Enterprise Software Consultant").unwrap();
        assert!(first < sun && sun < cipla && cipla < consulting);

        let sun_card = &html[first..cipla];
        assert!(sun_card.matches("<li>").count() >= 5);
    }
}
