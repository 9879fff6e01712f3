use std::str::FromStr;

pub mod export;
pub mod interactive;
pub mod tree;

pub use export::render_export;
pub use interactive::render_interactive;
pub use tree::build_document;

/// Color scheme for the interactive target. Passed in explicitly by the
/// caller; the renderer holds no ambient theme state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl Theme {
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Everything the interactive target needs beyond the document itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub theme: Theme,
    /// Where the export document can be fetched, if the page should offer it.
    pub export_href: Option<String>,
}

/// HTML-escapes user text for element content and attribute values.
pub(crate) fn esc(text: &str) -> String {
    ammonia::clean_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        certification::Certification, experience::Experience, language::Language,
        project::Project, resume::Resume, skill::Skill,
    };
    use crate::render::tree::SectionBody;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_resume() -> Resume {
        Resume {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: Some("+44 20 7946 0000".into()),
            location: Some("London".into()),
            website: Some("https://ada.dev".into()),
            linkedin: None,
            github: None,
            summary: Some("Analyst and programmer.".into()),
            experiences: vec![Experience {
                title: Some("Analyst".into()),
                company: Some("Babbage & Co".into()),
                start_date: Some("1842-01".into()),
                end_date: Some("1843-09".into()),
                ..Experience::default()
            }],
            education: vec![],
            skills: vec![Skill { name: Some("Mathematics".into()), level: None }],
            projects: vec![Project {
                name: Some("Engine Notes".into()),
                url: Some("https://example.com/notes".into()),
                start_date: Some("1842-05".into()),
                current: true,
                ..Project::default()
            }],
            certifications: vec![Certification {
                name: Some("Royal Society".into()),
                date: Some("1841-11".into()),
                ..Certification::default()
            }],
            languages: vec![Language { name: Some("French".into()), level: Some("C1".into()) }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn both_targets_show_the_same_sections() {
        let resume = sample_resume();
        let doc = build_document(&resume);
        let page = render_interactive(&doc, &RenderContext::default());
        let export = render_export(&doc);

        for title in ["Experience", "Skills", "Projects", "Certifications", "Languages"] {
            assert!(page.contains(&format!("<h2>{title}</h2>")), "page missing {title}");
            assert!(export.contains(&format!("<h2>{title}</h2>")), "export missing {title}");
        }
        // Education is empty and must be suppressed everywhere.
        assert!(!page.contains("Education"));
        assert!(!export.contains("Education"));
    }

    #[test]
    fn both_targets_show_identical_date_strings() {
        let doc = build_document(&sample_resume());
        let page = render_interactive(&doc, &RenderContext::default());
        let export = render_export(&doc);

        for range in ["Jan 1842 - Sep 1843", "May 1842 - Present", "Nov 1841"] {
            assert!(page.contains(range), "page missing {range}");
            assert!(export.contains(range), "export missing {range}");
        }
    }

    #[test]
    fn user_text_is_escaped_in_both_targets() {
        let mut resume = sample_resume();
        resume.full_name = "Ada <script>alert(1)</script>".into();

        let doc = build_document(&resume);
        let page = render_interactive(&doc, &RenderContext::default());
        let export = render_export(&doc);

        assert!(!page.contains("<script>"));
        assert!(!export.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(export.contains("&lt;script&gt;"));
    }

    #[test]
    fn interactive_carries_theme_and_export_link() {
        let doc = build_document(&sample_resume());
        let ctx = RenderContext {
            theme: Theme::Dark,
            export_href: Some("/api/resume/ada/export".into()),
        };
        let page = render_interactive(&doc, &ctx);

        assert!(page.contains("class=\"dark\""));
        assert!(page.contains("/api/resume/ada/export"));
    }

    #[test]
    fn export_is_self_contained() {
        let doc = build_document(&sample_resume());
        let export = render_export(&doc);

        assert!(export.contains("<style>"));
        assert!(!export.contains("<link"));
    }

    #[test]
    fn tags_body_is_used_for_skills_and_languages() {
        let doc = build_document(&sample_resume());
        let tag_sections: Vec<_> = doc
            .sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Tags(_)))
            .map(|s| s.title)
            .collect();
        assert_eq!(tag_sections, vec!["Skills", "Languages"]);
    }
}
