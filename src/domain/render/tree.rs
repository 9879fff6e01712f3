use crate::entities::{
    certification::Certification, education::Education, experience::Experience,
    language::Language, project::Project, resume::Resume, skill::Skill,
};
use crate::format::{format_period, format_range};
use crate::utils::valid_url::is_absolute_url;

/// Renderer-agnostic presentation tree. Section visibility, entry layout
/// slots and every formatted date string are fixed here, once; the two HTML
/// targets only differ in markup around this structure, which is what keeps
/// the on-screen page and the export document from drifting apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub header: Header,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub full_name: String,
    pub summary: Option<String>,
    pub contacts: Vec<Contact>,
}

/// One contact-block item. `href` is only present when the target is safe to
/// link (mailto, or an absolute http(s) URL); otherwise the item degrades to
/// plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Entries(Vec<Entry>),
    Tags(Vec<String>),
}

/// A dated entry (experience, education, project, certification).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub heading: String,
    pub subheading: Option<String>,
    pub meta: Option<String>,
    /// Pre-formatted; empty when the entry has nothing to show.
    pub date_range: String,
    pub description: Option<String>,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
}

pub fn build_document(resume: &Resume) -> ResumeDocument {
    let mut sections = Vec::new();

    if !resume.experiences.is_empty() {
        sections.push(Section {
            title: "Experience",
            body: SectionBody::Entries(resume.experiences.iter().map(experience_entry).collect()),
        });
    }
    if !resume.education.is_empty() {
        sections.push(Section {
            title: "Education",
            body: SectionBody::Entries(resume.education.iter().map(education_entry).collect()),
        });
    }
    if !resume.skills.is_empty() {
        sections.push(Section {
            title: "Skills",
            body: SectionBody::Tags(resume.skills.iter().map(skill_tag).collect()),
        });
    }
    if !resume.projects.is_empty() {
        sections.push(Section {
            title: "Projects",
            body: SectionBody::Entries(resume.projects.iter().map(project_entry).collect()),
        });
    }
    if !resume.certifications.is_empty() {
        sections.push(Section {
            title: "Certifications",
            body: SectionBody::Entries(resume.certifications.iter().map(certification_entry).collect()),
        });
    }
    if !resume.languages.is_empty() {
        sections.push(Section {
            title: "Languages",
            body: SectionBody::Tags(resume.languages.iter().map(language_tag).collect()),
        });
    }

    ResumeDocument {
        header: build_header(resume),
        sections,
    }
}

fn build_header(resume: &Resume) -> Header {
    let mut contacts = Vec::new();

    if !resume.email.is_empty() {
        contacts.push(Contact {
            label: resume.email.clone(),
            href: Some(format!("mailto:{}", resume.email)),
        });
    }
    if let Some(phone) = non_empty(&resume.phone) {
        contacts.push(Contact { label: phone.to_string(), href: None });
    }
    if let Some(location) = non_empty(&resume.location) {
        contacts.push(Contact { label: location.to_string(), href: None });
    }
    push_profile_link(&mut contacts, "Website", &resume.website);
    push_profile_link(&mut contacts, "LinkedIn", &resume.linkedin);
    push_profile_link(&mut contacts, "GitHub", &resume.github);

    Header {
        full_name: resume.full_name.clone(),
        summary: resume.summary.clone().filter(|s| !s.is_empty()),
        contacts,
    }
}

fn push_profile_link(contacts: &mut Vec<Contact>, label: &str, url: &Option<String>) {
    let Some(url) = non_empty(url) else { return };
    // Legacy rows predating the URL validation may hold anything here.
    let href = is_absolute_url(url).then(|| url.to_string());
    contacts.push(Contact { label: label.to_string(), href });
}

fn experience_entry(exp: &Experience) -> Entry {
    Entry {
        heading: exp.title.clone().unwrap_or_default(),
        subheading: exp.company.clone(),
        meta: exp.location.clone(),
        date_range: format_range(exp.start_date.as_deref(), exp.end_date.as_deref(), exp.current),
        description: exp.description.clone().filter(|d| !d.is_empty()),
        link: None,
    }
}

fn education_entry(edu: &Education) -> Entry {
    Entry {
        heading: edu.degree.clone().unwrap_or_default(),
        subheading: edu.school.clone(),
        meta: edu.location.clone(),
        date_range: format_range(edu.start_date.as_deref(), edu.end_date.as_deref(), edu.current),
        description: edu.description.clone().filter(|d| !d.is_empty()),
        link: None,
    }
}

fn project_entry(project: &Project) -> Entry {
    Entry {
        heading: project.name.clone().unwrap_or_default(),
        subheading: None,
        meta: project.technologies.as_deref().filter(|t| !t.is_empty())
            .map(|t| format!("Technologies: {t}")),
        date_range: format_range(
            project.start_date.as_deref(),
            project.end_date.as_deref(),
            project.current,
        ),
        description: project.description.clone().filter(|d| !d.is_empty()),
        link: project.url.as_deref()
            .filter(|url| is_absolute_url(url))
            .map(|url| Link { label: "View Project", href: url.to_string() }),
    }
}

fn certification_entry(cert: &Certification) -> Entry {
    Entry {
        heading: cert.name.clone().unwrap_or_default(),
        subheading: cert.issuer.clone(),
        meta: None,
        date_range: cert.date.as_deref().map(format_period).unwrap_or_default(),
        description: None,
        link: None,
    }
}

fn skill_tag(skill: &Skill) -> String {
    skill.name.clone().unwrap_or_default()
}

fn language_tag(language: &Language) -> String {
    let name = language.name.clone().unwrap_or_default();
    match language.level.as_deref().filter(|l| !l.is_empty()) {
        Some(level) => format!("{name} ({level})"),
        None => name,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn bare_resume() -> Resume {
        Resume {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            location: None,
            website: None,
            linkedin: None,
            github: None,
            summary: None,
            experiences: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            languages: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_collections_suppress_their_sections() {
        let mut resume = bare_resume();
        resume.skills = vec![Skill { name: Some("Rust".into()), level: None }];

        let doc = build_document(&resume);
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Skills"]);
    }

    #[test]
    fn sections_keep_presentation_order() {
        let mut resume = bare_resume();
        resume.languages = vec![Language { name: Some("English".into()), level: None }];
        resume.experiences = vec![Experience::default()];
        resume.certifications = vec![Certification { name: Some("Cert".into()), ..Certification::default() }];

        let doc = build_document(&resume);
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Experience", "Certifications", "Languages"]);
    }

    #[test]
    fn date_ranges_are_computed_once_in_the_tree() {
        let mut resume = bare_resume();
        resume.experiences = vec![Experience {
            title: Some("Engineer".into()),
            start_date: Some("2020-01".into()),
            current: true,
            ..Experience::default()
        }];

        let doc = build_document(&resume);
        let SectionBody::Entries(entries) = &doc.sections[0].body else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].date_range, "Jan 2020 - Present");
    }

    #[test]
    fn unlinkable_profile_urls_degrade_to_text() {
        let mut resume = bare_resume();
        resume.website = Some("not a url".into());
        resume.github = Some("https://github.com/ada".into());

        let header = build_document(&resume).header;
        let website = header.contacts.iter().find(|c| c.label == "Website").unwrap();
        let github = header.contacts.iter().find(|c| c.label == "GitHub").unwrap();
        assert_eq!(website.href, None);
        assert_eq!(github.href.as_deref(), Some("https://github.com/ada"));
    }

    #[test]
    fn language_tags_carry_their_level() {
        let mut resume = bare_resume();
        resume.languages = vec![
            Language { name: Some("French".into()), level: Some("B2".into()) },
            Language { name: Some("German".into()), level: None },
        ];

        let doc = build_document(&resume);
        let SectionBody::Tags(tags) = &doc.sections[0].body else {
            panic!("expected tags");
        };
        assert_eq!(tags, &vec!["French (B2)".to_string(), "German".to_string()]);
    }
}
