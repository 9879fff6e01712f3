use uuid::Uuid;

use crate::entities::{
    certification::Certification, education::Education, experience::Experience,
    language::Language, project::Project, resume::{Resume, ResumeInput}, skill::Skill,
};

/// Stable identity of one draft entry, minted when the entry is added.
/// Mutations key on this id instead of list position, so removing an entry
/// can never redirect a pending update onto its neighbor.
pub type DraftId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem<T> {
    pub id: DraftId,
    pub value: T,
}

impl<T> DraftItem<T> {
    fn of(value: T) -> Self {
        DraftItem { id: Uuid::new_v4(), value }
    }
}

/// Names the top-level scalar targeted by [`DraftResume::update_scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    FullName,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Summary,
}

/// Names a collection for the shape-independent add/remove operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experiences,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
}

/// The in-memory editing copy of a resume, distinct from the canonical
/// persisted copy until a save succeeds. Scalars are plain strings (absent
/// values surface as empty) so they bind directly to form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experiences: Vec<DraftItem<Experience>>,
    pub education: Vec<DraftItem<Education>>,
    pub skills: Vec<DraftItem<Skill>>,
    pub projects: Vec<DraftItem<Project>>,
    pub certifications: Vec<DraftItem<Certification>>,
    pub languages: Vec<DraftItem<Language>>,
}

impl DraftResume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from the canonical copy, applying the absent -> empty
    /// coercion and minting fresh entry ids.
    pub fn from_resume(resume: &Resume) -> Self {
        DraftResume {
            full_name: resume.full_name.clone(),
            email: resume.email.clone(),
            phone: resume.phone.clone().unwrap_or_default(),
            location: resume.location.clone().unwrap_or_default(),
            website: resume.website.clone().unwrap_or_default(),
            linkedin: resume.linkedin.clone().unwrap_or_default(),
            github: resume.github.clone().unwrap_or_default(),
            summary: resume.summary.clone().unwrap_or_default(),
            experiences: wrap(&resume.experiences),
            education: wrap(&resume.education),
            skills: wrap(&resume.skills),
            projects: wrap(&resume.projects),
            certifications: wrap(&resume.certifications),
            languages: wrap(&resume.languages),
        }
    }

    pub fn update_scalar(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ScalarField::FullName => self.full_name = value,
            ScalarField::Email => self.email = value,
            ScalarField::Phone => self.phone = value,
            ScalarField::Location => self.location = value,
            ScalarField::Website => self.website = value,
            ScalarField::Linkedin => self.linkedin = value,
            ScalarField::Github => self.github = value,
            ScalarField::Summary => self.summary = value,
        }
    }

    /// Appends a blank entry (the collection's defaults: empty fields,
    /// `current` off) and returns its id.
    pub fn add_item(&mut self, kind: SectionKind) -> DraftId {
        match kind {
            SectionKind::Experiences => push_blank(&mut self.experiences),
            SectionKind::Education => push_blank(&mut self.education),
            SectionKind::Skills => push_blank(&mut self.skills),
            SectionKind::Projects => push_blank(&mut self.projects),
            SectionKind::Certifications => push_blank(&mut self.certifications),
            SectionKind::Languages => push_blank(&mut self.languages),
        }
    }

    /// Removes the identified entry; later entries shift down. Returns
    /// whether anything was removed.
    pub fn remove_item(&mut self, kind: SectionKind, id: DraftId) -> bool {
        match kind {
            SectionKind::Experiences => remove_by_id(&mut self.experiences, id),
            SectionKind::Education => remove_by_id(&mut self.education, id),
            SectionKind::Skills => remove_by_id(&mut self.skills, id),
            SectionKind::Projects => remove_by_id(&mut self.projects, id),
            SectionKind::Certifications => remove_by_id(&mut self.certifications, id),
            SectionKind::Languages => remove_by_id(&mut self.languages, id),
        }
    }

    pub fn update_experience(&mut self, id: DraftId, f: impl FnOnce(&mut Experience)) -> bool {
        update_by_id(&mut self.experiences, id, f)
    }

    pub fn update_education(&mut self, id: DraftId, f: impl FnOnce(&mut Education)) -> bool {
        update_by_id(&mut self.education, id, f)
    }

    pub fn update_skill(&mut self, id: DraftId, f: impl FnOnce(&mut Skill)) -> bool {
        update_by_id(&mut self.skills, id, f)
    }

    pub fn update_project(&mut self, id: DraftId, f: impl FnOnce(&mut Project)) -> bool {
        update_by_id(&mut self.projects, id, f)
    }

    pub fn update_certification(&mut self, id: DraftId, f: impl FnOnce(&mut Certification)) -> bool {
        update_by_id(&mut self.certifications, id, f)
    }

    pub fn update_language(&mut self, id: DraftId, f: impl FnOnce(&mut Language)) -> bool {
        update_by_id(&mut self.languages, id, f)
    }

    /// Snapshots the draft as a save candidate. Empty optional scalars ride
    /// along as empty strings; the codec turns them into absent markers.
    pub fn candidate(&self) -> ResumeInput {
        ResumeInput {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()),
            location: Some(self.location.clone()),
            website: Some(self.website.clone()),
            linkedin: Some(self.linkedin.clone()),
            github: Some(self.github.clone()),
            summary: Some(self.summary.clone()),
            experiences: unwrap(&self.experiences),
            education: unwrap(&self.education),
            skills: unwrap(&self.skills),
            projects: unwrap(&self.projects),
            certifications: unwrap(&self.certifications),
            languages: unwrap(&self.languages),
        }
    }

    /// Replaces the draft with the canonical, server-normalized copy after a
    /// successful save.
    pub fn reconcile(&mut self, saved: &Resume) {
        *self = DraftResume::from_resume(saved);
    }
}

fn wrap<T: Clone>(values: &[T]) -> Vec<DraftItem<T>> {
    values.iter().cloned().map(DraftItem::of).collect()
}

fn unwrap<T: Clone>(items: &[DraftItem<T>]) -> Vec<T> {
    items.iter().map(|item| item.value.clone()).collect()
}

fn push_blank<T: Default>(items: &mut Vec<DraftItem<T>>) -> DraftId {
    let item = DraftItem::of(T::default());
    let id = item.id;
    items.push(item);
    id
}

fn remove_by_id<T>(items: &mut Vec<DraftItem<T>>, id: DraftId) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

fn update_by_id<T>(items: &mut Vec<DraftItem<T>>, id: DraftId, f: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            f(&mut item.value);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_two_experiences() -> (DraftResume, DraftId, DraftId) {
        let mut draft = DraftResume::new();
        let first = draft.add_item(SectionKind::Experiences);
        let second = draft.add_item(SectionKind::Experiences);
        draft.update_experience(first, |exp| exp.title = Some("First".into()));
        draft.update_experience(second, |exp| exp.title = Some("Second".into()));
        (draft, first, second)
    }

    #[test]
    fn add_then_remove_restores_the_collection() {
        let (mut draft, _, _) = draft_with_two_experiences();
        let snapshot = draft.experiences.clone();

        let added = draft.add_item(SectionKind::Experiences);
        assert_eq!(draft.experiences.len(), 3);
        assert_eq!(draft.experiences[2].value, Experience::default());

        assert!(draft.remove_item(SectionKind::Experiences, added));
        assert_eq!(draft.experiences, snapshot);
    }

    #[test]
    fn updates_touch_exactly_one_entry() {
        let (mut draft, first, second) = draft_with_two_experiences();

        assert!(draft.update_experience(second, |exp| exp.current = true));

        let first_item = draft.experiences.iter().find(|i| i.id == first).unwrap();
        let second_item = draft.experiences.iter().find(|i| i.id == second).unwrap();
        assert!(!first_item.value.current);
        assert!(second_item.value.current);
    }

    #[test]
    fn ids_survive_removal_of_earlier_entries() {
        let (mut draft, first, second) = draft_with_two_experiences();

        assert!(draft.remove_item(SectionKind::Experiences, first));
        // The surviving entry keeps its identity even though its position shifted.
        assert!(draft.update_experience(second, |exp| exp.company = Some("Acme".into())));
        assert_eq!(draft.experiences.len(), 1);
        assert_eq!(draft.experiences[0].value.company.as_deref(), Some("Acme"));

        // The removed id no longer resolves.
        assert!(!draft.update_experience(first, |exp| exp.company = Some("Ghost".into())));
        assert!(!draft.remove_item(SectionKind::Experiences, first));
    }

    #[test]
    fn scalar_updates_replace_one_field() {
        let mut draft = DraftResume::new();
        draft.update_scalar(ScalarField::FullName, "Ada Lovelace");
        draft.update_scalar(ScalarField::Website, "https://ada.dev");

        assert_eq!(draft.full_name, "Ada Lovelace");
        assert_eq!(draft.website, "https://ada.dev");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn blank_defaults_per_collection() {
        let mut draft = DraftResume::new();
        draft.add_item(SectionKind::Education);
        draft.add_item(SectionKind::Skills);
        draft.add_item(SectionKind::Projects);
        draft.add_item(SectionKind::Certifications);
        draft.add_item(SectionKind::Languages);

        assert_eq!(draft.education[0].value, Education::default());
        assert_eq!(draft.skills[0].value, Skill::default());
        assert_eq!(draft.projects[0].value, Project::default());
        assert!(!draft.projects[0].value.current);
        assert_eq!(draft.certifications[0].value, Certification::default());
        assert_eq!(draft.languages[0].value, Language::default());
    }

    #[test]
    fn candidate_carries_collections_in_order() {
        let (draft, _, _) = draft_with_two_experiences();
        let candidate = draft.candidate();

        let titles: Vec<_> = candidate
            .experiences
            .iter()
            .map(|exp| exp.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
