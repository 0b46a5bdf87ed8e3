//! Selection filtering over the parsed master document.
//!
//! All gating logic lives here, in a single pass that produces an
//! immutable [`SelectedCv`] view borrowing from the parsed tree. The
//! renderer then emits whatever survives, with no selection checks of
//! its own.
//!
//! Selection is independent per level: an unselected parent suppresses
//! all of its descendants regardless of their own flags.

use crate::types::{Degree, ItemEntry, Job, MasterCv, SkillCategory, Summary};

/// A selected job with its filtered responsibility texts.
#[derive(Debug)]
pub struct SelectedJob<'a> {
    pub job: &'a Job,
    pub responsibilities: Vec<&'a str>,
}

/// A selected skill category with its resolved label and filtered items.
#[derive(Debug)]
pub struct SkillGroup<'a> {
    pub label: String,
    pub items: Vec<&'a str>,
}

/// The filtered view of a master document.
///
/// `None` means the section was not selected and produces no output at
/// all; `Some` with an empty list renders the section heading with no
/// entries.
#[derive(Debug)]
pub struct SelectedCv<'a> {
    pub summary: Option<&'a Summary>,
    pub jobs: Option<Vec<SelectedJob<'a>>>,
    pub degrees: Option<Vec<&'a Degree>>,
    pub skills: Option<Vec<SkillGroup<'a>>>,
    pub interests: Option<Vec<&'a str>>,
    pub additional: Option<Vec<&'a str>>,
}

/// Counts describing a filtered view, for console reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvStats {
    /// Number of selected sections.
    pub sections: usize,
    /// Number of selected jobs.
    pub jobs: usize,
    /// Total bullet lines across all sections.
    pub bullets: usize,
}

impl SelectedCv<'_> {
    /// Summarize the filtered view.
    #[must_use]
    pub fn stats(&self) -> CvStats {
        let sections = [
            self.summary.is_some(),
            self.jobs.is_some(),
            self.degrees.is_some(),
            self.skills.is_some(),
            self.interests.is_some(),
            self.additional.is_some(),
        ]
        .into_iter()
        .filter(|selected| *selected)
        .count();

        let jobs = self.jobs.as_ref().map_or(0, Vec::len);

        let bullets = self
            .jobs
            .iter()
            .flatten()
            .map(|job| job.responsibilities.len())
            .sum::<usize>()
            + self
                .skills
                .iter()
                .flatten()
                .map(|group| group.items.len())
                .sum::<usize>()
            + self.interests.as_ref().map_or(0, Vec::len)
            + self.additional.as_ref().map_or(0, Vec::len);

        CvStats {
            sections,
            jobs,
            bullets,
        }
    }
}

/// Filter a list of entries down to the texts of selected items.
///
/// Keeps entries that are well-formed records with `selected: true` and
/// a non-empty `text`, in input order. Anything else (stray scalars,
/// records without text) is skipped silently.
#[must_use]
pub fn selected_texts(entries: &[ItemEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            ItemEntry::Item(item) if item.selected => match item.text.as_deref() {
                Some(text) if !text.is_empty() => Some(text),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Build the filtered view of a master document in one pass.
#[must_use]
pub fn select(cv: &MasterCv) -> SelectedCv<'_> {
    let summary = cv.summary.selected.then_some(&cv.summary);

    let jobs = cv.work_experience.selected.then(|| {
        cv.work_experience
            .jobs
            .iter()
            .filter(|job| job.selected)
            .map(|job| SelectedJob {
                job,
                responsibilities: selected_texts(&job.responsibilities),
            })
            .collect()
    });

    let degrees = cv.education.selected.then(|| {
        cv.education
            .degrees
            .iter()
            .filter(|degree| degree.selected)
            .collect()
    });

    let skills = cv.skills.selected.then(|| {
        cv.skills
            .categories
            .iter()
            .filter(|(_, category)| category.selected)
            .filter_map(|(key, category)| select_skill_group(key, category))
            .collect()
    });

    let interests = cv
        .professional_interests
        .selected
        .then(|| selected_texts(&cv.professional_interests.items));

    let additional = cv
        .additional_information
        .selected
        .then(|| selected_texts(&cv.additional_information.items));

    SelectedCv {
        summary,
        jobs,
        degrees,
        skills,
        interests,
        additional,
    }
}

/// Build a skill group from a selected category.
///
/// A category whose filtered item list is empty produces no group.
fn select_skill_group<'a>(key: &str, category: &'a SkillCategory) -> Option<SkillGroup<'a>> {
    let items = selected_texts(&category.items);
    if items.is_empty() {
        return None;
    }
    Some(SkillGroup {
        label: category.label_for(key),
        items,
    })
}
