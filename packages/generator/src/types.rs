//! Core data types for the generator.
//!
//! These types form the parsed master document tree. Every field has an
//! explicit default so absent keys deserialize to empty values, and the
//! whole tree is read-only after parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::config::title_case_label;

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Identity block: who the CV is about and how to reach them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Identity {
    /// Generate a file-friendly slug from the name.
    ///
    /// Returns `None` when there is no usable name.
    ///
    /// # Examples
    /// ```
    /// use mastercv_generator::types::Identity;
    ///
    /// let identity = Identity {
    ///     name: Some("Kok Shew Juan".to_string()),
    ///     ..Identity::default()
    /// };
    /// assert_eq!(identity.to_slug(), Some("kok_shew_juan".to_string()));
    /// ```
    #[must_use]
    pub fn to_slug(&self) -> Option<String> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }

        let text = name.to_lowercase();
        let text = SLUG_NON_WORD.replace_all(&text, "");
        let text = SLUG_SPACE_DASH.replace_all(&text, "_");
        let slug = text.trim_matches('_').to_string();

        if slug.is_empty() {
            None
        } else {
            Some(slug)
        }
    }
}

/// Free-text summary section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub selected: bool,
    pub content: String,
}

/// A single list entry under a job, skill category, or item section.
///
/// Master documents accumulate entries over years of hand-editing, so a
/// list may contain stray scalars or half-filled records. Anything that
/// is not a well-formed selectable item falls into the `Other` variant
/// and is dropped by the filter instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemEntry {
    Item(SelectableItem),
    Other(serde_yaml_ng::Value),
}

/// A selectable text entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectableItem {
    pub selected: bool,
    pub text: Option<String>,
}

/// A job in the work experience section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Job {
    pub selected: bool,
    pub company: String,
    pub role: String,
    pub location: String,
    pub date_range: String,
    pub responsibilities: Vec<ItemEntry>,
}

/// Work experience section: a gate flag plus the job list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub selected: bool,
    pub jobs: Vec<Job>,
}

/// A degree in the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Degree {
    pub selected: bool,
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Education section: a gate flag plus the degree list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Education {
    pub selected: bool,
    pub degrees: Vec<Degree>,
}

/// A skill category: optional display label plus its items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub label: Option<String>,
    pub selected: bool,
    pub items: Vec<ItemEntry>,
}

impl SkillCategory {
    /// Resolve the display label, falling back to the title-cased key.
    #[must_use]
    pub fn label_for(&self, key: &str) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| title_case_label(key))
    }
}

/// Skill categories in document order.
///
/// Output order must match the order the categories appear in the
/// master document, so this is an ordered list of key-value pairs
/// rather than a map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categories(pub Vec<(String, SkillCategory)>);

impl Categories {
    /// Iterate categories in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillCategory)> {
        self.0.iter().map(|(key, category)| (key.as_str(), category))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = Categories;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping of category key to skill category")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, category)) = map.next_entry::<String, SkillCategory>()? {
                    entries.push((key, category));
                }
                Ok(Categories(entries))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

/// Skills section: a gate flag plus ordered categories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub selected: bool,
    pub categories: Categories,
}

/// A section that is just a gated list of items (interests, additional
/// information).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemSection {
    pub selected: bool,
    pub items: Vec<ItemEntry>,
}

/// Complete master document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MasterCv {
    pub identity: Identity,
    pub summary: Summary,
    pub work_experience: WorkExperience,
    pub education: Education,
    pub skills: Skills,
    pub professional_interests: ItemSection,
    pub additional_information: ItemSection,
}
