//! Markdown assembly from a filtered document view.
//!
//! The renderer is a pure function from the filtered view to the final
//! document text. Identical input yields byte-identical output: lines
//! are collected in a fixed order and joined with `\n`, with blank
//! separator lines between blocks.

use super::text::wrap_text;
use crate::config::{CONTACT_SEPARATOR, DEFAULT_LINK_URL, DEFAULT_NAME};
use crate::filter::SelectedCv;
use crate::types::Identity;

/// Rendering knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Re-wrap the summary body at this column. `None` leaves the
    /// summary text exactly as written in the master document.
    pub wrap_width: Option<usize>,
}

/// Render the filtered document view as a Markdown string.
#[must_use]
pub fn render_markdown(
    identity: &Identity,
    cv: &SelectedCv<'_>,
    options: &RenderOptions,
) -> String {
    let mut md: Vec<String> = Vec::new();

    render_header(identity, &mut md);

    if let Some(summary) = cv.summary {
        md.push("## Professional Summary".to_string());
        let content = summary.content.trim();
        match options.wrap_width {
            Some(width) => md.push(wrap_text(content, width)),
            None => md.push(content.to_string()),
        }
        md.push(String::new());
    }

    if let Some(jobs) = &cv.jobs {
        md.push("## Work Experience".to_string());
        for entry in jobs {
            let job = entry.job;
            md.push(format!("### {} | {}", job.company, job.role));
            md.push(format!("_{}_ | {}\n", job.date_range, job.location));
            for text in &entry.responsibilities {
                md.push(format!("- {text}"));
            }
            md.push(String::new());
        }
    }

    if let Some(degrees) = &cv.degrees {
        md.push("## Education".to_string());
        for degree in degrees {
            md.push(format!("**{}**", degree.degree));
            md.push(format!("{} | {}", degree.institution, degree.year));
            md.push(String::new());
        }
    }

    if let Some(groups) = &cv.skills {
        md.push("## Skills".to_string());
        for group in groups {
            md.push(format!("**{}:**", group.label));
            for item in &group.items {
                md.push(format!("- {item}"));
            }
            md.push(String::new());
        }
    }

    if let Some(items) = &cv.interests {
        md.push("## Professional Interests".to_string());
        for item in items {
            md.push(format!("- {item}"));
        }
        md.push(String::new());
    }

    if let Some(items) = &cv.additional {
        md.push("## Additional Information".to_string());
        for item in items {
            md.push(format!("- {item}"));
        }
        md.push(String::new());
    }

    md.join("\n")
}

/// Render the identity header: name, title, contact line, rule.
///
/// The header is emitted unconditionally. Contact fields keep a fixed
/// order (address, phone, email, linkedin); absent or empty fields are
/// skipped without leaving stray separators.
fn render_header(identity: &Identity, md: &mut Vec<String>) {
    md.push(format!(
        "# {}",
        identity.name.as_deref().unwrap_or(DEFAULT_NAME)
    ));
    md.push(format!(
        "**{}**\n",
        identity.title.as_deref().unwrap_or_default()
    ));

    let mut contact: Vec<String> = Vec::new();
    if let Some(address) = non_empty(&identity.address) {
        contact.push(address.to_string());
    }
    if let Some(phone) = non_empty(&identity.phone) {
        contact.push(phone.to_string());
    }
    if let Some(email) = non_empty(&identity.email) {
        contact.push(format!("[{email}](mailto:{email})"));
    }
    if let Some(linkedin) = non_empty(&identity.linkedin) {
        let url = non_empty(&identity.linkedin_url).unwrap_or(DEFAULT_LINK_URL);
        contact.push(format!("[{linkedin}]({url})"));
    }

    md.push(contact.join(CONTACT_SEPARATOR));
    md.push("\n---".to_string());
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::select;
    use crate::types::MasterCv;
    use pretty_assertions::assert_eq;

    fn render(yaml: &str) -> String {
        let cv: MasterCv = serde_yaml_ng::from_str(yaml).unwrap();
        let selected = select(&cv);
        render_markdown(&cv.identity, &selected, &RenderOptions::default())
    }

    #[test]
    fn test_header_contact_email_only() {
        let output = render(
            "
identity:
  name: Jane Doe
  email: jane@x.com
",
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "# Jane Doe");
        assert_eq!(lines[3], "[jane@x.com](mailto:jane@x.com)");
        assert!(!output.contains(" | [jane@x.com]"));
    }

    #[test]
    fn test_header_contact_full() {
        let output = render(
            "
identity:
  name: Jane Doe
  title: Staff Engineer
  address: Singapore
  phone: '+65 9000 0000'
  email: jane@x.com
  linkedin: jane-doe
  linkedin_url: https://linkedin.com/in/jane-doe
",
        );
        assert!(output.contains(
            "Singapore | +65 9000 0000 | [jane@x.com](mailto:jane@x.com) | \
             [jane-doe](https://linkedin.com/in/jane-doe)"
        ));
        assert!(output.contains("**Staff Engineer**\n"));
    }

    #[test]
    fn test_header_linkedin_url_fallback() {
        let output = render(
            "
identity:
  name: Jane Doe
  linkedin: jane-doe
",
        );
        assert!(output.contains("[jane-doe](#)"));
    }

    #[test]
    fn test_header_missing_name_falls_back() {
        let output = render("{}");
        assert!(output.starts_with("# Name\n"));
    }

    #[test]
    fn test_header_rule_after_contact() {
        let output = render("identity:\n  name: Jane Doe\n");
        assert!(output.contains("\n\n---"));
    }

    #[test]
    fn test_unselected_summary_absent() {
        let output = render(
            "
summary:
  selected: false
  content: Hidden summary.
",
        );
        assert!(!output.contains("Professional Summary"));
        assert!(!output.contains("Hidden summary."));
    }

    #[test]
    fn test_summary_trimmed() {
        let output = render(
            "
summary:
  selected: true
  content: \"\\n  Experienced engineer.  \\n\"
",
        );
        assert!(output.contains("## Professional Summary\nExperienced engineer.\n"));
    }

    #[test]
    fn test_job_bullets_filtered() {
        let output = render(
            "
work_experience:
  selected: true
  jobs:
    - selected: true
      company: Initech
      role: Engineer
      location: Singapore
      date_range: 2020 - 2024
      responsibilities:
        - selected: true
          text: Led team
        - selected: false
          text: Hidden
",
        );
        assert!(output.contains("### Initech | Engineer"));
        assert!(output.contains("_2020 - 2024_ | Singapore\n"));
        assert!(output.contains("- Led team"));
        assert!(!output.contains("- Hidden"));
        assert_eq!(output.matches("\n- ").count(), 1);
    }

    #[test]
    fn test_education_block() {
        let output = render(
            "
education:
  selected: true
  degrees:
    - selected: true
      degree: BSc Computer Science
      institution: NUS
      year: '2016'
    - selected: false
      degree: Hidden Diploma
      institution: Elsewhere
      year: '2012'
",
        );
        assert!(output.contains("**BSc Computer Science**\nNUS | 2016"));
        assert!(!output.contains("Hidden Diploma"));
    }

    #[test]
    fn test_skill_category_label_and_bullet() {
        let output = render(
            "
skills:
  selected: true
  categories:
    soft_skills:
      selected: true
      items:
        - selected: true
          text: Teamwork
",
        );
        assert!(output.contains("## Skills\n**Soft Skills:**\n- Teamwork"));
    }

    #[test]
    fn test_interest_bullets() {
        let output = render(
            "
professional_interests:
  selected: true
  items:
    - selected: true
      text: Compilers
    - selected: true
      text: Distributed systems
",
        );
        assert!(output.contains(
            "## Professional Interests\n- Compilers\n- Distributed systems\n"
        ));
    }

    #[test]
    fn test_deterministic_output() {
        let yaml = "
identity:
  name: Jane Doe
summary:
  selected: true
  content: Engineer.
skills:
  selected: true
  categories:
    languages:
      selected: true
      items:
        - selected: true
          text: Rust
";
        assert_eq!(render(yaml), render(yaml));
    }

    #[test]
    fn test_wrap_option_reflows_summary() {
        let yaml = "
summary:
  selected: true
  content: This summary is long enough that a narrow wrap width will split it across lines.
";
        let cv: MasterCv = serde_yaml_ng::from_str(yaml).unwrap();
        let selected = select(&cv);

        let plain = render_markdown(&cv.identity, &selected, &RenderOptions::default());
        let wrapped = render_markdown(
            &cv.identity,
            &selected,
            &RenderOptions {
                wrap_width: Some(30),
            },
        );
        assert_ne!(plain, wrapped);
        assert!(wrapped.contains("This summary is long enough\n"));
    }
}
