//! Resume records edited by the admin panel.
//!
//! Records serialize with camelCase keys so exported JSON matches the
//! bundled data files under `assets/data/`.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Raw form input keyed by field key.
pub type FormValues = BTreeMap<String, String>;

/// Validation messages keyed by field key.
pub type FieldErrors = BTreeMap<String, String>;

// =============================================================================
// Field Schema
// =============================================================================

/// Input widget used for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text area
    LongText,
    /// Month picker (`YYYY-MM`)
    Month,
    /// Comma-separated list
    List,
}

/// Schema entry for one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Message shown when the field is left empty (None = optional)
    pub required: Option<&'static str>,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: None,
        }
    }

    const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn value_of(values: &FormValues, key: &str) -> String {
    values.get(key).cloned().unwrap_or_default()
}

// =============================================================================
// Records
// =============================================================================

/// Behaviour shared by every record type in [`ResumeData`].
pub trait SectionRecord: Clone + Serialize + DeserializeOwned {
    /// Editable fields, in display order.
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// Empty record with the given id.
    fn blank(id: String) -> Self;

    /// Field value as form text (lists joined with ", ").
    fn value(&self, key: &str) -> String;

    /// Build a record from already-validated form values.
    fn from_values(id: String, values: &FormValues) -> Self;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl SectionRecord for Experience {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("company", "Company", FieldKind::Text).required("Company is required"),
        FieldSpec::new("startDate", "Start Date", FieldKind::Month)
            .required("Start date is required"),
        FieldSpec::new("endDate", "End Date", FieldKind::Month),
        FieldSpec::new("description", "Description", FieldKind::LongText),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "company" => self.company.clone(),
            "startDate" => self.start_date.clone(),
            "endDate" => self.end_date.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn from_values(id: String, values: &FormValues) -> Self {
        Self {
            id,
            title: value_of(values, "title"),
            company: value_of(values, "company"),
            start_date: value_of(values, "startDate"),
            end_date: value_of(values, "endDate"),
            description: value_of(values, "description"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl SectionRecord for Project {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("description", "Description", FieldKind::LongText)
            .required("Description is required"),
        FieldSpec::new("technologies", "Technologies", FieldKind::List),
        FieldSpec::new("url", "Url", FieldKind::Text),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "technologies" => self.technologies.join(", "),
            "url" => self.url.clone(),
            _ => String::new(),
        }
    }

    fn from_values(id: String, values: &FormValues) -> Self {
        Self {
            id,
            title: value_of(values, "title"),
            description: value_of(values, "description"),
            technologies: split_list(&value_of(values, "technologies")),
            url: value_of(values, "url"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: String,
}

impl SectionRecord for Certification {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("issuer", "Issuer", FieldKind::Text).required("Issuer is required"),
        FieldSpec::new("date", "Date", FieldKind::Month).required("Date is required"),
        FieldSpec::new("credentialId", "Credential Id", FieldKind::Text),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    fn value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "issuer" => self.issuer.clone(),
            "date" => self.date.clone(),
            "credentialId" => self.credential_id.clone(),
            _ => String::new(),
        }
    }

    fn from_values(id: String, values: &FormValues) -> Self {
        Self {
            id,
            title: value_of(values, "title"),
            issuer: value_of(values, "issuer"),
            date: value_of(values, "date"),
            credential_id: value_of(values, "credentialId"),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Admin panel tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Experience,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Experience,
        Section::Projects,
        Section::Certifications,
    ];

    /// Tab label ("Experience").
    pub fn label(self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
        }
    }

    /// Lowercase singular noun used in headings ("Add New project").
    pub fn singular(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Projects => "project",
            Section::Certifications => "certification",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Section::Experience => Experience::FIELDS,
            Section::Projects => Project::FIELDS,
            Section::Certifications => Certification::FIELDS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full admin-editable dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(" Rust, Leptos ,,WASM "),
            vec!["Rust".to_string(), "Leptos".to_string(), "WASM".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let exp = Experience {
            id: "1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            description: String::new(),
        };
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["startDate"], "2020-01");
        assert!(json.get("start_date").is_none());

        let cert: Certification = serde_json::from_str(
            r#"{"id":"c","title":"AWS","issuer":"Amazon","date":"2021-03","credentialId":"X-1"}"#,
        )
        .unwrap();
        assert_eq!(cert.credential_id, "X-1");
    }

    #[test]
    fn test_optional_fields_default() {
        let project: Project =
            serde_json::from_str(r#"{"id":"p","title":"Site","description":"Mine"}"#).unwrap();
        assert!(project.technologies.is_empty());
        assert!(project.url.is_empty());

        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
    }

    #[test]
    fn test_list_field_round_trip_through_form() {
        let project = Project {
            id: "p".to_string(),
            title: "Site".to_string(),
            description: "Mine".to_string(),
            technologies: vec!["Rust".to_string(), "CSS".to_string()],
            url: String::new(),
        };
        assert_eq!(project.value("technologies"), "Rust, CSS");

        let values: FormValues = Project::FIELDS
            .iter()
            .map(|f| (f.key.to_string(), project.value(f.key)))
            .collect();
        assert_eq!(Project::from_values("p".to_string(), &values), project);
    }

    #[test]
    fn test_section_fields() {
        let required: Vec<_> = Section::Experience
            .fields()
            .iter()
            .filter_map(|f| f.required)
            .collect();
        assert_eq!(
            required,
            vec!["Title is required", "Company is required", "Start date is required"]
        );
        assert_eq!(Section::Projects.singular(), "project");
        assert_eq!(Section::Certifications.to_string(), "Certifications");
    }
}
