//! Resume admin editor state.
//!
//! Holds the editable [`ResumeData`] plus which section tab is active and
//! which record (if any) is open in the form. Persistence lives in
//! `utils::storage`; this module never touches the browser.

use crate::config::default_data;
use crate::core::error::StorageError;
use crate::models::{
    Certification, Experience, FieldErrors, FieldKind, FieldSpec, FormValues, Project, ResumeData,
    Section, SectionRecord,
};

/// Record currently open in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub section: Section,
    pub index: usize,
    /// Set for records created by [`AdminEditor::add_item`]
    pub is_new: bool,
}

/// Card contents for one record in the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: String,
    pub title: String,
    /// (label, display value) for every field except the title
    pub fields: Vec<SummaryField>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
    /// Spans the full card width (long text)
    pub wide: bool,
}

/// Shown for empty optional values.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Parse the bundled default dataset.
pub fn bundled_data() -> Result<ResumeData, StorageError> {
    let parse = |e: serde_json::Error| StorageError::Parse(e.to_string());
    Ok(ResumeData {
        experience: serde_json::from_str(default_data::EXPERIENCE).map_err(parse)?,
        projects: serde_json::from_str(default_data::PROJECTS).map_err(parse)?,
        certifications: serde_json::from_str(default_data::CERTIFICATIONS).map_err(parse)?,
    })
}

/// Check required fields, returning one message per blank field.
pub fn validate(fields: &[FieldSpec], values: &FormValues) -> Result<(), FieldErrors> {
    let errors: FieldErrors = fields
        .iter()
        .filter_map(|field| {
            let message = field.required?;
            let blank = values.get(field.key).is_none_or(|v| v.trim().is_empty());
            blank.then(|| (field.key.to_string(), message.to_string()))
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn summarize<R: SectionRecord>(section: Section, records: &[R]) -> Vec<RecordSummary> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let title = if record.title().is_empty() {
                format!("{} #{}", section.singular(), i + 1)
            } else {
                record.title().to_string()
            };
            let fields = R::FIELDS
                .iter()
                .filter(|field| field.key != "title")
                .map(|field| {
                    let value = record.value(field.key);
                    SummaryField {
                        label: field.label,
                        value: if value.is_empty() {
                            NOT_SPECIFIED.to_string()
                        } else {
                            value
                        },
                        wide: field.kind == FieldKind::LongText,
                    }
                })
                .collect();
            RecordSummary {
                id: record.id().to_string(),
                title,
                fields,
            }
        })
        .collect()
}

fn form_values_of<R: SectionRecord>(record: &R) -> FormValues {
    R::FIELDS
        .iter()
        .map(|field| (field.key.to_string(), record.value(field.key)))
        .collect()
}

fn replace<R: SectionRecord>(records: &mut [R], index: usize, values: &FormValues) {
    if let Some(slot) = records.get_mut(index) {
        let id = slot.id().to_string();
        *slot = R::from_values(id, values);
    }
}

/// Admin panel state over one [`ResumeData`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminEditor {
    data: ResumeData,
    active: Section,
    editing: Option<EditTarget>,
}

impl AdminEditor {
    pub fn new(data: ResumeData) -> Self {
        Self {
            data,
            active: Section::default(),
            editing: None,
        }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn editing(&self) -> Option<EditTarget> {
        self.editing
    }

    /// Edit target if it belongs to the active tab.
    pub fn editing_active(&self) -> Option<EditTarget> {
        self.editing.filter(|target| target.section == self.active)
    }

    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.data.experience.len(),
            Section::Projects => self.data.projects.len(),
            Section::Certifications => self.data.certifications.len(),
        }
    }

    /// Switch tabs. Any open form is closed.
    pub fn set_section(&mut self, section: Section) {
        self.editing = None;
        self.active = section;
    }

    /// Append a blank record to the active section and open it in the form.
    pub fn add_item(&mut self, id: String) {
        let index = self.len(self.active);
        match self.active {
            Section::Experience => self.data.experience.push(Experience::blank(id)),
            Section::Projects => self.data.projects.push(Project::blank(id)),
            Section::Certifications => self.data.certifications.push(Certification::blank(id)),
        }
        self.editing = Some(EditTarget {
            section: self.active,
            index,
            is_new: true,
        });
    }

    /// Remove a record from the active section.
    ///
    /// Closes the form if it was editing that record; an edit target further
    /// down the list moves up one slot. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.len(self.active) {
            return;
        }
        match self.active {
            Section::Experience => {
                self.data.experience.remove(index);
            }
            Section::Projects => {
                self.data.projects.remove(index);
            }
            Section::Certifications => {
                self.data.certifications.remove(index);
            }
        }

        if let Some(target) = self.editing
            && target.section == self.active
        {
            self.editing = match target.index {
                i if i == index => None,
                i if i > index => Some(EditTarget { index: i - 1, ..target }),
                _ => Some(target),
            };
        }
    }

    /// Open an existing record in the form, switching to its tab.
    pub fn start_editing(&mut self, section: Section, index: usize) {
        if index >= self.len(section) {
            return;
        }
        self.active = section;
        self.editing = Some(EditTarget {
            section,
            index,
            is_new: false,
        });
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Form heading, e.g. "Add New project" or "Edit certification".
    pub fn form_heading(&self) -> Option<String> {
        self.editing_active().map(|target| {
            let verb = if target.is_new { "Add New" } else { "Edit" };
            format!("{} {}", verb, target.section.singular())
        })
    }

    /// Initial form values for the record being edited.
    pub fn form_values(&self) -> Option<FormValues> {
        let target = self.editing?;
        match target.section {
            Section::Experience => self.data.experience.get(target.index).map(form_values_of),
            Section::Projects => self.data.projects.get(target.index).map(form_values_of),
            Section::Certifications => {
                self.data.certifications.get(target.index).map(form_values_of)
            }
        }
    }

    /// Validate and store the form values into the record being edited.
    ///
    /// On success the form closes. On failure nothing changes and the field
    /// errors are returned. Submitting with no open form is a no-op.
    pub fn submit(&mut self, values: &FormValues) -> Result<(), FieldErrors> {
        let Some(target) = self.editing else {
            return Ok(());
        };
        validate(target.section.fields(), values)?;

        match target.section {
            Section::Experience => replace(&mut self.data.experience, target.index, values),
            Section::Projects => replace(&mut self.data.projects, target.index, values),
            Section::Certifications => {
                replace(&mut self.data.certifications, target.index, values)
            }
        }
        self.editing = None;
        Ok(())
    }

    /// Cards for the active section.
    pub fn summaries(&self) -> Vec<RecordSummary> {
        match self.active {
            Section::Experience => summarize(self.active, &self.data.experience),
            Section::Projects => summarize(self.active, &self.data.projects),
            Section::Certifications => summarize(self.active, &self.data.certifications),
        }
    }
}
