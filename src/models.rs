//! Frontend Models
//!
//! Data structures exchanged with the patients endpoint.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder shown while the list is loading
pub const LOADING_TEXT: &str = "Loading...";
/// Shown in place of the list when loading fails
pub const LOAD_ERROR_TEXT: &str = "Error loading patients";
/// Alert text when a new patient cannot be created
pub const SUBMIT_FAILURE_TEXT: &str = "Failed to add patient";

/// Patient record as returned by `GET /patients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub dob: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Patient {
    /// Text of one list line: `"<name> — <dob>"`, with `" - <notes>"` appended
    /// when notes are present and non-empty.
    pub fn display_line(&self) -> String {
        match self.notes.as_deref() {
            Some(notes) if !notes.is_empty() => {
                format!("{} — {} - {}", self.name, self.dob, notes)
            }
            _ => format!("{} — {}", self.name, self.dob),
        }
    }
}

/// Form fields sent as the body of `POST /patients`.
///
/// Keys keep the order in which they first appeared in the form. A repeated
/// field name overwrites the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPatientPayload {
    fields: Vec<(String, String)>,
}

impl NewPatientPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value of an existing key
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NewPatientPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

impl Serialize for NewPatientPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// What the `#patients` element currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListDisplay {
    #[default]
    Loading,
    Loaded(Vec<Patient>),
    Failed,
}

impl ListDisplay {
    /// Rendered line items; empty for the loading and error states
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListDisplay::Loaded(patients) => patients.iter().map(Patient::display_line).collect(),
            ListDisplay::Loading | ListDisplay::Failed => Vec::new(),
        }
    }

    /// Static text shown instead of line items, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListDisplay::Loading => Some(LOADING_TEXT),
            ListDisplay::Failed => Some(LOAD_ERROR_TEXT),
            ListDisplay::Loaded(_) => None,
        }
    }
}
