use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Education levels accepted by the recommendation service, lowest first.
pub const EDUCATION_LEVELS: [&str; 5] = ["High School", "Associate", "Bachelor", "Master", "PhD"];

/// Named inputs of the profile form.
///
/// The service reads these keys from the submitted object; the client never
/// interprets their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Age,
    Country,
    EducationLevel,
    Gpa,
    FieldOfStudy,
    Income,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Country,
        ProfileField::EducationLevel,
        ProfileField::Gpa,
        ProfileField::FieldOfStudy,
        ProfileField::Income,
    ];

    /// Form input name, which is also the JSON key.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Age => "age",
            ProfileField::Country => "country",
            ProfileField::EducationLevel => "education_level",
            ProfileField::Gpa => "gpa",
            ProfileField::FieldOfStudy => "field_of_study",
            ProfileField::Income => "income",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Age => "Age",
            ProfileField::Country => "Country",
            ProfileField::EducationLevel => "Education Level",
            ProfileField::Gpa => "GPA",
            ProfileField::FieldOfStudy => "Field of Study",
            ProfileField::Income => "Annual Household Income (USD)",
        }
    }
}

/// Flat field-name to field-value mapping captured from one form submission.
///
/// Serializes as a plain JSON object. Values stay strings; a repeated key keeps
/// the last value written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileSubmission(BTreeMap<String, String>);

impl ProfileSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ProfileSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (key, value) in iter {
            submission.insert(key, value);
        }
        submission
    }
}
