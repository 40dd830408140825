//! Speaker entity

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{ValidationError, ValidationResult};
use super::fields::{CollapsedText, OptionalText};
use super::guard::{is_valid_email, reject_blank, reject_non_positive, reject_null};

/// A presenter at an event, identified by `speaker_id`
#[derive(Debug, Clone, Serialize)]
pub struct Speaker {
    speaker_id: i32,
    full_name: String,
    email: String,
    biography: OptionalText,
    company: CollapsedText,
    linked_in_profile: CollapsedText,
}

impl Speaker {
    /// Create a speaker, validating id, name and email
    ///
    /// The email only has to be non-blank and contain `@`.
    pub fn new<'a>(
        speaker_id: i32,
        full_name: impl Into<Option<&'a str>>,
        email: impl Into<Option<&'a str>>,
    ) -> ValidationResult<Self> {
        let speaker_id = reject_non_positive(speaker_id, "speaker_id")?;
        let full_name = reject_blank(full_name.into(), "full_name", "FullName")?;

        let email = reject_null(email.into(), "email")?;
        if !is_valid_email(Some(email)) {
            return Err(ValidationError::invalid_argument(
                "email",
                "Email must contain '@' character.",
            ));
        }

        Ok(Self {
            speaker_id,
            full_name,
            email: email.trim().to_string(),
            biography: OptionalText::default(),
            company: CollapsedText::default(),
            linked_in_profile: CollapsedText::default(),
        })
    }

    pub fn speaker_id(&self) -> i32 {
        self.speaker_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.get()
    }

    /// Set the biography; blank or missing text clears it
    pub fn set_biography<'a>(&mut self, biography: impl Into<Option<&'a str>>) {
        self.biography.assign(biography.into());
    }

    pub fn company(&self) -> &str {
        self.company.get()
    }

    /// Set the company. Missing or blank input is stored as `""`, other text verbatim.
    pub fn set_company<'a>(&mut self, company: impl Into<Option<&'a str>>) {
        self.company.assign(company.into());
    }

    pub fn linked_in_profile(&self) -> &str {
        self.linked_in_profile.get()
    }

    /// Same storage rule as [`Speaker::set_company`]
    pub fn set_linked_in_profile<'a>(&mut self, profile: impl Into<Option<&'a str>>) {
        self.linked_in_profile.assign(profile.into());
    }
}

impl PartialEq for Speaker {
    fn eq(&self, other: &Self) -> bool {
        self.speaker_id == other.speaker_id
    }
}

impl Eq for Speaker {}

impl Hash for Speaker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.speaker_id.hash(state);
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speaker [Id: {}, Name: {}, Email: {}]",
            self.speaker_id, self.full_name, self.email
        )
    }
}
