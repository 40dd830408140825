//! Storage policies for the entities' text fields
//!
//! Each nullable text field follows exactly one of these policies. They are
//! deliberately separate types: a field's policy is part of its contract and
//! two policies that look alike still differ on blank input.

use serde::Serialize;

use super::error::ValidationResult;
use super::guard::{normalize_or_absent, reject_null};

/// Blank or missing input is stored as absent; present text is kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct OptionalText(Option<String>);

impl OptionalText {
    pub(crate) fn assign(&mut self, text: Option<&str>) {
        self.0 = normalize_or_absent(text).map(str::to_owned);
    }

    pub(crate) fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Missing input is stored as `""`; anything else, blank included, is kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct CoalescedText(String);

impl CoalescedText {
    pub(crate) fn assign(&mut self, text: Option<&str>) {
        self.0 = text.unwrap_or_default().to_owned();
    }

    pub(crate) fn get(&self) -> &str {
        &self.0
    }
}

/// Missing or blank input is stored as `""`; present text is kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct CollapsedText(String);

impl CollapsedText {
    pub(crate) fn assign(&mut self, text: Option<&str>) {
        self.0 = normalize_or_absent(text).unwrap_or_default().to_owned();
    }

    pub(crate) fn get(&self) -> &str {
        &self.0
    }
}

/// Missing input is rejected; present text is trimmed. Starts out as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct RequiredText(String);

impl RequiredText {
    pub(crate) fn assign(&mut self, text: Option<&str>, field_name: &str) -> ValidationResult<()> {
        let text = reject_null(text, field_name)?;
        self.0 = text.trim().to_owned();
        Ok(())
    }

    pub(crate) fn get(&self) -> &str {
        &self.0
    }
}
