//! Event entity
//!
//! An event owns its code, an optional main speaker and an ordered set of
//! additional speakers. Its venue is resolved lazily: until something reads
//! it, no venue is held, and the first read settles on the shared default
//! venue for the rest of the event's lifetime.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::error::{ValidationError, ValidationResult};
use super::fields::{CoalescedText, OptionalText, RequiredText};
use super::guard::{
    reject_blank, reject_non_positive, reject_null, reject_past_or_present, reject_shorter_than,
};
use super::speaker::Speaker;
use super::venue::Venue;

/// Shortest duration an event may have, in minutes
pub const MIN_DURATION_MINUTES: i64 = 30;

/// A scheduled event
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    event_id: i32,
    title: String,
    event_date: DateTime<Utc>,
    #[serde(rename = "duration_minutes", serialize_with = "serialize_minutes")]
    duration: Duration,
    event_code: RequiredText,
    #[serde(serialize_with = "serialize_resolved_venue")]
    venue: OnceLock<Arc<Venue>>,
    main_speaker: Option<Speaker>,
    description: OptionalText,
    requirements: CoalescedText,
    notes: CoalescedText,
    additional_speakers: Vec<Speaker>,
}

impl Event {
    /// Create an event
    ///
    /// The title is trimmed, the date must lie strictly in the future and the
    /// duration must be at least [`MIN_DURATION_MINUTES`]. The end of the
    /// event must be a representable timestamp.
    pub fn new<'a>(
        event_id: i32,
        title: impl Into<Option<&'a str>>,
        event_date: DateTime<Utc>,
        duration: Duration,
    ) -> ValidationResult<Self> {
        let event_id = reject_non_positive(event_id, "event_id")?;
        let title = reject_blank(title.into(), "title", "Title")?;
        let event_date = reject_past_or_present(event_date, "event_date")?;
        let duration = reject_shorter_than(
            duration,
            Duration::minutes(MIN_DURATION_MINUTES),
            "duration",
        )?;
        if event_date.checked_add_signed(duration).is_none() {
            return Err(ValidationError::invalid_argument(
                "duration",
                "Event end is out of range",
            ));
        }

        Ok(Self {
            event_id,
            title,
            event_date,
            duration,
            event_code: RequiredText::default(),
            venue: OnceLock::new(),
            main_speaker: None,
            description: OptionalText::default(),
            requirements: CoalescedText::default(),
            notes: CoalescedText::default(),
            additional_speakers: Vec::new(),
        })
    }

    pub fn event_id(&self) -> i32 {
        self.event_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn event_date(&self) -> DateTime<Utc> {
        self.event_date
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the event finishes (exclusive)
    ///
    /// Cannot overflow: [`Event::new`] rejects events whose end is out of range.
    pub fn end(&self) -> DateTime<Utc> {
        self.event_date + self.duration
    }

    /// The event code, `""` until one is set
    pub fn event_code(&self) -> &str {
        self.event_code.get()
    }

    /// Set the event code (trimmed). A missing code is rejected.
    pub fn set_event_code<'a>(&mut self, code: impl Into<Option<&'a str>>) -> ValidationResult<()> {
        self.event_code.assign(code.into(), "code")
    }

    pub fn description(&self) -> Option<&str> {
        self.description.get()
    }

    /// Set the description; blank or missing text clears it
    pub fn set_description<'a>(&mut self, description: impl Into<Option<&'a str>>) {
        self.description.assign(description.into());
    }

    pub fn requirements(&self) -> &str {
        self.requirements.get()
    }

    /// `None` is stored as `""`; blank text is kept verbatim
    pub fn set_requirements<'a>(&mut self, requirements: impl Into<Option<&'a str>>) {
        self.requirements.assign(requirements.into());
    }

    pub fn notes(&self) -> &str {
        self.notes.get()
    }

    /// Same storage rule as [`Event::set_requirements`]
    pub fn set_notes<'a>(&mut self, notes: impl Into<Option<&'a str>>) {
        self.notes.assign(notes.into());
    }

    /// The venue, resolving to [`Venue::default_venue`] on first read
    ///
    /// Once resolved the same instance is returned on every later read.
    pub fn venue(&self) -> &Arc<Venue> {
        self.venue.get_or_init(|| {
            tracing::debug!(event_id = self.event_id, "Venue resolved to default");
            Venue::default_venue()
        })
    }

    /// Whether the venue has been resolved or placed yet
    pub fn is_venue_resolved(&self) -> bool {
        self.venue.get().is_some()
    }

    #[cfg(test)]
    pub(crate) fn assign_venue(&mut self, venue: Arc<Venue>) {
        self.venue = OnceLock::from(venue);
    }

    pub fn main_speaker(&self) -> Option<&Speaker> {
        self.main_speaker.as_ref()
    }

    /// Assign the main speaker, replacing any previous one
    pub fn assign_main_speaker(
        &mut self,
        speaker: impl Into<Option<Speaker>>,
    ) -> ValidationResult<()> {
        let speaker = reject_null(speaker.into(), "speaker")?;
        tracing::debug!(
            event_id = self.event_id,
            speaker_id = speaker.speaker_id(),
            "Main speaker assigned"
        );
        self.main_speaker = Some(speaker);
        Ok(())
    }

    /// Read-only view of the additional speakers, in insertion order
    pub fn additional_speakers(&self) -> &[Speaker] {
        &self.additional_speakers
    }

    /// Append a speaker; fails with `DuplicateEntry` if one with the same id is present
    pub fn add_speaker(&mut self, speaker: impl Into<Option<Speaker>>) -> ValidationResult<()> {
        let speaker = reject_null(speaker.into(), "speaker")?;
        if self.additional_speakers.contains(&speaker) {
            return Err(ValidationError::duplicate_entry(
                "speaker",
                "Speaker already added to this event.",
            ));
        }

        tracing::debug!(
            event_id = self.event_id,
            speaker_id = speaker.speaker_id(),
            "Speaker added"
        );
        self.additional_speakers.push(speaker);
        Ok(())
    }

    /// Remove a speaker by id. Returns whether one was removed.
    pub fn remove_speaker<'a>(
        &mut self,
        speaker: impl Into<Option<&'a Speaker>>,
    ) -> ValidationResult<bool> {
        let speaker = reject_null(speaker.into(), "speaker")?;
        match self.additional_speakers.iter().position(|s| s == speaker) {
            Some(index) => {
                self.additional_speakers.remove(index);
                tracing::debug!(
                    event_id = self.event_id,
                    speaker_id = speaker.speaker_id(),
                    "Speaker removed"
                );
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Whether both events share a venue and their time ranges overlap
    ///
    /// Ranges are half-open, so an event ending exactly when the other starts
    /// is not a conflict. Resolves the venue of both events.
    pub fn has_schedule_conflict_with<'a>(
        &self,
        other: impl Into<Option<&'a Event>>,
    ) -> ValidationResult<bool> {
        let other = reject_null(other.into(), "other_event")?;

        Ok(self.venue() == other.venue()
            && self.event_date < other.end()
            && other.event_date < self.end())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event [Id: {}, Title: {}, Date: {}, Code: {}]",
            self.event_id,
            self.title,
            self.event_date.format("%d/%m/%Y"),
            self.event_code.get()
        )
    }
}

fn serialize_minutes<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_minutes())
}

// Serialization must not trigger lazy resolution
fn serialize_resolved_venue<S: Serializer>(
    venue: &OnceLock<Arc<Venue>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    venue.get().map(|v| &**v).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::error::ValidationErrorKind;

    fn future_date() -> DateTime<Utc> {
        Utc::now() + Duration::days(30)
    }

    fn tech_conference() -> Event {
        Event::new(1, "Tech Conference", future_date(), Duration::hours(2)).unwrap()
    }

    fn speaker(id: i32) -> Speaker {
        Speaker::new(id, "John Doe", "john@email.com").unwrap()
    }

    #[test]
    fn test_new_with_valid_data() {
        let date = future_date();
        let event = Event::new(1, "  Tech Conference ", date, Duration::hours(2)).unwrap();

        assert_eq!(event.event_id(), 1);
        assert_eq!(event.title(), "Tech Conference");
        assert_eq!(event.event_date(), date);
        assert_eq!(event.duration(), Duration::hours(2));
        assert_eq!(event.end(), date + Duration::hours(2));
        assert!(event.main_speaker().is_none());
        assert!(event.additional_speakers().is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_id() {
        for id in [0, -1] {
            let err = Event::new(id, "Tech Conference", future_date(), Duration::hours(2))
                .unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
        }
    }

    #[test]
    fn test_new_rejects_invalid_title() {
        let err = Event::new(1, None, future_date(), Duration::hours(2)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);

        for blank in ["", "   "] {
            let err = Event::new(1, blank, future_date(), Duration::hours(2)).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidArgument);
            assert_eq!(err.field, "title");
        }
    }

    #[test]
    fn test_new_rejects_past_date() {
        let past = Utc::now() - Duration::days(1);
        let err = Event::new(1, "Tech Conference", past, Duration::hours(2)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidArgument);
        assert_eq!(err.field, "event_date");
    }

    #[test]
    fn test_new_rejects_short_duration() {
        let err = Event::new(1, "Tech Conference", future_date(), Duration::minutes(29))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidArgument);
        assert_eq!(err.field, "duration");

        assert!(Event::new(1, "Tech Conference", future_date(), Duration::minutes(30)).is_ok());
    }

    #[test]
    fn test_new_rejects_unrepresentable_end() {
        let err = Event::new(1, "Long", future_date(), Duration::MAX).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidArgument);
        assert_eq!(err.field, "duration");
        assert_eq!(err.context.as_deref(), Some("Event end is out of range"));
    }

    #[test]
    fn test_schedule_conflict_with_longest_accepted_event() {
        let start = future_date();
        let longest = DateTime::<Utc>::MAX_UTC - start;
        let a = Event::new(1, "Long", start, longest).unwrap();
        let b = Event::new(2, "Later", start + Duration::days(1), Duration::hours(1)).unwrap();

        assert_eq!(a.end(), DateTime::<Utc>::MAX_UTC);
        assert!(a.has_schedule_conflict_with(&b).unwrap());
        assert!(b.has_schedule_conflict_with(&a).unwrap());
    }

    #[test]
    fn test_event_code() {
        let mut event = tech_conference();
        assert_eq!(event.event_code(), "");

        event.set_event_code("  TECH2025  ").unwrap();
        assert_eq!(event.event_code(), "TECH2025");

        let err = event.set_event_code(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);
        assert_eq!(event.event_code(), "TECH2025");
    }

    #[test]
    fn test_set_description() {
        let mut event = tech_conference();

        event.set_description("Annual technology conference for developers");
        assert_eq!(
            event.description(),
            Some("Annual technology conference for developers")
        );

        for invalid in [None, Some(""), Some("   ")] {
            event.set_description(invalid);
            assert_eq!(event.description(), None);
        }
    }

    #[test]
    fn test_requirements_and_notes_never_missing() {
        let mut event = tech_conference();
        assert_eq!(event.requirements(), "");
        assert_eq!(event.notes(), "");

        event.set_requirements(None);
        event.set_notes(None);
        assert_eq!(event.requirements(), "");
        assert_eq!(event.notes(), "");

        event.set_requirements("   ");
        event.set_notes("   Notes with spaces   ");
        assert_eq!(event.requirements(), "   ");
        assert_eq!(event.notes(), "   Notes with spaces   ");
    }

    #[test]
    fn test_venue_resolves_lazily_to_default() {
        let event = tech_conference();
        assert!(!event.is_venue_resolved());

        let first = event.venue().clone();
        assert!(event.is_venue_resolved());
        assert!(Arc::ptr_eq(&first, &Venue::default_venue()));
        assert!(Arc::ptr_eq(&first, event.venue()));
        assert_eq!(first.name(), "Online Event");
        assert_eq!(first.address(), "Virtual");
    }

    #[test]
    fn test_assigned_venue_is_not_replaced() {
        let mut event = tech_conference();
        let hall = Arc::new(Venue::new(10, "Innovation Center", "Tech St, 500", 300).unwrap());
        event.assign_venue(hall.clone());

        assert!(Arc::ptr_eq(event.venue(), &hall));
        assert!(Arc::ptr_eq(event.venue(), &hall));
    }

    #[test]
    fn test_assign_main_speaker() {
        let mut event = tech_conference();

        event.assign_main_speaker(speaker(1)).unwrap();
        assert_eq!(event.main_speaker(), Some(&speaker(1)));

        // Last write wins, even for a speaker also listed as additional
        event.add_speaker(speaker(2)).unwrap();
        event.assign_main_speaker(speaker(2)).unwrap();
        assert_eq!(event.main_speaker().map(Speaker::speaker_id), Some(2));

        let err = event.assign_main_speaker(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);
        assert_eq!(event.main_speaker().map(Speaker::speaker_id), Some(2));
    }

    #[test]
    fn test_add_speaker_preserves_order_and_rejects_duplicates() {
        let mut event = tech_conference();
        event.add_speaker(speaker(3)).unwrap();
        event.add_speaker(speaker(1)).unwrap();
        event.add_speaker(speaker(2)).unwrap();

        let ids: Vec<i32> = event.additional_speakers().iter().map(Speaker::speaker_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let same_id = Speaker::new(1, "Someone Else", "else@email.com").unwrap();
        let err = event.add_speaker(same_id).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateEntry);
        assert_eq!(event.additional_speakers().len(), 3);

        let err = event.add_speaker(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);
    }

    #[test]
    fn test_remove_speaker() {
        let mut event = tech_conference();
        event.add_speaker(speaker(1)).unwrap();
        event.add_speaker(speaker(2)).unwrap();

        assert!(event.remove_speaker(&speaker(1)).unwrap());
        assert!(!event.remove_speaker(&speaker(1)).unwrap());
        assert!(!event.remove_speaker(&speaker(9)).unwrap());

        let ids: Vec<i32> = event.additional_speakers().iter().map(Speaker::speaker_id).collect();
        assert_eq!(ids, vec![2]);

        // A removed speaker can be added back
        event.add_speaker(speaker(1)).unwrap();

        let err = event.remove_speaker(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);
    }

    #[test]
    fn test_schedule_conflict_overlapping() {
        let start = future_date();
        let a = Event::new(1, "Morning", start, Duration::hours(2)).unwrap();
        let b = Event::new(2, "Overlap", start + Duration::hours(1), Duration::hours(2)).unwrap();

        assert!(!a.is_venue_resolved());
        assert!(a.has_schedule_conflict_with(&b).unwrap());
        assert!(b.has_schedule_conflict_with(&a).unwrap());
        assert!(a.is_venue_resolved());
        assert!(b.is_venue_resolved());
    }

    #[test]
    fn test_schedule_conflict_touching_is_not_overlap() {
        let start = future_date();
        let a = Event::new(1, "First", start, Duration::hours(1)).unwrap();
        let b = Event::new(2, "Second", start + Duration::hours(1), Duration::hours(1)).unwrap();

        assert!(!a.has_schedule_conflict_with(&b).unwrap());
        assert!(!b.has_schedule_conflict_with(&a).unwrap());
    }

    #[test]
    fn test_schedule_conflict_requires_same_venue() {
        let start = future_date();
        let a = Event::new(1, "Morning", start, Duration::hours(2)).unwrap();
        let mut b = Event::new(2, "Elsewhere", start, Duration::hours(2)).unwrap();
        b.assign_venue(Arc::new(Venue::new(2, "Premium Hotel", "Second St", 200).unwrap()));

        assert!(!a.has_schedule_conflict_with(&b).unwrap());

        // Same id as the default venue counts as the same place
        let mut c = Event::new(3, "Also online", start, Duration::hours(2)).unwrap();
        c.assign_venue(Arc::new(Venue::new(1, "Other name", "Other address", 5).unwrap()));
        assert!(a.has_schedule_conflict_with(&c).unwrap());

        let err = a.has_schedule_conflict_with(None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NullArgument);
    }

    #[test]
    fn test_display() {
        let date = future_date();
        let mut event = Event::new(1, "Tech Conference", date, Duration::hours(2)).unwrap();
        event.set_event_code("TECH2025").unwrap();

        assert_eq!(
            event.to_string(),
            format!(
                "Event [Id: 1, Title: Tech Conference, Date: {}, Code: TECH2025]",
                date.format("%d/%m/%Y")
            )
        );
    }

    #[test]
    fn test_serialization_does_not_resolve_venue() {
        let event = tech_conference();

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["venue"].is_null());
        assert_eq!(json["duration_minutes"], 120);
        assert_eq!(json["event_code"], "");
        assert!(!event.is_venue_resolved());

        let _ = event.venue();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["venue"]["name"], "Online Event");
    }
}
