//! Event Registry demonstration
//!
//! Builds sample speakers, venues and events, printing each entity's
//! summary and every rejected input.
//!
//! Run with: cargo run

use chrono::{Duration, Utc};
use serde::Serialize;

use event_registry::config::OutputMode;
use event_registry::{log_error, logging, Config, Event, Result, Speaker, ValidationResult, Venue};

fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Validate configuration
    config.validate()?;

    // Initialize logging/tracing
    logging::init_tracing(&config.logging.log_level, &config.logging.environment)?;

    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting event registry demo");

    let demo = Demo {
        lead: config.demo.lead_time()?,
        output: config.demo.output_mode()?,
    };

    println!("=== Event Management Demo ===\n");

    demo.speakers()?;
    println!();

    demo.venues()?;
    println!();

    demo.events()?;
    println!();

    demo.complete_scenario()?;

    println!("\n=== Demo complete ===");
    Ok(())
}

struct Demo {
    lead: Duration,
    output: OutputMode,
}

impl Demo {
    fn snapshot<T: Serialize>(&self, entity: &T) -> Result<()> {
        if self.output == OutputMode::Json {
            println!("{}", serde_json::to_string_pretty(entity)?);
        }
        Ok(())
    }

    fn report<T>(&self, label: &str, result: ValidationResult<T>) {
        match result {
            Ok(_) => println!("   Unexpected success: {}", label),
            Err(e) => {
                log_error!(e, "Input rejected", case = label);
                println!("   {}: {}", label, e);
            },
        }
    }

    fn speakers(&self) -> Result<()> {
        println!("Section 1: Speakers");
        println!("-------------------");

        println!("1. Valid speakers:");
        let mut first = Speaker::new(1, "John Silva", "john.silva@email.com")?;
        first.set_biography("Systems programmer with 10 years of experience");
        first.set_company("Microsoft");
        first.set_linked_in_profile("https://linkedin.com/in/johnsilva");
        println!("   {}", first);
        self.snapshot(&first)?;

        let mut second = Speaker::new(2, "Mary Santos", "mary.santos@tech.com")?;
        second.set_biography("Software architect and DevOps consultant");
        println!("   {}", second);

        println!("\n2. Invalid speakers:");
        self.report("Speaker id 0", Speaker::new(0, "Valid Name", "email@valid.com"));
        self.report("Blank name", Speaker::new(3, "   ", "email@valid.com"));
        self.report("Invalid email", Speaker::new(4, "Valid Name", "invalid-email"));

        println!("\n3. Biography normalization:");
        let mut third = Speaker::new(5, "Carl Oliver", "carl@email.com")?;
        third.set_biography("   Biography with spaces   ");
        println!("   Biography with spaces: {:?}", third.biography());
        third.set_biography(None);
        println!("   Biography set to None: {:?}", third.biography());
        third.set_biography("");
        println!("   Empty biography: {:?}", third.biography());

        println!("\n4. Company and LinkedIn profile never missing:");
        let mut fourth = Speaker::new(6, "Ann Costa", "ann@email.com")?;
        fourth.set_company(None);
        fourth.set_linked_in_profile(None);
        println!("   Company set to None: '{}'", fourth.company());
        println!("   LinkedIn set to None: '{}'", fourth.linked_in_profile());

        Ok(())
    }

    fn venues(&self) -> Result<()> {
        println!("Section 2: Venues");
        println!("-----------------");

        println!("1. Valid venues:");
        let mut first = Venue::new(1, "Convention Center", "Main Avenue, 1000", 500)?;
        first.set_description("Modern center with complete infrastructure");
        first.set_parking_info("Underground parking with 200 spots");
        println!("   {}", first);
        println!("      Description: {}", first.description().unwrap_or_default());
        println!("      Parking: {}", first.parking_info());
        self.snapshot(&first)?;

        let second = Venue::new(2, "Premium Hotel", "Second Street, 500", 200)?;
        println!("   {}", second);

        println!("\n2. Default venue:");
        println!("   {}", Venue::default_venue());

        println!("\n3. Description normalization:");
        let mut third = Venue::new(3, "Central Auditorium", "Central Square, 50", 150)?;
        third.set_description("   Description with spaces   ");
        println!("   Description with spaces: {:?}", third.description());
        third.set_description(None);
        println!("   Description set to None: {:?}", third.description());

        println!("\n4. Parking info never missing:");
        let mut fourth = Venue::new(4, "Meeting Room", "Flower Lane, 200", 50)?;
        fourth.set_parking_info(None);
        println!("   Parking info set to None: '{}'", fourth.parking_info());

        Ok(())
    }

    fn events(&self) -> Result<()> {
        println!("Section 3: Events");
        println!("-----------------");

        let start = Utc::now() + self.lead;

        println!("1. Valid events:");
        let mut first = Event::new(1, "Rust Conference", start, Duration::hours(8))?;
        first.set_event_code("RUST2025")?;
        first.set_description("The largest Rust conference in the region");
        println!("   {}", first);
        println!("      Code: {}", first.event_code());
        println!("      Description: {}", first.description().unwrap_or_default());

        let second = Event::new(
            2,
            "DevOps Workshop",
            start + Duration::days(7),
            Duration::hours(4),
        )?;
        println!("   {}", second);

        println!("\n2. Invalid events:");
        self.report(
            "Past date",
            Event::new(3, "Too Late", Utc::now() - Duration::days(1), Duration::hours(1)),
        );
        self.report(
            "Short duration",
            Event::new(3, "Too Short", start, Duration::minutes(29)),
        );

        println!("\n3. Lazy venue resolution:");
        let third = Event::new(3, "Cloud Computing Meetup", start, Duration::hours(3))?;
        println!("   Resolved before first read: {}", third.is_venue_resolved());
        println!("   Venue on first read: {}", third.venue());

        println!("\n4. Event code rejects None:");
        let mut fourth = Event::new(
            4,
            "AI Seminar",
            start + Duration::days(14),
            Duration::hours(6),
        )?;
        fourth.set_event_code("AI2025")?;
        println!("   Event code set: {}", fourth.event_code());
        self.report("Event code None", fourth.set_event_code(None));

        println!("\n5. Requirements and notes never missing:");
        let mut fifth = Event::new(
            5,
            "Hackathon",
            start + Duration::days(30),
            Duration::hours(24),
        )?;
        fifth.set_requirements(None);
        fifth.set_notes("   Notes with spaces   ");
        println!("   Requirements set to None: '{}'", fifth.requirements());
        println!("   Notes with spaces: '{}'", fifth.notes());

        Ok(())
    }

    fn complete_scenario(&self) -> Result<()> {
        println!("Section 4: Complete scenario");
        println!("----------------------------");

        let start = Utc::now() + self.lead + Duration::days(60);

        let mut speaker = Speaker::new(10, "Dr. Sofia Fernandes", "sofia.fernandes@tech.com")?;
        speaker.set_biography("PhD in Computer Science with 15 years of experience");
        speaker.set_company("Tech Research Institute");

        let panelist = Speaker::new(11, "Paul Mendes", "paul@tech.com")?;

        let mut event = Event::new(10, "Innovation Conference", start, Duration::hours(6))?;
        event.set_event_code("INNOV2025")?;
        event.set_description("Annual event on the latest technology trends");
        event.assign_main_speaker(speaker)?;
        event.add_speaker(panelist.clone())?;
        self.report("Duplicate panelist", event.add_speaker(panelist.clone()));
        event.set_requirements("Basic programming knowledge");
        event.set_notes("Bring a laptop for the workshops");

        println!("Event details:");
        println!("   {}", event);
        println!("   Venue: {}", event.venue());
        println!(
            "   Main speaker: {}",
            event.main_speaker().map(Speaker::full_name).unwrap_or("To be announced")
        );
        for additional in event.additional_speakers() {
            println!("   Additional speaker: {}", additional);
        }
        println!("   Requirements: {}", event.requirements());
        println!("   Notes: {}", event.notes());
        self.snapshot(&event)?;

        let overlapping = Event::new(
            11,
            "Afternoon Session",
            start + Duration::hours(3),
            Duration::hours(2),
        )?;
        let following = Event::new(12, "Evening Session", event.end(), Duration::hours(2))?;
        println!("\nSchedule conflicts at {}:", event.venue().name());
        println!(
            "   With '{}': {}",
            overlapping.title(),
            event.has_schedule_conflict_with(&overlapping)?
        );
        println!(
            "   With '{}': {}",
            following.title(),
            event.has_schedule_conflict_with(&following)?
        );

        println!("\nRemoved panelist: {}", event.remove_speaker(&panelist)?);
        println!("Removed again: {}", event.remove_speaker(&panelist)?);

        Ok(())
    }
}
