//! # Seed Activities
//!
//! The fixed set of activities every process starts with. Rosters mutate at
//! runtime but nothing here is written back, so a restart always returns to
//! this list.
use indexmap::IndexMap;

use crate::registry::Activity;

/// (name, description, schedule, max participants, participants)
const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball team and practice sessions",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and compete in matches",
        "Saturdays, 10:00 AM - 12:00 PM",
        12,
        &["alex@mergington.edu", "sarah@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and sculpture techniques",
        "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
        18,
        &["isabella@mergington.edu"],
    ),
    (
        "Drama Club",
        "Acting, theater productions, and performance arts",
        "Thursdays, 3:30 PM - 5:00 PM",
        25,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Debate Team",
        "Competitive debate and public speaking skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        16,
        &["rachel@mergington.edu"],
    ),
    (
        "Science Club",
        "Explore physics, chemistry, and biology through experiments",
        "Mondays, 4:00 PM - 5:30 PM",
        20,
        &["david@mergington.edu", "noah@mergington.edu"],
    ),
];

pub fn seed_activities() -> IndexMap<String, Activity> {
    SEED.iter()
        .map(|&(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    name: name.to_string(),
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
