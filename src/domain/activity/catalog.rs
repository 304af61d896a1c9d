//! Built-in activity catalog written to an empty store at startup.

use super::aggregate::Activity;

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const INITIAL_ACTIVITIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    CatalogEntry {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    CatalogEntry {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// Returns the activities every fresh installation starts with.
pub fn initial_activities() -> Vec<Activity> {
    INITIAL_ACTIVITIES
        .iter()
        .map(|entry| {
            // Entries are static and already satisfy the aggregate invariants.
            Activity::reconstitute(
                entry.name.to_string(),
                entry.description.to_string(),
                entry.schedule.to_string(),
                entry.max_participants,
                entry.participants.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_contains_three_activities() {
        let activities = initial_activities();
        let summary: Vec<(&str, usize, u32)> = activities
            .iter()
            .map(|a| (a.name(), a.participant_count(), a.max_participants()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Chess Club", 2, 12),
                ("Programming Class", 2, 20),
                ("Gym Class", 2, 30),
            ]
        );
    }

    #[test]
    fn catalog_entries_satisfy_invariants() {
        for activity in initial_activities() {
            let checked = Activity::new(
                activity.name(),
                activity.description(),
                activity.schedule(),
                activity.max_participants(),
                activity.participants().to_vec(),
            );
            assert_eq!(checked.as_ref(), Ok(&activity));
        }
    }
}
