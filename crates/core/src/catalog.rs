//! Demo catalog seeded into every new [`ProjectStore`](crate::store::ProjectStore).

use crate::collection::ChildCollection;
use crate::project::Project;
use crate::types::DbId;

fn seed(
    id: DbId,
    title: &str,
    writer: &str,
    budget: &str,
    date: &str,
    elevator_pitch: &str,
    published: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        writer: writer.to_string(),
        budget: budget.to_string(),
        date: date.to_string(),
        pitch_deck: None,
        script: None,
        elevator_pitch: elevator_pitch.to_string(),
        treatment: None,
        trailer: None,
        published,
        timeline_events: ChildCollection::default(),
        actors: ChildCollection::default(),
        locations: ChildCollection::default(),
        team_members: ChildCollection::default(),
        sponsors: ChildCollection::default(),
    }
}

/// The three demo pitches: two published, one unpublished.
pub fn demo_catalog() -> Vec<Project> {
    vec![
        seed(
            1,
            "The Midnight Runner",
            "Jane Smith",
            "$2.5M",
            "2024-06-15",
            "A thrilling chase through the neon-lit streets of Tokyo as a courier races \
             against time to deliver a package that could change everything.",
            true,
        ),
        seed(
            2,
            "Echoes of Tomorrow",
            "Michael Chen",
            "$5M",
            "2024-08-20",
            "A sci-fi drama exploring the consequences of time travel when a scientist \
             discovers messages from her future self.",
            true,
        ),
        seed(
            3,
            "Desert Dreams",
            "Sarah Johnson",
            "$1.8M",
            "2024-09-10",
            "A coming-of-age story about a young artist who finds inspiration in the vast \
             landscapes of the American Southwest.",
            false,
        ),
    ]
}
