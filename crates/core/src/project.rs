//! Project aggregate model: the root [`Project`] and its child record kinds.
//!
//! Each child kind has three shapes:
//! - the record itself (with its collection-scoped `id`)
//! - a `New*` form without the id, submitted when adding
//! - a `*Patch` form with every field optional, merged on update
//!
//! All types serialize with camelCase keys to match the browser client.

use serde::{Deserialize, Deserializer, Serialize};

use crate::collection::{ChildCollection, ChildRecord};
use crate::types::{DbId, RecordId};

/// Title given to a freshly created draft.
pub const DEFAULT_DRAFT_TITLE: &str = "Untitled Film Project";

/// Id given to a freshly created draft.
pub const DEFAULT_DRAFT_ID: DbId = 1;

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A film project pitch with its nested child collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub writer: String,
    /// Display string, e.g. `"$2.5M"`.
    pub budget: String,
    /// Display string, e.g. `"2024-06-15"`.
    pub date: String,
    pub pitch_deck: Option<String>,
    pub script: Option<String>,
    pub elevator_pitch: String,
    pub treatment: Option<String>,
    pub trailer: Option<String>,
    pub published: bool,
    pub timeline_events: ChildCollection<TimelineEvent>,
    pub actors: ChildCollection<Actor>,
    pub locations: ChildCollection<Location>,
    pub team_members: ChildCollection<TeamMember>,
    pub sponsors: ChildCollection<Sponsor>,
}

impl Project {
    /// An empty, unpublished draft.
    pub fn draft() -> Self {
        Self {
            id: DEFAULT_DRAFT_ID,
            title: DEFAULT_DRAFT_TITLE.to_string(),
            writer: String::new(),
            budget: String::new(),
            date: String::new(),
            pitch_deck: None,
            script: None,
            elevator_pitch: String::new(),
            treatment: None,
            trailer: None,
            published: false,
            timeline_events: ChildCollection::default(),
            actors: ChildCollection::default(),
            locations: ChildCollection::default(),
            team_members: ChildCollection::default(),
            sponsors: ChildCollection::default(),
        }
    }

    /// Shallow merge: every field present in `patch` replaces the current
    /// value, everything else is kept. No validation is performed.
    pub fn apply(&mut self, patch: ProjectPatch) {
        let ProjectPatch {
            id,
            title,
            writer,
            budget,
            date,
            pitch_deck,
            script,
            elevator_pitch,
            treatment,
            trailer,
            published,
            timeline_events,
            actors,
            locations,
            team_members,
            sponsors,
        } = patch;

        merge(&mut self.id, id);
        merge(&mut self.title, title);
        merge(&mut self.writer, writer);
        merge(&mut self.budget, budget);
        merge(&mut self.date, date);
        merge(&mut self.pitch_deck, pitch_deck);
        merge(&mut self.script, script);
        merge(&mut self.elevator_pitch, elevator_pitch);
        merge(&mut self.treatment, treatment);
        merge(&mut self.trailer, trailer);
        merge(&mut self.published, published);
        merge(&mut self.timeline_events, timeline_events);
        merge(&mut self.actors, actors);
        merge(&mut self.locations, locations);
        merge(&mut self.team_members, team_members);
        merge(&mut self.sponsors, sponsors);
    }

    /// Mutable access to one of the asset-reference fields.
    pub fn asset_mut(&mut self, field: AssetField) -> &mut Option<String> {
        match field {
            AssetField::PitchDeck => &mut self.pitch_deck,
            AssetField::Script => &mut self.script,
            AssetField::Treatment => &mut self.treatment,
            AssetField::Trailer => &mut self.trailer,
        }
    }
}

/// Partial project used by the shallow-merge update.
///
/// Nullable asset fields use `Option<Option<_>>` so that an explicit JSON
/// `null` clears the reference while an absent key leaves it alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub writer: Option<String>,
    pub budget: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub pitch_deck: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub script: Option<Option<String>>,
    pub elevator_pitch: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub treatment: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub trailer: Option<Option<String>>,
    pub published: Option<bool>,
    pub timeline_events: Option<ChildCollection<TimelineEvent>>,
    pub actors: Option<ChildCollection<Actor>>,
    pub locations: Option<ChildCollection<Location>>,
    pub team_members: Option<ChildCollection<TeamMember>>,
    pub sponsors: Option<ChildCollection<Sponsor>>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// The four asset references that can be set through the "set file" path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    PitchDeck,
    Script,
    Treatment,
    Trailer,
}

impl AssetField {
    pub const ALL: [AssetField; 4] = [
        AssetField::PitchDeck,
        AssetField::Script,
        AssetField::Treatment,
        AssetField::Trailer,
    ];

    /// Wire name of the field (`"pitchDeck"`, `"script"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            AssetField::PitchDeck => "pitchDeck",
            AssetField::Script => "script",
            AssetField::Treatment => "treatment",
            AssetField::Trailer => "trailer",
        }
    }

    /// Resolve a wire name. Any other project field name yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

// ---------------------------------------------------------------------------
// Timeline events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: RecordId,
    pub date: String,
    pub title: String,
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimelineEvent {
    pub date: String,
    pub title: String,
    pub comments: String,
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventPatch {
    pub date: Option<String>,
    pub title: Option<String>,
    pub comments: Option<String>,
    pub duration: Option<i64>,
}

impl ChildRecord for TimelineEvent {
    type New = NewTimelineEvent;
    type Patch = TimelineEventPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, new: NewTimelineEvent) -> Self {
        Self {
            id,
            date: new.date,
            title: new.title,
            comments: new.comments,
            duration: new.duration,
        }
    }

    fn apply(&mut self, patch: TimelineEventPatch) {
        merge(&mut self.date, patch.date);
        merge(&mut self.title, patch.title);
        merge(&mut self.comments, patch.comments);
        // A missing duration keeps the old one; it cannot be cleared by patch.
        if patch.duration.is_some() {
            self.duration = patch.duration;
        }
    }
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: RecordId,
    pub character_name: String,
    pub actor_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActor {
    pub character_name: String,
    pub actor_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorPatch {
    pub character_name: Option<String>,
    pub actor_name: Option<String>,
    pub description: Option<String>,
}

impl ChildRecord for Actor {
    type New = NewActor;
    type Patch = ActorPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, new: NewActor) -> Self {
        Self {
            id,
            character_name: new.character_name,
            actor_name: new.actor_name,
            description: new.description,
        }
    }

    fn apply(&mut self, patch: ActorPatch) {
        merge(&mut self.character_name, patch.character_name);
        merge(&mut self.actor_name, patch.actor_name);
        merge(&mut self.description, patch.description);
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: String,
    pub address: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl ChildRecord for Location {
    type New = NewLocation;
    type Patch = LocationPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, new: NewLocation) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            description: new.description,
        }
    }

    fn apply(&mut self, patch: LocationPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.address, patch.address);
        merge(&mut self.description, patch.description);
    }
}

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
}

impl ChildRecord for TeamMember {
    type New = NewTeamMember;
    type Patch = TeamMemberPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, new: NewTeamMember) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            description: new.description,
        }
    }

    fn apply(&mut self, patch: TeamMemberPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.role, patch.role);
        merge(&mut self.description, patch.description);
    }
}

// ---------------------------------------------------------------------------
// Sponsors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: RecordId,
    pub name: String,
    pub company: String,
    /// Display string, e.g. `"$250K"`.
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSponsor {
    pub name: String,
    pub company: String,
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl ChildRecord for Sponsor {
    type New = NewSponsor;
    type Patch = SponsorPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_new(id: RecordId, new: NewSponsor) -> Self {
        Self {
            id,
            name: new.name,
            company: new.company,
            amount: new.amount,
            description: new.description,
        }
    }

    fn apply(&mut self, patch: SponsorPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.company, patch.company);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.description, patch.description);
    }
}
