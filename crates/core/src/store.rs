//! In-memory project store: one editable draft plus the project catalog.
//!
//! Every operation is total. Missing ids and unrecognised field names are
//! no-ops; return values report what happened so callers can decide whether
//! absence matters to them (the HTTP layer maps it to 404).

use crate::catalog::demo_catalog;
use crate::project::{
    Actor, ActorPatch, AssetField, Location, LocationPatch, NewActor, NewLocation, NewSponsor,
    NewTeamMember, NewTimelineEvent, Project, ProjectPatch, Sponsor, SponsorPatch, TeamMember,
    TeamMemberPatch, TimelineEvent, TimelineEventPatch,
};
use crate::types::{DbId, RecordId};

/// The draft under edit and the catalog of known projects.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    catalog: Vec<Project>,
    current: Project,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Store seeded with the demo catalog and an empty draft.
    pub fn new() -> Self {
        Self::with_catalog(demo_catalog())
    }

    pub fn with_catalog(catalog: Vec<Project>) -> Self {
        Self {
            catalog,
            current: Project::draft(),
        }
    }

    // -----------------------------------------------------------------------
    // Draft
    // -----------------------------------------------------------------------

    pub fn current(&self) -> &Project {
        &self.current
    }

    /// Shallow-merge `patch` into the draft.
    pub fn update_project(&mut self, patch: ProjectPatch) -> &Project {
        self.current.apply(patch);
        &self.current
    }

    /// Set one of the asset references by wire name.
    ///
    /// Returns `false` without touching the draft when `field` is not one of
    /// `pitchDeck`, `script`, `treatment` or `trailer`.
    pub fn set_asset_file(&mut self, field: &str, url: impl Into<String>) -> bool {
        match AssetField::from_name(field) {
            Some(field) => {
                *self.current.asset_mut(field) = Some(url.into());
                true
            }
            None => false,
        }
    }

    pub fn set_elevator_pitch(&mut self, text: impl Into<String>) {
        self.current.elevator_pitch = text.into();
    }

    pub fn has_pitch_deck(&self) -> bool {
        self.current.pitch_deck.is_some()
    }

    /// Discard the draft and start over from defaults.
    pub fn reset_draft(&mut self) {
        self.current = Project::draft();
    }

    // -----------------------------------------------------------------------
    // Draft child collections
    //
    // `add_*` returns `None` without touching the draft when the collection's
    // highest id is already `RecordId::MAX`.
    // -----------------------------------------------------------------------

    pub fn add_timeline_event(&mut self, event: NewTimelineEvent) -> Option<&TimelineEvent> {
        self.current.timeline_events.add(event)
    }

    pub fn update_timeline_event(
        &mut self,
        id: RecordId,
        patch: TimelineEventPatch,
    ) -> Option<&TimelineEvent> {
        self.current.timeline_events.update(id, patch)
    }

    pub fn delete_timeline_event(&mut self, id: RecordId) -> bool {
        self.current.timeline_events.delete(id)
    }

    pub fn add_actor(&mut self, actor: NewActor) -> Option<&Actor> {
        self.current.actors.add(actor)
    }

    pub fn update_actor(&mut self, id: RecordId, patch: ActorPatch) -> Option<&Actor> {
        self.current.actors.update(id, patch)
    }

    pub fn delete_actor(&mut self, id: RecordId) -> bool {
        self.current.actors.delete(id)
    }

    pub fn add_location(&mut self, location: NewLocation) -> Option<&Location> {
        self.current.locations.add(location)
    }

    pub fn update_location(&mut self, id: RecordId, patch: LocationPatch) -> Option<&Location> {
        self.current.locations.update(id, patch)
    }

    pub fn delete_location(&mut self, id: RecordId) -> bool {
        self.current.locations.delete(id)
    }

    pub fn add_team_member(&mut self, member: NewTeamMember) -> Option<&TeamMember> {
        self.current.team_members.add(member)
    }

    pub fn update_team_member(
        &mut self,
        id: RecordId,
        patch: TeamMemberPatch,
    ) -> Option<&TeamMember> {
        self.current.team_members.update(id, patch)
    }

    pub fn delete_team_member(&mut self, id: RecordId) -> bool {
        self.current.team_members.delete(id)
    }

    pub fn add_sponsor(&mut self, sponsor: NewSponsor) -> Option<&Sponsor> {
        self.current.sponsors.add(sponsor)
    }

    pub fn update_sponsor(&mut self, id: RecordId, patch: SponsorPatch) -> Option<&Sponsor> {
        self.current.sponsors.update(id, patch)
    }

    pub fn delete_sponsor(&mut self, id: RecordId) -> bool {
        self.current.sponsors.delete(id)
    }

    // -----------------------------------------------------------------------
    // Catalog
    // -----------------------------------------------------------------------

    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    /// Published catalog entries in catalog order.
    pub fn published_projects(&self) -> Vec<&Project> {
        self.catalog.iter().filter(|p| p.published).collect()
    }

    pub fn project_by_id(&self, id: DbId) -> Option<&Project> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Returns `false` when no catalog entry has `id`.
    pub fn set_project_published(&mut self, id: DbId, published: bool) -> bool {
        match self.catalog.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.published = published;
                true
            }
            None => false,
        }
    }
}
