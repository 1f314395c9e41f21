//! Route definitions for the `/draft` resource.

use axum::routing::{get, patch, post, put};
use axum::Router;
use greenlight_core::project::{Actor, Location, Sponsor, TeamMember, TimelineEvent};
use serde::de::DeserializeOwned;

use crate::handlers::draft::{self, DraftResource};
use crate::state::AppState;

/// Routes mounted at `/draft`. All require authentication.
///
/// ```text
/// GET    /                       -> get
/// PATCH  /                       -> update
/// PUT    /files/{field}          -> set_file
/// PUT    /elevator-pitch         -> set_elevator_pitch
/// POST   /reset                  -> reset
///
/// POST   /timeline-events        -> add_record
/// PATCH  /timeline-events/{id}   -> update_record
/// DELETE /timeline-events/{id}   -> delete_record
/// (same for /actors, /locations, /team-members, /sponsors)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(draft::get).patch(draft::update))
        .route("/files/{field}", put(draft::set_file))
        .route("/elevator-pitch", put(draft::set_elevator_pitch))
        .route("/reset", post(draft::reset))
        .merge(collection_routes::<TimelineEvent>("timeline-events"))
        .merge(collection_routes::<Actor>("actors"))
        .merge(collection_routes::<Location>("locations"))
        .merge(collection_routes::<TeamMember>("team-members"))
        .merge(collection_routes::<Sponsor>("sponsors"))
}

fn collection_routes<R>(slug: &str) -> Router<AppState>
where
    R: DraftResource,
    R::New: DeserializeOwned + Send + 'static,
    R::Patch: DeserializeOwned + Send + 'static,
{
    Router::new()
        .route(&format!("/{slug}"), post(draft::add_record::<R>))
        .route(
            &format!("/{slug}/{{id}}"),
            patch(draft::update_record::<R>).delete(draft::delete_record::<R>),
        )
}
