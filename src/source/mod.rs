pub mod strava;

use crate::error::SourceError;
use crate::state::AppState;
use crate::types::activity::RawActivity;

const SNAPSHOT_KEY: &str = "athlete:recent";

/// Raw activity snapshot for one invocation: served from the in-process
/// cache when a fresh copy exists, fetched from Strava otherwise. The pure
/// pipeline never sees the cache; it always works over the returned
/// immutable snapshot.
pub async fn recent_snapshot(state: &AppState) -> Result<Vec<RawActivity>, SourceError> {
    if let Some(cached) = state.get(SNAPSHOT_KEY) {
        return Ok(cached);
    }

    let source = strava::StravaSource::from_config(state.config())?;
    let activities = source.fetch_recent(state.config().fetch_limit).await?;
    tracing::info!("Fetched {} activities from Strava", activities.len());
    state.insert(SNAPSHOT_KEY.to_string(), activities.clone());
    Ok(activities)
}
