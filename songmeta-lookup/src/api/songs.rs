//! Song lookup endpoint

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::models::ResolvedSong;
use crate::AppState;

/// GET /songs/:title/:artist
///
/// Returns the stored song, or resolves it through the recording search.
#[tracing::instrument(
    name = "get_song",
    skip_all,
    fields(media.song.name = %title, media.artist.name = %artist)
)]
pub async fn get_song(
    State(state): State<AppState>,
    Path((title, artist)): Path<(String, String)>,
) -> ApiResult<Json<ResolvedSong>> {
    if title.trim().is_empty() || artist.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "title and artist must not be blank".to_string(),
        ));
    }

    let song = state.lookup.lookup(&title, &artist).await?;
    Ok(Json(song))
}

/// Build song routes
pub fn song_routes() -> Router<AppState> {
    Router::new().route("/songs/:title/:artist", get(get_song))
}
