/// Albums API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::{validate, Album, AlbumDraft, AlbumId};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

/// Maximum quantity of albums an album page can have.
const MAX_PAGE_SIZE: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    // Kept as raw strings so malformed numbers produce the documented
    // error messages instead of a generic query rejection.
    pub page_size: Option<String>,
    pub page_number: Option<String>,
}

/// POST /albums
pub async fn create_album(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AlbumDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>)> {
    let draft = decode_draft(body)?;

    let album = Album::new(draft);
    app_state.storage.insert(&album).await?;

    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /albums?page_size=&page_number=
pub async fn list_albums(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Album>>> {
    let page_size = parse_page_param(query.page_size, "page_size", "page size")?;
    let page_number = parse_page_param(query.page_number, "page_number", "page number")?;

    if page_size < 1 {
        return Err(ServerError::BadRequest("page size is less than 1".to_string()));
    }
    if page_size > MAX_PAGE_SIZE {
        return Err(ServerError::BadRequest(format!(
            "page size is greater than {MAX_PAGE_SIZE}"
        )));
    }
    if page_number < 1 {
        return Err(ServerError::BadRequest(
            "page number is less than 1".to_string(),
        ));
    }

    // Saturate so an extreme page number lands past the end instead of
    // overflowing the offset arithmetic.
    let offset = page_size.saturating_mul(page_number - 1);
    match app_state.storage.find_all(offset, page_size).await {
        Ok(albums) => Ok(Json(albums)),
        // An empty page is an OK response with an empty list, not a 404
        Err(e) if e.is_not_found() => Ok(Json(Vec::new())),
        Err(e) => Err(e.into()),
    }
}

/// GET /albums/:album_id
pub async fn get_album(
    State(app_state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<Json<Album>> {
    let album_id = parse_album_id(&album_id)?;
    let album = app_state.storage.find_one(album_id).await?;
    Ok(Json(album))
}

/// PUT /albums/:album_id
pub async fn update_album(
    State(app_state): State<AppState>,
    Path(album_id): Path<String>,
    body: std::result::Result<Json<AlbumDraft>, JsonRejection>,
) -> Result<Json<Album>> {
    let album_id = parse_album_id(&album_id)?;
    let draft = decode_draft(body)?;

    let mut album = app_state.storage.find_one(album_id).await?;
    album.apply(draft, Utc::now());
    app_state.storage.update(&album).await?;

    Ok(Json(album))
}

/// DELETE /albums/:album_id
pub async fn delete_album(
    State(app_state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<Json<Album>> {
    let album_id = parse_album_id(&album_id)?;

    let album = app_state.storage.find_one(album_id).await?;
    app_state.storage.remove(album_id).await?;

    // Respond with the removed album
    Ok(Json(album))
}

fn decode_draft(body: std::result::Result<Json<AlbumDraft>, JsonRejection>) -> Result<AlbumDraft> {
    let Json(draft) =
        body.map_err(|_| ServerError::BadRequest("malformed request body".to_string()))?;

    let problems = validate::problems(&draft);
    if !problems.is_empty() {
        return Err(ServerError::Validation(problems));
    }

    Ok(draft)
}

fn parse_album_id(raw: &str) -> Result<AlbumId> {
    Uuid::parse_str(raw).map_err(|_| ServerError::BadRequest("malformed album id".to_string()))
}

fn parse_page_param(value: Option<String>, name: &str, label: &str) -> Result<i64> {
    let raw = value.ok_or_else(|| {
        ServerError::BadRequest(format!("query parameter {name} is missing"))
    })?;
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("{label} is not a valid number")))
}
