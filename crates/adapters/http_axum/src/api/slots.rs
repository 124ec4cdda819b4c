//! JSON REST handlers for slots.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use parkhub_app::ports::SlotRepository;
use parkhub_domain::id::SlotId;
use parkhub_domain::slot::Slot;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only return slots in this city (exact match).
    pub city: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Slot>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Slot>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/slots?city=`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: SlotRepository + Send + Sync + 'static,
{
    let slots = state
        .slot_service
        .list_slots(params.city.as_deref())
        .await?;
    Ok(ListResponse::Ok(Json(slots)))
}

/// `GET /api/slots/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: SlotRepository + Send + Sync + 'static,
{
    let slot_id = SlotId::from_str(&id)?;
    let slot = state.slot_service.get_slot(slot_id).await?;
    Ok(GetResponse::Ok(Json(slot)))
}
