//! Administrative handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use parkhub_app::ports::SlotRepository;
use parkhub_app::services::seed_service::SeedOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// Message returned after a successful seed.
pub const SEEDED_MESSAGE: &str = "Successfully initialized parking slots!";

/// Query parameters for the seeding endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SeedQuery {
    /// Delete every stored slot before seeding. Defaults to `false`, also
    /// when given empty (`?force=`).
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub force: bool,
}

/// Lenient boolean for query flags: `true/false`, `on/off`, `yes/no`,
/// `1/0`, case-insensitive and trimmed. An empty value means `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean such as true, 1, yes or on")
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "off" | "no" | "0" => Some(false),
        "true" | "on" | "yes" | "1" => Some(true),
        _ => None,
    }
}

/// Body returned when the store already held slots.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadySeededBody {
    pub message: String,
    pub existing_count: u64,
}

/// Body returned when the sample slots were written.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededBody {
    pub message: String,
    pub total_slots: usize,
    pub cities: Vec<String>,
    pub locations: usize,
}

/// Possible responses from the seeding endpoint. Both are `200 OK`.
pub enum SeedResponse {
    AlreadySeeded(Json<AlreadySeededBody>),
    Seeded(Json<SeededBody>),
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded { existing_count } => {
                Self::AlreadySeeded(Json(AlreadySeededBody {
                    message: format!(
                        "Database already has {existing_count} slots. Use ?force=true to overwrite."
                    ),
                    existing_count,
                }))
            }
            SeedOutcome::Seeded {
                total_slots,
                cities,
                locations,
            } => Self::Seeded(Json(SeededBody {
                message: SEEDED_MESSAGE.to_string(),
                total_slots,
                cities,
                locations,
            })),
        }
    }
}

impl IntoResponse for SeedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadySeeded(json) => json.into_response(),
            Self::Seeded(json) => json.into_response(),
        }
    }
}

/// `POST /api/admin/init-sample-data?force=`
pub async fn init_sample_data<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<SeedQuery>,
) -> Result<SeedResponse, ApiError>
where
    R: SlotRepository + Send + Sync + 'static,
{
    let outcome = state.seed_service.seed_sample_data(params.force).await?;
    Ok(outcome.into())
}
