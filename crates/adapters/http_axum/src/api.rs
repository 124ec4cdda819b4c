//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod admin;
#[allow(clippy::missing_errors_doc)]
pub mod slots;

use axum::Router;
use axum::routing::{get, post};

use parkhub_app::ports::SlotRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SlotRepository + Send + Sync + 'static,
{
    Router::new()
        // Admin
        .route("/admin/init-sample-data", post(admin::init_sample_data::<R>))
        // Slots
        .route("/slots", get(slots::list::<R>))
        .route("/slots/{id}", get(slots::get::<R>))
}
