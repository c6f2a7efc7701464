use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/profiles", get(handlers::list_profiles).post(handlers::create_profile))
        .route("/api/profiles/import", post(handlers::import_profile))
        .route(
            "/api/profiles/:id",
            put(handlers::update_profile).delete(handlers::delete_profile),
        )
        .route("/api/profiles/:id/select", post(handlers::select_profile))
        .route("/api/profiles/:id/export", get(handlers::export_profile))
        .route("/api/profiles/:id/share", get(handlers::share_profile))
        .route("/api/profiles/:id/attendance", post(handlers::toggle_attendance))
        .route("/api/profiles/:id/months/:month", get(handlers::get_month))
        .route("/api/profiles/:id/months/:month/holidays", put(handlers::set_holidays))
        .with_state(state)
}
