use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/articles", get(handlers::articles_page))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/dashboard/range", post(handlers::update_range))
        .route("/api/nutrition", get(handlers::get_nutrition))
        .route("/api/articles", get(handlers::list_articles).post(handlers::add_article))
        .route("/api/articles/export", get(handlers::export_articles))
        .route("/api/articles/:id", delete(handlers::delete_article))
        .route("/api/articles/:id/:column", put(handlers::commit_edit))
        .route("/api/articles/:id/:column/edit", get(handlers::begin_edit))
        .with_state(state)
}
