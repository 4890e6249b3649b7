use crate::dashboard::{nutrition_page, ApplyRangeError};
use crate::errors::AppError;
use crate::grid::Column;
use crate::models::{
    ArticleDraft, ArticlesResponse, CommitResponse, DashboardResponse, EditText, NutritionPage, PageQuery,
    RangeRequest, RangeView, RowView,
};
use crate::state::AppState;
use crate::ui::{render_articles, render_dashboard};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn dashboard_page() -> Html<&'static str> {
    Html(render_dashboard())
}

pub async fn articles_page() -> Html<&'static str> {
    Html(render_articles())
}

/// Page mount: resets the chart to the default window ending today.
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut dashboard = state.dashboard.lock().await;
    let range_error = match dashboard.mount(Local::now().date_naive()) {
        Err(ApplyRangeError::Range(err)) => Some(err.to_string()),
        _ => None,
    };
    let (nutrition, nutrition_error) = match &dashboard.nutrition {
        Ok(records) => (Some(nutrition_page(records, None, None)), None),
        Err(err) => (None, Some(err.to_string())),
    };

    Json(DashboardResponse {
        measurement_error: dashboard.measurements.as_ref().err().map(ToString::to_string),
        range_error,
        nutrition_error,
        view: dashboard.view.clone(),
        nutrition,
    })
}

pub async fn update_range(
    State(state): State<AppState>,
    Json(payload): Json<RangeRequest>,
) -> Result<Json<RangeView>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let view = dashboard.apply_range(payload.start, payload.end).map_err(|err| {
        info!("range rejected: {err}");
        AppError::from(err)
    })?;
    Ok(Json(view.clone()))
}

pub async fn get_nutrition(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<NutritionPage>, AppError> {
    let dashboard = state.dashboard.lock().await;
    let records = dashboard.nutrition.as_ref().map_err(AppError::unavailable)?;
    Ok(Json(nutrition_page(records, query.page, query.per_page)))
}

pub async fn list_articles(State(state): State<AppState>) -> Json<ArticlesResponse> {
    let grid = state.grid.lock().await;
    Json(ArticlesResponse {
        load_error: state.articles_error.as_ref().map(ToString::to_string),
        rows: grid.rows().iter().map(|row| row.view()).collect(),
    })
}

pub async fn add_article(
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> (StatusCode, Json<RowView>) {
    let mut grid = state.grid.lock().await;
    let row = grid.add_row(draft).view();
    (StatusCode::CREATED, Json(row))
}

pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut grid = state.grid.lock().await;
    grid.delete_row(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn begin_edit(
    State(state): State<AppState>,
    Path((id, column)): Path<(u64, String)>,
) -> Result<Json<EditText>, AppError> {
    let column: Column = column.parse()?;
    let mut grid = state.grid.lock().await;
    let value = grid.begin_edit(id, column)?;
    Ok(Json(EditText { value }))
}

pub async fn commit_edit(
    State(state): State<AppState>,
    Path((id, column)): Path<(u64, String)>,
    Json(payload): Json<EditText>,
) -> Result<Json<CommitResponse>, AppError> {
    let column: Column = column.parse()?;
    let mut grid = state.grid.lock().await;
    let display = grid.commit_edit(id, column, &payload.value)?;
    let row = grid.row(id)?.view();
    Ok(Json(CommitResponse { row, display }))
}

pub async fn export_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let grid = state.grid.lock().await;
    let json = grid.export_json()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}
