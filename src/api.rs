use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::draft::{confidence_hint, RecordDraft};
use crate::export;
use crate::filter::RecordFilter;
use crate::record::{
    Choice, Record, BUSINESS_TYPES, IMPACT_DIRECTIONS, IMPACT_STRENGTH_OPTIONS,
    REVENUE_SHARE_OPTIONS,
};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api/records",
            get(list_records).post(create_record).delete(clear_records),
        )
        .route("/api/records/{id}", delete(delete_record))
        .route("/api/records/{id}/review", post(review_record))
        .route("/api/options", get(options))
        .route("/api/advisory", get(advisory))
        .route("/api/export/json", get(export_json))
        .route("/api/export/csv", get(export_csv))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Filtered view of the list; no params means the full list, newest first.
async fn list_records(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Json<Vec<Record>> {
    Json(filter.apply(&state.store.snapshot()))
}

/// Submit the entry form. Validation failures keep the store untouched and
/// come back as 422 with the blocking message.
async fn create_record(
    State(state): State<AppState>,
    Json(draft): Json<RecordDraft>,
) -> Response {
    if let Err(e) = draft.validate() {
        return error_json(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }
    let record = draft.into_record();
    state.store.add(record.clone());
    tracing::info!(id = %record.id, company = %record.company, "record saved");
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn review_record(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.update(&id, Record::mark_reviewed) {
        Some(record) => Json(record).into_response(),
        None => error_json(StatusCode::NOT_FOUND, "no such record"),
    }
}

/// Per-record delete is immediate; there is no confirmation at this layer.
async fn delete_record(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.remove(&id);
    StatusCode::NO_CONTENT
}

/// Bulk clear. The "are you sure" gate is the UI's job.
async fn clear_records(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    StatusCode::NO_CONTENT
}

#[derive(serde::Serialize)]
struct OptionsOut {
    #[serde(rename = "businessTypes")]
    business_types: &'static [Choice],
    #[serde(rename = "revenueShareOptions")]
    revenue_share_options: &'static [Choice],
    #[serde(rename = "impactDirections")]
    impact_directions: &'static [Choice],
    #[serde(rename = "impactStrengthOptions")]
    impact_strength_options: &'static [Choice],
}

/// Static catalogs for the form and filter selects.
async fn options() -> Json<OptionsOut> {
    Json(OptionsOut {
        business_types: &BUSINESS_TYPES,
        revenue_share_options: &REVENUE_SHARE_OPTIONS,
        impact_directions: &IMPACT_DIRECTIONS,
        impact_strength_options: &IMPACT_STRENGTH_OPTIONS,
    })
}

#[derive(serde::Deserialize)]
struct AdvisoryQuery {
    confidence: Option<u8>,
}

#[derive(serde::Serialize)]
struct AdvisoryOut {
    confidence: u8,
    hint: &'static str,
}

/// Advisory hint for a confidence score; pure lookup, no side effects.
async fn advisory(Query(q): Query<AdvisoryQuery>) -> Json<AdvisoryOut> {
    let confidence = q.confidence.unwrap_or(5);
    Json(AdvisoryOut {
        confidence,
        hint: confidence_hint(confidence),
    })
}

fn download(body: String, content_type: &'static str, name: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// Exports always cover the full stored collection, never the filtered view.
async fn export_json(State(state): State<AppState>) -> Response {
    match export::json_pretty(&state.store.snapshot()) {
        Ok(body) => download(body, "application/json", export::file_name("json")),
        Err(e) => {
            tracing::warn!(error = %e, "JSON export failed");
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "export failed")
        }
    }
}

async fn export_csv(State(state): State<AppState>) -> Response {
    match export::csv_text(&state.store.snapshot()) {
        Ok(body) => download(body, "text/csv; charset=utf-8", export::file_name("csv")),
        Err(e) => {
            tracing::warn!(error = %e, "CSV export failed");
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "export failed")
        }
    }
}
