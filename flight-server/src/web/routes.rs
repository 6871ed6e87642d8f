//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::CategoryProfile;
use crate::fare::{FareError, FareResolver, FareSelection};
use crate::search::{
    MatchEngine, RawQuery, SearchCriteria, ValidationErrors, keys, normalize,
};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/flights", get(list_flights))
        .route("/search", get(search_flights))
        .route("/flights/:index/fare", get(flight_fare))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fare categories in display order.
async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state
        .categories
        .iter()
        .map(CategoryResult::from_profile)
        .collect();

    Json(CategoriesResponse { categories })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// List flights matching whatever criteria were given.
///
/// Missing fields act as wildcards, so an empty query lists the catalog.
async fn list_flights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let raw = RawQuery::from_pairs(params);
    let criteria = normalize(&raw);
    render_flights(&state, &headers, &raw, &criteria)
}

/// Search from the form: every required field must be filled in.
async fn search_flights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let raw = RawQuery::from_pairs(params);
    let criteria = normalize(&raw);
    criteria.validate()?;
    render_flights(&state, &headers, &raw, &criteria)
}

/// Match, price and render a flight list as HTML or JSON.
fn render_flights(
    state: &AppState,
    headers: &HeaderMap,
    raw: &RawQuery,
    criteria: &SearchCriteria,
) -> Result<Response, AppError> {
    let resolver = FareResolver::new(&state.categories);
    let category = selected_category(&resolver, raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let result = MatchEngine::new(&state.catalog).search(criteria);
    let response = FlightListResponse::from_result(&result, category, |flight| {
        resolver.resolve_profile(flight, category)
    });

    // Return HTML or JSON based on Accept header
    if accepts_html(headers) {
        let template = FlightListTemplate {
            flights: response
                .flights
                .iter()
                .map(FlightCardView::from_result)
                .collect(),
            category: category.display_name.clone(),
            message: response.message,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// The category named by the `category` parameter, or the default.
fn selected_category<'a>(
    resolver: &FareResolver<'a>,
    raw: &RawQuery,
) -> Result<&'a CategoryProfile, FareError> {
    match raw.first(keys::CATEGORY) {
        "" => Ok(resolver.default_category()),
        id => resolver.category(id),
    }
}

/// Price one catalog flight in the requested category.
async fn flight_fare(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<FareResponse>, AppError> {
    let flight = state.catalog.get(index).ok_or_else(|| AppError::NotFound {
        message: format!("Flight {index} not found"),
    })?;

    let raw = RawQuery::from_pairs(params);
    let resolver = FareResolver::new(&state.categories);
    let selection = match raw.first(keys::CATEGORY) {
        "" => FareSelection::new(&resolver, flight),
        id => FareSelection::with_category(&resolver, flight, id)?,
    };
    let price = selection.price().map_err(|e| AppError::from(e.clone()))?;

    Ok(Json(FareResponse {
        index,
        category: CategoryResult::from_profile(selection.category()),
        price: price.amount(),
        display_price: price.to_string(),
        options: resolver
            .resolve_all(flight)
            .iter()
            .map(CategoryPriceResult::from_priced)
            .collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Validation(ValidationErrors),
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        match e {
            FareError::CategoryNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            FareError::PriceMissing { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Unprocessable { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        match self {
            AppError::Validation(errors) => {
                (status, Json(ValidationErrorResponse::from_errors(&errors))).into_response()
            }
            _ => (status, Json(ErrorResponse { error: message })).into_response(),
        }
    }
}
