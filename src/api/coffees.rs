use axum::{extract::{Path, Query, State}, Json};
use serde::{Deserialize, Serialize};
use crate::api::{ApiError, AppState};
use crate::domain::{Coffee, CoffeeQuery};

/// Query string of `GET /coffees/search`. Absent parameters match everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub coffees: Vec<Coffee>,
}

pub async fn list_coffees(State(state): State<AppState>) -> Result<Json<Vec<Coffee>>, ApiError> {
    Ok(Json(state.coffees.list_coffees().await?))
}

pub async fn get_coffee(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Coffee>, ApiError> {
    Ok(Json(state.coffees.get_coffee(id).await?))
}

pub async fn search_coffees(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Json<SearchResponse>, ApiError> {
    let coffees = state.coffees.search_coffees(CoffeeQuery::new(params.name, params.category)).await?;
    Ok(Json(SearchResponse { coffees }))
}
