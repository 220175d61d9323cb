use axum::{extract::State, Json};
use serde::Serialize;
use tokio::try_join;

use crate::core::state::ServerState;
use crate::db::models::{Dish, Ingredient, IngredientPair, Size};
use crate::db::repository::catalog;
use crate::utils::{AppError, AppResult};

/// Full menu payload: catalog rows plus both rule sets, so a client can
/// mirror the server-side checks while composing an order.
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub ingredients: Vec<Ingredient>,
    pub sizes: Vec<Size>,
    pub dishes: Vec<Dish>,
    pub incompatibilities: Vec<IngredientPair>,
    pub dependencies: Vec<IngredientPair>,
}

pub async fn menu(State(state): State<ServerState>) -> AppResult<Json<MenuResponse>> {
    let (ingredients, sizes, dishes, incompatibilities, dependencies) = try_join!(
        catalog::list_ingredients(&state.pool),
        catalog::list_sizes(&state.pool),
        catalog::list_dishes(&state.pool),
        catalog::list_incompatibilities(&state.pool),
        catalog::list_dependencies(&state.pool),
    )
    .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(MenuResponse {
        ingredients,
        sizes,
        dishes,
        incompatibilities,
        dependencies,
    }))
}
