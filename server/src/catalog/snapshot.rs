use std::collections::HashMap;

use sqlx::SqlitePool;
use tokio::try_join;

use super::graph::CompatibilityGraph;
use crate::db::models::{Dish, Ingredient, Size};
use crate::db::repository::catalog;

/// One consistent read of the catalog: name-keyed lookup maps plus the
/// ingredient rule graph.
#[derive(Debug, Default, Clone)]
pub struct CatalogSnapshot {
    pub sizes: HashMap<String, Size>,
    pub dishes: HashMap<String, Dish>,
    pub ingredients: HashMap<String, Ingredient>,
    pub ingredient_names: HashMap<i64, String>,
    pub graph: CompatibilityGraph,
}

impl CatalogSnapshot {
    pub async fn load(pool: &SqlitePool) -> sqlx::Result<Self> {
        let (sizes, dishes, ingredients, incompatibilities, dependencies) = try_join!(
            catalog::list_sizes(pool),
            catalog::list_dishes(pool),
            catalog::list_ingredients(pool),
            catalog::list_incompatibility_ids(pool),
            catalog::list_dependency_ids(pool),
        )?;

        let ingredient_names = ingredients
            .iter()
            .map(|i| (i.id, i.name.clone()))
            .collect();

        Ok(Self {
            sizes: sizes.into_iter().map(|s| (s.name.clone(), s)).collect(),
            dishes: dishes.into_iter().map(|d| (d.name.clone(), d)).collect(),
            ingredients: ingredients
                .into_iter()
                .map(|i| (i.name.clone(), i))
                .collect(),
            ingredient_names,
            graph: CompatibilityGraph::from_pairs(&incompatibilities, &dependencies),
        })
    }

    /// Resolve an ingredient id to its name, falling back to the raw id
    /// for rows deleted since the snapshot was taken.
    pub fn ingredient_name(&self, id: i64) -> String {
        self.ingredient_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
