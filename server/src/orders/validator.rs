//! Pure order validation and pricing.
//!
//! Runs entirely against a [`CatalogSnapshot`]; no storage access and no
//! mutation. Checks run in a fixed order and stop at the first failure:
//! structure, capacity, stock, incompatibility, dependency, then pricing.
//! Stock is only pre-checked here; the authoritative decrement happens
//! inside the create transaction.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::error::OrderError;
use crate::catalog::CatalogSnapshot;
use crate::db::models::{Ingredient, OrderCreate};

/// A validated order, ready to insert.
#[derive(Debug, Clone)]
pub struct PricedOrder {
    pub dish_id: i64,
    pub size_id: i64,
    /// Total rounded to 2 decimal places.
    pub price: f64,
    pub lines: Vec<PricedLine>,
}

#[derive(Debug, Clone)]
pub struct PricedLine {
    pub ingredient_id: i64,
    pub name: String,
    pub unlimited: bool,
}

pub fn validate_and_price(
    order: &OrderCreate,
    catalog: &CatalogSnapshot,
) -> Result<PricedOrder, OrderError> {
    // Structure: the dish and size must exist and no ingredient may repeat.
    let dish = catalog
        .dishes
        .get(&order.dish_name)
        .ok_or_else(|| OrderError::invalid("dish", &order.dish_name))?;
    let size = catalog
        .sizes
        .get(&order.size_name)
        .ok_or_else(|| OrderError::invalid("size", &order.size_name))?;

    let names = order.ingredient_names();
    for (index, name) in names.iter().enumerate() {
        if names[..index].contains(name) {
            return Err(OrderError::DuplicateIngredient);
        }
    }

    // Capacity is a property of the requested set, independent of stock.
    if names.len() as i64 > size.max_ingredients {
        return Err(OrderError::CapacityExceeded {
            size: size.name.clone(),
            max: size.max_ingredients,
        });
    }

    // Resolve and pre-check stock in submission order.
    let mut lines: Vec<&Ingredient> = Vec::with_capacity(names.len());
    for name in &names {
        let ingredient = catalog
            .ingredients
            .get(*name)
            .ok_or_else(|| OrderError::invalid("ingredient", *name))?;
        if !ingredient.has_stock() {
            return Err(OrderError::OutOfStock(ingredient.name.clone()));
        }
        lines.push(ingredient);
    }

    // Pairwise incompatibility, reported as the first offending pair.
    for (index, first) in lines.iter().enumerate() {
        for second in &lines[index + 1..] {
            if catalog.graph.incompatible(first.id, second.id) {
                return Err(OrderError::IncompatiblePair(
                    first.name.clone(),
                    second.name.clone(),
                ));
            }
        }
    }

    // Direct dependencies only: each ingredient's required set must be a
    // subset of the order.
    let selected: Vec<i64> = lines.iter().map(|i| i.id).collect();
    for ingredient in &lines {
        let Some(required) = catalog.graph.required(ingredient.id) else {
            continue;
        };
        let mut missing: Vec<String> = required
            .iter()
            .filter(|&id| !selected.contains(id))
            .map(|id| catalog.ingredient_name(*id))
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Err(OrderError::MissingDependency {
                ingredient: ingredient.name.clone(),
                missing: missing.join(", "),
            });
        }
    }

    // Price in decimal space and round once at the end.
    let mut total = to_decimal(size.price)?;
    for line in &lines {
        total += to_decimal(line.price)?;
    }
    let price = total
        .round_dp(2)
        .to_f64()
        .ok_or_else(|| OrderError::Storage("order total out of range".into()))?;

    Ok(PricedOrder {
        dish_id: dish.id,
        size_id: size.id,
        price,
        lines: lines
            .into_iter()
            .map(|i| PricedLine {
                ingredient_id: i.id,
                name: i.name.clone(),
                unlimited: i.unlimited,
            })
            .collect(),
    })
}

/// A price column that cannot be represented as a decimal means the
/// catalog row is corrupt; surface it instead of pricing it as zero.
fn to_decimal(value: f64) -> Result<Decimal, OrderError> {
    Decimal::from_f64(value)
        .ok_or_else(|| OrderError::Storage(format!("unrepresentable price in catalog: {value}")))
}
