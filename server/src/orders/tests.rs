use std::collections::HashMap;

use super::error::OrderError;
use super::validator::validate_and_price;
use crate::catalog::{CatalogSnapshot, CompatibilityGraph};
use crate::db::models::{Dish, Ingredient, OrderCreate, OrderLineCreate, Size};

fn size(id: i64, name: &str, price: f64, max_ingredients: i64) -> Size {
    Size {
        id,
        name: name.into(),
        price,
        max_ingredients,
    }
}

fn ingredient(id: i64, name: &str, price: f64, stock: i64, unlimited: bool) -> Ingredient {
    Ingredient {
        id,
        name: name.into(),
        price,
        stock,
        unlimited,
    }
}

/// Fixture menu: ham and tuna clash, mozzarella needs tomatoes, parmesan
/// needs mozzarella, anchovies are sold out, tomatoes are unlimited.
fn catalog() -> CatalogSnapshot {
    let sizes = vec![size(1, "small", 5.00, 2), size(2, "medium", 6.00, 5)];
    let dishes = vec![
        Dish {
            id: 1,
            name: "pizza".into(),
            description: String::new(),
        },
        Dish {
            id: 2,
            name: "pasta".into(),
            description: String::new(),
        },
    ];
    let ingredients = vec![
        ingredient(1, "olives", 0.50, 10, false),
        ingredient(2, "tomatoes", 0.30, 0, true),
        ingredient(3, "ham", 1.20, 5, false),
        ingredient(4, "tuna", 1.50, 2, false),
        ingredient(5, "mozzarella", 1.00, 8, false),
        ingredient(6, "parmesan", 1.20, 4, false),
        ingredient(7, "anchovies", 1.50, 0, false),
    ];

    let ingredient_names: HashMap<i64, String> = ingredients
        .iter()
        .map(|i| (i.id, i.name.clone()))
        .collect();

    CatalogSnapshot {
        sizes: sizes.into_iter().map(|s| (s.name.clone(), s)).collect(),
        dishes: dishes.into_iter().map(|d| (d.name.clone(), d)).collect(),
        ingredients: ingredients
            .into_iter()
            .map(|i| (i.name.clone(), i))
            .collect(),
        ingredient_names,
        graph: CompatibilityGraph::from_pairs(&[(3, 4)], &[(5, 2), (6, 5)]),
    }
}

fn draft(dish: &str, size: &str, ingredients: &[&str]) -> OrderCreate {
    OrderCreate {
        dish_name: dish.into(),
        size_name: size.into(),
        ingredients: ingredients
            .iter()
            .map(|name| OrderLineCreate {
                ingredient_name: (*name).into(),
            })
            .collect(),
    }
}

#[test]
fn prices_base_plus_ingredients() {
    let priced = validate_and_price(
        &draft("pizza", "medium", &["olives", "tomatoes"]),
        &catalog(),
    )
    .unwrap();
    assert_eq!(priced.price, 6.80);
    assert_eq!(priced.dish_id, 1);
    assert_eq!(priced.size_id, 2);
    assert_eq!(priced.lines.len(), 2);
}

#[test]
fn empty_order_prices_the_base() {
    let priced = validate_and_price(&draft("pasta", "small", &[]), &catalog()).unwrap();
    assert_eq!(priced.price, 5.00);
    assert!(priced.lines.is_empty());
}

#[test]
fn pricing_is_deterministic() {
    let order = draft("pizza", "medium", &["olives", "ham", "mozzarella", "tomatoes"]);
    let snapshot = catalog();
    let first = validate_and_price(&order, &snapshot).unwrap();
    let second = validate_and_price(&order, &snapshot).unwrap();
    assert_eq!(first.price, second.price);
    assert_eq!(first.price, 9.00);
}

#[test]
fn rejects_unknown_dish() {
    let err = validate_and_price(&draft("sushi", "medium", &[]), &catalog()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid dish name: 'sushi'");
}

#[test]
fn rejects_unknown_size() {
    let err = validate_and_price(&draft("pizza", "giga", &[]), &catalog()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid size name: 'giga'");
}

#[test]
fn rejects_unknown_ingredient() {
    let err = validate_and_price(&draft("pizza", "medium", &["truffle"]), &catalog()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid ingredient name: 'truffle'");
}

#[test]
fn rejects_duplicate_ingredients() {
    let err = validate_and_price(
        &draft("pizza", "medium", &["olives", "olives"]),
        &catalog(),
    )
    .unwrap_err();
    assert_eq!(err, OrderError::DuplicateIngredient);
}

#[test]
fn enforces_size_capacity() {
    let err = validate_and_price(
        &draft("pizza", "small", &["olives", "ham", "tomatoes"]),
        &catalog(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Order exceeds max ingredient limit for size 'small' (max 2)"
    );
}

#[test]
fn capacity_is_checked_before_stock() {
    // anchovies are sold out, but the capacity breach must win.
    let err = validate_and_price(
        &draft("pizza", "small", &["anchovies", "olives", "tomatoes"]),
        &catalog(),
    )
    .unwrap_err();
    assert!(matches!(err, OrderError::CapacityExceeded { .. }));
}

#[test]
fn rejects_sold_out_ingredient() {
    let err = validate_and_price(&draft("pizza", "medium", &["anchovies"]), &catalog()).unwrap_err();
    assert_eq!(err.to_string(), "Insufficient stock for ingredient: anchovies");
}

#[test]
fn unlimited_ingredients_ignore_stock() {
    // tomatoes carry a zero stock counter but are flagged unlimited.
    assert!(validate_and_price(&draft("pizza", "medium", &["tomatoes"]), &catalog()).is_ok());
}

#[test]
fn rejects_incompatible_pair_in_either_order() {
    let err = validate_and_price(&draft("pizza", "medium", &["ham", "tuna"]), &catalog())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incompatibility found: ham is incompatible with tuna"
    );

    let err = validate_and_price(&draft("pizza", "medium", &["tuna", "ham"]), &catalog())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incompatibility found: tuna is incompatible with ham"
    );
}

#[test]
fn rejects_missing_dependency() {
    let err = validate_and_price(&draft("pizza", "medium", &["mozzarella"]), &catalog())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing dependency: mozzarella requires tomatoes"
    );
}

#[test]
fn dependency_check_is_one_level_deep() {
    // parmesan requires mozzarella, which in turn requires tomatoes. An
    // order with only parmesan is missing mozzarella, nothing else.
    let err = validate_and_price(&draft("pizza", "medium", &["parmesan"]), &catalog())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing dependency: parmesan requires mozzarella"
    );

    // With the full direct chain present the order is valid.
    assert!(validate_and_price(
        &draft("pizza", "medium", &["parmesan", "mozzarella", "tomatoes"]),
        &catalog(),
    )
    .is_ok());
}

#[test]
fn transitive_requirement_surfaces_on_the_middle_edge() {
    let err = validate_and_price(
        &draft("pizza", "medium", &["parmesan", "mozzarella"]),
        &catalog(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing dependency: mozzarella requires tomatoes"
    );
}

#[test]
fn corrupt_price_is_a_storage_error_not_a_discount() {
    let mut snapshot = catalog();
    snapshot.ingredients.get_mut("olives").unwrap().price = f64::NAN;

    let err = validate_and_price(&draft("pizza", "medium", &["olives"]), &snapshot).unwrap_err();
    assert!(matches!(err, OrderError::Storage(_)));
}

#[test]
fn validation_does_not_touch_the_snapshot() {
    let snapshot = catalog();
    validate_and_price(&draft("pizza", "medium", &["olives"]), &snapshot).unwrap();
    assert_eq!(snapshot.ingredients["olives"].stock, 10);
}
