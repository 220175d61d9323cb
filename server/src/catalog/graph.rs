use std::collections::{HashMap, HashSet};

/// Ingredient rule graph: symmetric incompatibility edges and directed
/// dependency edges, keyed by ingredient id.
///
/// Dependency edges are checked one level deep only; a chain like
/// `a requires b requires c` does not force `c` into an order holding `a`.
#[derive(Debug, Default, Clone)]
pub struct CompatibilityGraph {
    incompatible: HashMap<i64, HashSet<i64>>,
    requires: HashMap<i64, HashSet<i64>>,
}

impl CompatibilityGraph {
    /// Build from stored pairs. Incompatibilities are stored once per pair
    /// and inserted here in both directions.
    pub fn from_pairs(incompatibilities: &[(i64, i64)], dependencies: &[(i64, i64)]) -> Self {
        let mut graph = Self::default();
        for &(a, b) in incompatibilities {
            graph.incompatible.entry(a).or_default().insert(b);
            graph.incompatible.entry(b).or_default().insert(a);
        }
        for &(ingredient, required) in dependencies {
            graph.requires.entry(ingredient).or_default().insert(required);
        }
        graph
    }

    pub fn incompatible(&self, a: i64, b: i64) -> bool {
        self.incompatible
            .get(&a)
            .is_some_and(|set| set.contains(&b))
    }

    /// Direct requirements of an ingredient, if any.
    pub fn required(&self, ingredient: i64) -> Option<&HashSet<i64>> {
        self.requires.get(&ingredient)
    }
}

// ========== Tests ==========
