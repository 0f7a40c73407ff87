use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod selection;
pub mod utils;

pub use catalog::{Catalog, CatalogError};
pub use selection::SelectionStore;

/// Lower bounds (inclusive) of the named match tiers, in percent.
pub mod thresholds {
    pub const EXCELLENT: f64 = 80.0;
    pub const GOOD: f64 = 60.0;
    pub const FAIR: f64 = 40.0;
}

/// A catalog entry. Ingredient names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cook_time: String,
    pub category: String,
}

/// One recipe scored against a selection. Recomputed on every ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_count: usize,
    pub match_percentage: f64,
    pub missing_ingredients: Vec<String>,
}

impl RankedRecipe {
    pub fn tier(&self) -> MatchTier {
        classify(self.match_percentage)
    }
}

/// The three disjoint buckets a ranking produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchGroup {
    Perfect,
    Partial,
    None,
}

impl MatchGroup {
    pub const ALL: [MatchGroup; 3] = [MatchGroup::Perfect, MatchGroup::Partial, MatchGroup::None];

    pub fn title(self) -> &'static str {
        match self {
            MatchGroup::Perfect => "Perfect Matches!",
            MatchGroup::Partial => "Partial Matches",
            MatchGroup::None => "Other Possible Recipes",
        }
    }

    /// Stable key used for the `data-match` attribute of a result section.
    pub fn key(self) -> &'static str {
        match self {
            MatchGroup::Perfect => "perfect",
            MatchGroup::Partial => "partial",
            MatchGroup::None => "none",
        }
    }
}

/// Grouped, ordered result of [`rank`].
///
/// - `perfect`: 100% matches, catalog order.
/// - `partial`: between 0% and 100% exclusive, best first; ties keep catalog order.
/// - `none`: 0% matches, catalog order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchGroups {
    pub perfect: Vec<RankedRecipe>,
    pub partial: Vec<RankedRecipe>,
    pub none: Vec<RankedRecipe>,
}

impl MatchGroups {
    pub fn group(&self, group: MatchGroup) -> &[RankedRecipe] {
        match group {
            MatchGroup::Perfect => &self.perfect,
            MatchGroup::Partial => &self.partial,
            MatchGroup::None => &self.none,
        }
    }

    pub fn count(&self, group: MatchGroup) -> usize {
        self.group(group).len()
    }

    /// Number of ranked recipes across all groups.
    pub fn total(&self) -> usize {
        self.perfect.len() + self.partial.len() + self.none.len()
    }
}

/// Which result sections the user asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultFilter {
    #[default]
    All,
    Perfect,
    Partial,
}

impl ResultFilter {
    pub const TABS: [ResultFilter; 3] = [ResultFilter::All, ResultFilter::Perfect, ResultFilter::Partial];

    pub fn label(self, groups: &MatchGroups) -> String {
        match self {
            ResultFilter::All => "All Recipes".to_string(),
            ResultFilter::Perfect => {
                format!("Perfect Matches ({})", groups.count(MatchGroup::Perfect))
            }
            ResultFilter::Partial => {
                format!("Partial Matches ({})", groups.count(MatchGroup::Partial))
            }
        }
    }

    /// Sections to display. `All` hides empty groups; the single-group
    /// filters always show their group, even when it is empty.
    pub fn visible_groups(self, groups: &MatchGroups) -> Vec<MatchGroup> {
        match self {
            ResultFilter::All => MatchGroup::ALL
                .into_iter()
                .filter(|&g| groups.count(g) > 0)
                .collect(),
            ResultFilter::Perfect => vec![MatchGroup::Perfect],
            ResultFilter::Partial => vec![MatchGroup::Partial],
        }
    }
}

/// Qualitative label for a match percentage, used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    None,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
            MatchTier::Poor => "poor",
            MatchTier::None => "none",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent-match",
            MatchTier::Good => "good-match",
            MatchTier::Fair => "fair-match",
            MatchTier::Poor => "poor-match",
            MatchTier::None => "no-match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a percentage onto a [`MatchTier`]. Each named tier includes its lower bound.
pub fn classify(percentage: f64) -> MatchTier {
    if percentage >= thresholds::EXCELLENT {
        MatchTier::Excellent
    } else if percentage >= thresholds::GOOD {
        MatchTier::Good
    } else if percentage >= thresholds::FAIR {
        MatchTier::Fair
    } else if percentage > 0.0 {
        MatchTier::Poor
    } else {
        MatchTier::None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Ranking was requested before any ingredient was selected.
    EmptySelection,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::EmptySelection => write!(f, "Please select some ingredients first!"),
        }
    }
}

impl std::error::Error for RankError {}

/// Score a single recipe against an already lower-cased selection.
///
/// `match_count` walks the selection and looks each member up in the recipe,
/// while `missing_ingredients` walks the recipe and looks each ingredient up
/// in the selection. The two are not forced to be complements.
fn score_recipe(recipe: &Recipe, selection: &[String]) -> RankedRecipe {
    let recipe_lower: Vec<String> = recipe.ingredients.iter().map(|i| i.to_lowercase()).collect();

    let match_count = selection
        .iter()
        .filter(|member| recipe_lower.contains(member))
        .count();

    let missing_ingredients = recipe
        .ingredients
        .iter()
        .zip(&recipe_lower)
        .filter(|(_, lower)| !selection.contains(lower))
        .map(|(original, _)| original.clone())
        .collect();

    let match_percentage = if recipe.ingredients.is_empty() {
        0.0
    } else {
        match_count as f64 / recipe.ingredients.len() as f64 * 100.0
    };

    RankedRecipe {
        recipe: recipe.clone(),
        match_count,
        match_percentage,
        missing_ingredients,
    }
}

/// Rank every recipe in `catalog` against `selection` and split the results
/// into perfect, partial and no-match groups.
///
/// The selection is lower-cased once; members that collapse to the same
/// lower-case form count once. Neither input is modified.
///
/// # Errors
/// [`RankError::EmptySelection`] when `selection` is empty.
pub fn rank<S: AsRef<str>>(selection: &[S], catalog: &[Recipe]) -> Result<MatchGroups, RankError> {
    if selection.is_empty() {
        return Err(RankError::EmptySelection);
    }

    let mut seen = HashSet::new();
    let normalized: Vec<String> = selection
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .filter(|s| seen.insert(s.clone()))
        .collect();
    debug!("Looking for recipes with: {:?}", normalized);

    let mut groups = MatchGroups::default();
    for recipe in catalog {
        let ranked = score_recipe(recipe, &normalized);
        if ranked.match_percentage >= 100.0 {
            groups.perfect.push(ranked);
        } else if ranked.match_percentage > 0.0 {
            groups.partial.push(ranked);
        } else {
            groups.none.push(ranked);
        }
    }

    // `sort_by` is stable, so equal percentages keep catalog order.
    groups
        .partial
        .sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

    info!(
        "Ranked {} recipes: {} perfect, {} partial, {} none",
        catalog.len(),
        groups.perfect.len(),
        groups.partial.len(),
        groups.none.len()
    );
    Ok(groups)
}

/// Rank a list of ingredient names against the built-in catalog.
///
/// Called from plain JavaScript. `selection` must be an array of strings;
/// the result is the serialized [`MatchGroups`].
#[wasm_bindgen]
pub fn rank_recipes(selection: JsValue) -> Result<JsValue, JsValue> {
    let selection: Vec<String> = serde_wasm_bindgen::from_value(selection)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize selection: {}", e)))?;

    let catalog = Catalog::reference().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let groups = rank(&selection, catalog.recipes()).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&groups).map_err(JsValue::from)
}

/// Tier name (`"excellent"`, `"good"`, …) for a match percentage.
#[wasm_bindgen]
pub fn classify_match(percentage: f64) -> String {
    classify(percentage).as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: String::new(),
            cook_time: "10 minutes".to_string(),
            category: "Test".to_string(),
        }
    }

    fn names(ranked: &[RankedRecipe]) -> Vec<&str> {
        ranked.iter().map(|r| r.recipe.name.as_str()).collect()
    }

    fn reference() -> Catalog {
        Catalog::reference().unwrap()
    }

    #[test]
    fn test_empty_selection_is_signalled() {
        let empty: [&str; 0] = [];
        assert_eq!(rank(&empty, reference().recipes()), Err(RankError::EmptySelection));
    }

    #[test]
    fn test_empty_selection_over_empty_catalog_is_still_signalled() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(rank(&empty, &[]), Err(RankError::EmptySelection));
    }

    #[test]
    fn test_pasta_garlic_tomatoes_scenario() {
        let groups = rank(&["Pasta", "Garlic", "Tomatoes"], reference().recipes()).unwrap();

        assert!(groups.perfect.is_empty());
        assert_eq!(
            &names(&groups.partial)[..2],
            ["Chicken Pasta", "Simple Tomato Pasta"]
        );

        let chicken_pasta = &groups.partial[0];
        assert_eq!(chicken_pasta.match_count, 3);
        assert_eq!(chicken_pasta.match_percentage, 75.0);
        assert_eq!(chicken_pasta.missing_ingredients, vec!["Chicken"]);

        let tomato_pasta = &groups.partial[1];
        assert_eq!(tomato_pasta.match_count, 3);
        assert_eq!(tomato_pasta.match_percentage, 75.0);
        assert_eq!(tomato_pasta.missing_ingredients, vec!["Cheese"]);
        assert_eq!(tomato_pasta.tier(), MatchTier::Good);
    }

    #[test]
    fn test_partial_is_sorted_best_first() {
        let groups = rank(&["Pasta", "Garlic", "Tomatoes"], reference().recipes()).unwrap();
        // Bolognese: 3/6 = 50%, Garlic Chicken: 1/3, Stir Fry: 1/4.
        assert_eq!(
            names(&groups.partial),
            [
                "Chicken Pasta",
                "Simple Tomato Pasta",
                "Classic Spaghetti Bolognese",
                "Garlic Chicken",
                "Chicken Stir Fry",
            ]
        );
        let pcts: Vec<f64> = groups.partial.iter().map(|r| r.match_percentage).collect();
        assert!(pcts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_perfect_match_scenario() {
        let groups = rank(&["Chicken", "Garlic", "Onion"], reference().recipes()).unwrap();
        assert_eq!(names(&groups.perfect), ["Garlic Chicken"]);
        let garlic_chicken = &groups.perfect[0];
        assert_eq!(garlic_chicken.match_count, 3);
        assert_eq!(garlic_chicken.match_percentage, 100.0);
        assert!(garlic_chicken.missing_ingredients.is_empty());
        assert_eq!(garlic_chicken.tier(), MatchTier::Excellent);
    }

    #[test]
    fn test_unknown_ingredient_lands_everything_in_none() {
        let groups = rank(&["Kale"], reference().recipes()).unwrap();
        assert!(groups.perfect.is_empty());
        assert!(groups.partial.is_empty());
        assert_eq!(
            names(&groups.none),
            [
                "Chicken Pasta",
                "Simple Tomato Pasta",
                "Garlic Chicken",
                "Classic Spaghetti Bolognese",
                "Chicken Stir Fry",
            ]
        );
        for ranked in &groups.none {
            assert_eq!(ranked.match_count, 0);
            assert_eq!(ranked.match_percentage, 0.0);
            assert_eq!(ranked.missing_ingredients, ranked.recipe.ingredients);
        }
    }

    #[test]
    fn test_matching_ignores_case() {
        let catalog = vec![recipe("Roast", &["Chicken"])];
        let groups = rank(&["CHICKEN"], &catalog).unwrap();
        assert_eq!(names(&groups.perfect), ["Roast"]);
        assert!(groups.perfect[0].missing_ingredients.is_empty());
    }

    #[test]
    fn test_missing_ingredients_keep_original_case_and_order() {
        let catalog = vec![recipe("Salad", &["Lettuce", "olive Oil", "Feta", "Lemon"])];
        let groups = rank(&["feta"], &catalog).unwrap();
        assert_eq!(
            groups.partial[0].missing_ingredients,
            vec!["Lettuce", "olive Oil", "Lemon"]
        );
    }

    #[test]
    fn test_case_variants_in_selection_count_once() {
        let catalog = vec![recipe("Toast", &["Bread", "Butter"])];
        let groups = rank(&["Bread", "bread", "BREAD"], &catalog).unwrap();
        let toast = &groups.partial[0];
        assert_eq!(toast.match_count, 1);
        assert_eq!(toast.match_percentage, 50.0);
    }

    #[test]
    fn test_recipe_without_ingredients_scores_zero() {
        let catalog = vec![recipe("Air", &[])];
        let groups = rank(&["Anything"], &catalog).unwrap();
        assert_eq!(names(&groups.none), ["Air"]);
        assert_eq!(groups.none[0].match_percentage, 0.0);
        assert!(groups.none[0].missing_ingredients.is_empty());
    }

    #[test]
    fn test_duplicate_recipe_ingredient_is_not_reinterpreted() {
        // Selection side counts "garlic" once; the recipe lists it twice.
        let catalog = vec![recipe("Garlic Bread", &["Garlic", "Garlic"])];
        let groups = rank(&["Garlic"], &catalog).unwrap();
        let bread = &groups.partial[0];
        assert_eq!(bread.match_count, 1);
        assert_eq!(bread.match_percentage, 50.0);
        assert!(bread.missing_ingredients.is_empty());
    }

    #[test]
    fn test_rank_does_not_mutate_inputs() {
        let catalog = reference();
        let before = catalog.recipes().to_vec();
        let selection = vec!["Pasta".to_string(), "garlic".to_string()];
        let first = rank(&selection, catalog.recipes()).unwrap();
        let second = rank(&selection, catalog.recipes()).unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.recipes(), before.as_slice());
        assert_eq!(selection, vec!["Pasta", "garlic"]);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(100.0), MatchTier::Excellent);
        assert_eq!(classify(80.0), MatchTier::Excellent);
        assert_eq!(classify(79.9), MatchTier::Good);
        assert_eq!(classify(60.0), MatchTier::Good);
        assert_eq!(classify(59.99), MatchTier::Fair);
        assert_eq!(classify(40.0), MatchTier::Fair);
        assert_eq!(classify(39.9), MatchTier::Poor);
        assert_eq!(classify(0.1), MatchTier::Poor);
        assert_eq!(classify(0.0), MatchTier::None);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(f64::NAN), MatchTier::None);
        assert_eq!(classify(-5.0), MatchTier::None);
        assert_eq!(classify(150.0), MatchTier::Excellent);
    }

    #[test]
    fn test_tier_css_classes() {
        assert_eq!(MatchTier::Excellent.css_class(), "excellent-match");
        assert_eq!(MatchTier::None.css_class(), "no-match");
        assert_eq!(MatchTier::Fair.to_string(), "fair");
    }

    #[test]
    fn test_filter_labels_carry_counts() {
        let groups = rank(&["Chicken", "Garlic", "Onion"], reference().recipes()).unwrap();
        assert_eq!(ResultFilter::All.label(&groups), "All Recipes");
        assert_eq!(ResultFilter::Perfect.label(&groups), "Perfect Matches (1)");
        assert_eq!(ResultFilter::Partial.label(&groups), "Partial Matches (4)");
    }

    #[test]
    fn test_all_filter_hides_empty_groups() {
        let groups = rank(&["Kale"], reference().recipes()).unwrap();
        assert_eq!(ResultFilter::All.visible_groups(&groups), vec![MatchGroup::None]);
        assert_eq!(
            ResultFilter::Perfect.visible_groups(&groups),
            vec![MatchGroup::Perfect]
        );
        assert_eq!(
            ResultFilter::Partial.visible_groups(&groups),
            vec![MatchGroup::Partial]
        );
    }

    #[test]
    fn test_ranked_recipe_serializes_flat_camel_case() {
        let groups = rank(&["Chicken", "Garlic", "Onion"], reference().recipes()).unwrap();
        let value = serde_json::to_value(&groups.perfect[0]).unwrap();
        assert_eq!(value["name"], "Garlic Chicken");
        assert_eq!(value["cookTime"], "25 minutes");
        assert_eq!(value["matchCount"], 3);
        assert_eq!(value["matchPercentage"], 100.0);
        assert_eq!(value["missingIngredients"], serde_json::json!([]));
    }
}
