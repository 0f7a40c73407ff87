//! The recipe catalog: the compiled-in reference table plus loaders for
//! catalogs supplied from elsewhere (JSON or CSV text).
//!
//! Every loader funnels through [`Catalog::new`], which enforces the schema:
//! at least one recipe, non-blank unique names, and a non-empty ingredient
//! list per recipe.

use crate::utils::parse_cook_minutes;
use crate::Recipe;
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// JSON source of the reference catalog.
const REFERENCE_JSON: &str = include_str!("recipes.json");

/// Columns a CSV catalog must provide.
const CSV_COLUMNS: [&str; 5] = ["name", "ingredients", "instructions", "cookTime", "category"];

/// Separator between ingredients inside the CSV `ingredients` column.
const CSV_INGREDIENT_SEPARATOR: char = ';';

#[derive(Debug)]
pub enum CatalogError {
    Json(serde_json::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    DuplicateName(String),
    NoIngredients(String),
    EmptyName,
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Json(e) => write!(f, "Invalid JSON catalog: {}", e),
            CatalogError::Csv(e) => write!(f, "Invalid CSV catalog: {}", e),
            CatalogError::MissingColumn(column) => {
                write!(f, "CSV catalog is missing the '{}' column", column)
            }
            CatalogError::DuplicateName(name) => {
                write!(f, "Recipe '{}' appears more than once", name)
            }
            CatalogError::NoIngredients(name) => {
                write!(f, "Recipe '{}' has no ingredients", name)
            }
            CatalogError::EmptyName => write!(f, "Recipe name cannot be empty"),
            CatalogError::Empty => write!(f, "Catalog contains no recipes"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Json(e) => Some(e),
            CatalogError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        CatalogError::Csv(e)
    }
}

/// One CSV record before the ingredient column is split.
#[derive(Deserialize)]
struct CsvRow {
    name: String,
    ingredients: String,
    instructions: String,
    #[serde(rename = "cookTime")]
    cook_time: String,
    category: String,
}

impl From<CsvRow> for Recipe {
    fn from(row: CsvRow) -> Self {
        Recipe {
            name: row.name.trim().to_string(),
            ingredients: row
                .ingredients
                .split(CSV_INGREDIENT_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            instructions: row.instructions,
            cook_time: row.cook_time.trim().to_string(),
            category: row.category.trim().to_string(),
        }
    }
}

/// An immutable, validated list of recipes in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Validate and wrap a list of recipes. Order is preserved.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        if recipes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_names = HashSet::new();
        for recipe in &recipes {
            if recipe.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen_names.insert(recipe.name.as_str()) {
                return Err(CatalogError::DuplicateName(recipe.name.clone()));
            }
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::NoIngredients(recipe.name.clone()));
            }
            if parse_cook_minutes(&recipe.cook_time).is_none() {
                debug!(
                    "Cook time '{}' of '{}' is not in a recognised format",
                    recipe.cook_time, recipe.name
                );
            }
        }

        Ok(Catalog { recipes })
    }

    /// The built-in five-recipe catalog.
    pub fn reference() -> Result<Self, CatalogError> {
        Self::from_json_str(REFERENCE_JSON)
    }

    /// Parse a JSON array of recipe objects (`name`, `ingredients`,
    /// `instructions`, `cookTime`, `category`).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        info!("Successfully loaded {} recipes from JSON content", recipes.len());
        Self::new(recipes)
    }

    /// Parse CSV text with a header row naming the recipe fields. The
    /// `ingredients` column holds a `;`-separated list.
    ///
    /// Records that cannot be read are skipped with a warning; the remaining
    /// recipes still have to pass validation.
    pub fn from_csv_str(csv_content: &str) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(csv_content.as_bytes());

        let headers = reader.headers()?.clone();
        for column in CSV_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        let mut recipes = Vec::new();
        for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
            match row {
                Ok(row) => recipes.push(Recipe::from(row)),
                Err(e) => {
                    // +2: header line plus one-based numbering
                    warn!("Skipping CSV record on line {}: {}", i + 2, e);
                }
            }
        }

        info!("Successfully loaded {} recipes from CSV content", recipes.len());
        Self::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Every distinct ingredient in first-appearance order. Spellings that
    /// differ only by case collapse onto the first one seen.
    pub fn ingredient_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .flat_map(|r| r.ingredients.iter())
            .filter(|i| seen.insert(i.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Ingredients to offer as one-click additions: not yet selected and
    /// containing `query` (both case-insensitive), at most `limit` of them.
    pub fn suggestions<S: AsRef<str>>(&self, query: &str, selection: &[S], limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        let selected: HashSet<String> = selection.iter().map(|s| s.as_ref().to_lowercase()).collect();

        self.ingredient_names()
            .into_iter()
            .filter(|name| {
                let lower = name.to_lowercase();
                !selected.contains(&lower) && lower.contains(&query)
            })
            .take(limit)
            .collect()
    }
}
