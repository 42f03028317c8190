use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One `name | quantity | measure` line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub ingredient_name: String,
    pub quantity: u64,
    pub measure: String,
}

impl IngredientRecord {
    pub fn new(ingredient_name: impl Into<String>, quantity: u64, measure: impl Into<String>) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            quantity,
            measure: measure.into(),
        }
    }
}

/// Dish name -> ingredients in source order. Dishes keep the order they were first declared in.
pub type RecipeCatalog = IndexMap<String, Vec<IngredientRecord>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub measure: String,
    pub quantity: u64,
}

/// Ingredient name -> aggregated amount, in first-seen order.
pub type ShoppingList = IndexMap<String, ShoppingItem>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineCount {
    pub file_name: String,
    pub path: PathBuf,
    pub line_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "shop_list.json",
            OutputFormat::Csv => "shop_list.csv",
            OutputFormat::Tsv => "shop_list.tsv",
        }
    }
}
