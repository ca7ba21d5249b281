//! Static food nutrition catalog
//!
//! The catalog is supplied externally as a JSON array and never mutated.
//! Nutrition values are normalized per 100 g (or ml).

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::health_metrics::round_half_up;

/// Maximum number of foods returned by a search
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Smallest deficit (kcal) for which food suggestions are offered
pub const SUGGESTION_MIN_DEFICIT: i32 = 100;

/// Default name fragments identifying a staple suggestion
pub const DEFAULT_STAPLE_KEYWORDS: &[&str] = &["arroz", "rice"];

/// Default name fragments identifying a fruit suggestion
pub const DEFAULT_FRUIT_KEYWORDS: &[&str] = &["plátano", "banana"];

/// Food category, serialized with the dataset's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "Cereales")]
    Cereals,
    #[serde(rename = "Verduras")]
    Vegetables,
    #[serde(rename = "Frutas")]
    Fruits,
    #[serde(rename = "Alimentos de Origen Animal")]
    AnimalProducts,
    #[serde(rename = "Leches")]
    Dairy,
    #[serde(rename = "Leguminosas")]
    Legumes,
    #[serde(rename = "Grasas")]
    Fats,
    #[serde(rename = "Azucares")]
    Sugars,
    #[serde(rename = "Alimentos libres de energía")]
    EnergyFree,
    #[serde(rename = "Bebidas")]
    Beverages,
}

/// Food item from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    /// kcal per 100 units
    pub calories: f64,
    /// grams per 100 units
    pub protein: f64,
    /// grams per 100 units
    pub carbs: f64,
    /// grams per 100 units
    pub fat: f64,
}

impl FoodItem {
    /// Calories for `quantity` units, rounded as they are frozen into a log entry
    pub fn calories_for(&self, quantity: f64) -> i32 {
        round_half_up(self.calories * quantity / 100.0)
    }
}

/// Nutrition preview for a quantity, as shown while logging a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPreview {
    pub calories: i32,
    /// Protein in grams, one decimal place
    pub protein: f64,
    /// Carbs in grams, one decimal place
    pub carbs: f64,
    /// Fat in grams, one decimal place
    pub fat: f64,
}

fn one_decimal(value: f64) -> f64 {
    f64::from(round_half_up(value * 10.0)) / 10.0
}

/// Preview the nutrition of `quantity` units of `food`
pub fn preview(food: &FoodItem, quantity: f64) -> NutritionPreview {
    let ratio = quantity / 100.0;
    NutritionPreview {
        calories: food.calories_for(quantity),
        protein: one_decimal(food.protein * ratio),
        carbs: one_decimal(food.carbs * ratio),
        fat: one_decimal(food.fat * ratio),
    }
}

/// Pair of foods suggested to cover a remaining deficit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSuggestion {
    pub deficit: i32,
    pub staple: FoodItem,
    pub fruit: FoodItem,
}

/// Read-only food catalog
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Parse the catalog from its JSON array representation
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let items: Vec<FoodItem> =
            serde_json::from_str(json).map_err(|e| AppError::Catalog(e.to_string()))?;
        Ok(Self::from_items(items))
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a food by identifier
    pub fn find(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Search by optional category and case-insensitive name substring.
    ///
    /// A blank query matches every food in the category. At most
    /// [`SEARCH_RESULT_LIMIT`] foods are returned, in catalog order.
    pub fn search(&self, query: &str, category: Option<FoodCategory>) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|f| category.map_or(true, |c| f.category == c))
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .take(SEARCH_RESULT_LIMIT)
            .collect()
    }

    /// Distinct categories present in the catalog, in first-seen order
    pub fn categories(&self) -> Vec<FoodCategory> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }

    fn find_by_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Option<&FoodItem> {
        self.items.iter().find(|f| {
            let name = f.name.to_lowercase();
            keywords
                .iter()
                .any(|k| name.contains(&k.as_ref().to_lowercase()))
        })
    }

    /// Suggest a staple and a fruit when at least [`SUGGESTION_MIN_DEFICIT`]
    /// kcal remain and both can be found by keyword
    pub fn suggest_for_deficit<S: AsRef<str>>(
        &self,
        deficit: i32,
        staple_keywords: &[S],
        fruit_keywords: &[S],
    ) -> Option<FoodSuggestion> {
        if deficit < SUGGESTION_MIN_DEFICIT {
            return None;
        }
        let staple = self.find_by_keywords(staple_keywords)?;
        let fruit = self.find_by_keywords(fruit_keywords)?;
        Some(FoodSuggestion {
            deficit,
            staple: staple.clone(),
            fruit: fruit.clone(),
        })
    }
}
