//! The kitchen catalog: choices and defaults shown on the form.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::agents::DEFAULT_EXTREMENESS_LEVEL;
use crate::error::CatalogError;
use crate::pipeline::MAX_EXTREMENESS_LEVEL;

/// Form choices and pre-filled values.
///
/// Loaded from YAML when a kitchen file is configured; any key missing from
/// the file keeps its built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenCatalog {
    /// Cuisines offered in the multi-select.
    pub available_cultures: Vec<String>,
    /// Pre-filled ingredient text.
    pub default_ingredients: String,
    /// Cuisines selected when the form first loads.
    pub default_cultures: Vec<String>,
    /// Pre-filled extreme ingredient.
    pub default_extreme_ingredient: String,
    /// Initial slider position.
    pub default_extremeness_level: u8,
}

impl Default for KitchenCatalog {
    fn default() -> Self {
        Self {
            available_cultures: [
                "ไทย",
                "ญี่ปุ่น",
                "เม็กซิกัน",
                "อิตาเลียน",
                "อินเดีย",
                "ฝรั่งเศส",
                "เกาหลี",
                "เปรู",
                "ไวกิ้งโบราณ",
                "อาหารจากหนัง Sci-Fi",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            default_ingredients: "กุ้ง, มะม่วง, พริกหยวก, ข้าวสวย".to_string(),
            default_cultures: vec!["ไทย".to_string(), "เม็กซิกัน".to_string()],
            default_extreme_ingredient: "ทุเรียน".to_string(),
            default_extremeness_level: DEFAULT_EXTREMENESS_LEVEL,
        }
    }
}

impl KitchenCatalog {
    /// Loads a catalog from a YAML file and validates it.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses a catalog from YAML text and validates it.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: KitchenCatalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that the defaults fit the choices.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.available_cultures.is_empty() {
            return Err(CatalogError::Invalid(
                "available_cultures must not be empty".to_string(),
            ));
        }

        if let Some(unknown) = self
            .default_cultures
            .iter()
            .find(|c| !self.available_cultures.contains(c))
        {
            return Err(CatalogError::Invalid(format!(
                "default culture '{}' is not in available_cultures",
                unknown
            )));
        }

        if !(1..=MAX_EXTREMENESS_LEVEL).contains(&self.default_extremeness_level) {
            return Err(CatalogError::Invalid(format!(
                "default_extremeness_level must be between 1 and {}",
                MAX_EXTREMENESS_LEVEL
            )));
        }

        Ok(())
    }
}
