//! HTML rendering for the kitchen pages.

use serde::Serialize;
use tera::{Context, Tera};

use super::catalog::KitchenCatalog;
use super::form::KitchenForm;
use crate::agents::ChefOutput;
use crate::pipeline::MAX_EXTREMENESS_LEVEL;

const BASE_TEMPLATE: &str = include_str!("templates/base.html");
const KITCHEN_TEMPLATE: &str = include_str!("templates/kitchen.html");

/// Name of the template every page renders.
pub const KITCHEN_PAGE: &str = "kitchen.html";

/// Builds the template engine with the embedded page templates.
pub fn build_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        (KITCHEN_PAGE, KITCHEN_TEMPLATE),
    ])?;
    Ok(tera)
}

/// Everything the kitchen page can show.
#[derive(Debug, Clone, Serialize)]
pub struct KitchenPage<'a> {
    catalog: &'a KitchenCatalog,
    form: KitchenForm,
    max_level: u8,
    result: Option<ChefOutput>,
    cooking_steps: Vec<String>,
    notice: Option<String>,
    error: Option<String>,
}

impl<'a> KitchenPage<'a> {
    /// An empty form pre-filled from the catalog.
    pub fn fresh(catalog: &'a KitchenCatalog) -> Self {
        let form = KitchenForm {
            ingredients: catalog.default_ingredients.clone(),
            cultures: catalog.default_cultures.clone(),
            extreme_ingredient: catalog.default_extreme_ingredient.clone(),
            extremeness_level: catalog.default_extremeness_level,
            ..KitchenForm::default()
        };
        Self::with_form(catalog, form)
    }

    /// The page as the user last submitted it.
    pub fn with_form(catalog: &'a KitchenCatalog, form: KitchenForm) -> Self {
        Self {
            catalog,
            form,
            max_level: MAX_EXTREMENESS_LEVEL,
            result: None,
            cooking_steps: Vec::new(),
            notice: None,
            error: None,
        }
    }

    pub fn result(mut self, output: ChefOutput) -> Self {
        self.cooking_steps = output.cooking_steps.lines().map(String::from).collect();
        self.result = Some(output);
        self
    }

    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Renders the page to HTML.
    pub fn render(&self, tera: &Tera) -> tera::Result<String> {
        let context = Context::from_serialize(self)?;
        tera.render(KITCHEN_PAGE, &context)
    }
}
