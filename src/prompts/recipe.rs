//! Recipe, image-prompt and critique templates.
//!
//! Ingredient slices passed to these builders are expected to be a single
//! snapshot of the fusion set, so "first" means the same item everywhere.

/// Quantity attached to every ingredient in the detailed list.
pub const DEMO_QUANTITY: &str = "1 unit (demo)";

/// Fixed three-step method used for every dish.
pub const DEMO_COOKING_STEPS: &str = "1. Demo Step: Mix everything with passion.\n2. Demo Step: Cook until awesome.\n3. Demo Step: Plate like an artist.";

/// Used in the menu name when there is no ingredient to feature.
const MYSTERY_INGREDIENT: &str = "Mystery";

/// Used in the image prompt when there are no ingredients.
const VARIOUS_INGREDIENTS: &str = "various ingredients";

/// `AI Fusion: {cultures} Delight with {first ingredient}`.
pub fn build_menu_name(cultures: &[String], ingredients: &[&str]) -> String {
    let featured = ingredients.first().copied().unwrap_or(MYSTERY_INGREDIENT);
    format!("AI Fusion: {} Delight with {}", cultures.join(", "), featured)
}

/// Rationale naming the cultures and up to two ingredients.
pub fn build_chef_rationale(cultures: &[String], ingredients: &[&str]) -> String {
    format!(
        "This dish (demo) explores the exciting intersection of {} cuisines, highlighting the unique potential of combining {}...",
        cultures.join(", "),
        head(ingredients, 2).join(", ")
    )
}

/// Text-to-image prompt for the finished dish.
pub fn build_image_prompt(menu_name: &str, cultures: &[String], ingredients: &[&str]) -> String {
    let main_ingredients = if ingredients.is_empty() {
        VARIOUS_INGREDIENTS.to_string()
    } else {
        head(ingredients, 3).join(", ")
    };
    format!(
        "Photorealistic, michelin star plating, fusion cuisine: {}, main ingredients {}, vibrant colors, dramatic lighting, inspired by {}.",
        menu_name,
        main_ingredients,
        cultures.join(", ")
    )
}

/// The critic's verdict on a dish.
pub fn build_critique(menu_name: &str) -> String {
    format!(
        "Critique (demo): '{}' is a bold concept! Consider the textural interplay. Overall, very promising.",
        menu_name
    )
}

fn head<'a>(items: &'a [&'a str], n: usize) -> &'a [&'a str] {
    &items[..items.len().min(n)]
}
