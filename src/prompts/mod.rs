//! Text templates used by the chef agents.
//!
//! Every "agent" in this crate is a placeholder: instead of asking a model,
//! it fills one of these templates. Keeping the wording here lets a real
//! model integration replace a template without touching the agents.
//!
//! - [`cultural`] - insight records for a cuisine
//! - [`recipe`] - menu name, cooking steps, rationale, image prompt and critique

pub mod cultural;
pub mod recipe;

pub use cultural::build_cultural_insight;
pub use recipe::{
    build_chef_rationale, build_critique, build_image_prompt, build_menu_name,
    DEMO_COOKING_STEPS, DEMO_QUANTITY,
};
