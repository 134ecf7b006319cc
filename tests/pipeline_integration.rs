//! End-to-end tests for the chef pipeline.
//!
//! Set iteration order is unspecified, so these assert membership rather
//! than exact strings wherever the first fusion ingredient is involved.

use std::collections::HashSet;

use fusion_chef::agents::{caption_for, PipelineStage, UserInput};
use fusion_chef::pipeline::{ChefPipeline, CriticPolicy};

fn scenario_input() -> UserInput {
    UserInput::new("a, b")
        .with_cultures(["x"])
        .with_extreme_ingredient("z")
        .with_extremeness_level(2)
}

#[test]
fn test_reference_scenario() {
    let run = ChefPipeline::new()
        .run_with_report(scenario_input(), None)
        .expect("placeholder pipeline never fails");
    let state = &run.state;

    assert_eq!(state.processed_order.main_ingredients, vec!["a", "b"]);
    assert_eq!(state.processed_order.extremeness_level, 2);
    assert!(state.processed_order.parsed_successfully);
    assert_eq!(
        state.cultural_insights.keys().collect::<Vec<_>>(),
        vec!["x"]
    );

    for expected in ["a", "b", "z", "x_ing1_demo", "x_ing2_demo"] {
        assert!(
            state.fusion_ingredients.contains(expected),
            "fusion set is missing {}",
            expected
        );
    }
    assert_eq!(state.fusion_ingredients.len(), 5);

    let output = &run.output;
    assert!(output.menu_name.contains('x'));
    assert!(state
        .fusion_ingredients
        .iter()
        .any(|ingredient| output.menu_name.ends_with(ingredient.as_str())));

    let expected_url = format!(
        "https://via.placeholder.com/500x300.png?text={}",
        caption_for(&output.menu_name)
    );
    assert_eq!(output.image_url, expected_url);
    assert!(output.image_url.ends_with(&output.menu_name.replace(' ', "+")));

    assert_eq!(output.drink_pairing, "AI Suggested Drink (to be implemented, demo)");
    assert_eq!(output.critique, "");
    assert_eq!(run.stages(), PipelineStage::default_stages().as_slice());
}

#[test]
fn test_ingredients_list_matches_fusion_set() {
    let run = ChefPipeline::new()
        .run_with_report(scenario_input(), None)
        .expect("placeholder pipeline never fails");

    let listed: HashSet<&str> = run
        .output
        .ingredients_list
        .iter()
        .map(String::as_str)
        .collect();
    let fused: HashSet<&str> = run
        .state
        .fusion_ingredients
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(listed, fused);
    assert_eq!(listed.len(), run.output.ingredients_list.len());
}

#[test]
fn test_duplicate_ingredients_collapse() {
    let input = UserInput::new("z, a, a")
        .with_cultures(["x"])
        .with_extreme_ingredient("a");
    let run = ChefPipeline::new()
        .run_with_report(input, None)
        .expect("placeholder pipeline never fails");

    assert_eq!(run.state.processed_order.main_ingredients, vec!["z", "a", "a"]);
    assert_eq!(run.state.fusion_ingredients.len(), 4);
    assert_eq!(run.output.ingredients_list.len(), 4);
}

#[test]
fn test_empty_cultures_still_names_dish() {
    let run = ChefPipeline::new()
        .run_with_report(UserInput::new("rice"), None)
        .expect("placeholder pipeline never fails");

    assert!(run.state.cultural_insights.is_empty());
    assert!(!run.output.menu_name.is_empty());
    assert!(run.output.menu_name.starts_with("AI Fusion:  Delight with "));
    assert_eq!(run.state.processed_order.extremeness_level, 3);
}

#[test]
fn test_completely_empty_order() {
    let output = ChefPipeline::new()
        .run(UserInput::default())
        .expect("empty order must not fail");

    assert_eq!(output.menu_name, "AI Fusion:  Delight with Mystery");
    assert!(output.ingredients_list.is_empty());
    assert!(output.image_url.contains("?text=AI+Fusion:++Delight+with+Mystery"));
}

#[test]
fn test_null_json_fields_run_like_missing_ones() {
    let input: UserInput =
        serde_json::from_str(r#"{"ingredients": null, "cultures": null, "extreme_ingredient": "z"}"#)
            .expect("null fields default");
    let run = ChefPipeline::new()
        .run_with_report(input, None)
        .expect("placeholder pipeline never fails");

    assert!(run.state.processed_order.main_ingredients.is_empty());
    assert!(run.state.cultural_insights.is_empty());
    assert_eq!(run.output.menu_name, "AI Fusion:  Delight with z");
}

#[test]
fn test_runs_agree_modulo_set_order() {
    let pipeline = ChefPipeline::new().with_critic_policy(CriticPolicy::Always);
    let first = pipeline
        .run_with_report(scenario_input(), None)
        .expect("placeholder pipeline never fails");
    let second = pipeline
        .run_with_report(scenario_input(), None)
        .expect("placeholder pipeline never fails");

    assert_eq!(first.state.processed_order, second.state.processed_order);
    assert_eq!(first.state.cultural_insights, second.state.cultural_insights);
    assert_eq!(first.state.fusion_ingredients, second.state.fusion_ingredients);
    assert_eq!(first.output.cooking_steps, second.output.cooking_steps);

    let names: HashSet<&str> = first
        .output
        .ingredients_list
        .iter()
        .map(String::as_str)
        .collect();
    let other: HashSet<&str> = second
        .output
        .ingredients_list
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(names, other);
    assert!(first.output.critique.starts_with("Critique (demo): "));
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
    let pipeline = std::sync::Arc::new(ChefPipeline::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pipeline = pipeline.clone();
            std::thread::spawn(move || {
                pipeline
                    .run(UserInput::new(format!("item{}", i)).with_cultures(["x"]))
                    .expect("placeholder pipeline never fails")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.join().expect("thread panicked");
        assert!(output.ingredients_list.contains(&format!("item{}", i)));
    }
}
