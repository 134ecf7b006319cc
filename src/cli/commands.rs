//! CLI command definitions for fusion-chef.

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use crate::agents::{ChefOutput, PipelineEvent, Restrictions, UserInput};
use crate::pipeline::{ChefConfig, ChefPipeline, ChefRun, CriticPolicy};

const DEFAULT_COOK_INGREDIENTS: &str = "ไก่, ข้าว, พริก";
const DEFAULT_COOK_CULTURES: [&str; 2] = ["ไทย", "เม็กซิกัน"];
const DEFAULT_COOK_EXTREME: &str = "จิ้งหรีด";
const DEFAULT_COOK_LEVEL: u8 = 4;

/// Extreme fusion cuisine chef.
#[derive(Parser)]
#[command(name = "fusion-chef")]
#[command(about = "Generate extreme fusion recipes with a pipeline of chef agents")]
#[command(version)]
#[command(
    long_about = "fusion-chef turns a list of ingredients, cuisines and an extreme ingredient into a fusion dish.\n\nExample usage:\n  fusion-chef serve --bind 0.0.0.0:8501\n  fusion-chef cook --ingredients \"a, b\" --culture x --extreme z --level 2"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Launch the kitchen web front end.
    Serve(ServeArgs),

    /// Run the pipeline once and print the dish.
    Cook(CookArgs),
}

/// Arguments for `fusion-chef serve`.
///
/// Unset flags fall back to the `CHEF_*` environment variables.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(short, long)]
    pub bind: Option<String>,

    /// When the food critic runs: never, always or above:N.
    #[arg(long)]
    pub critic: Option<CriticPolicy>,

    /// YAML file overriding the form's cultures and defaults.
    #[arg(short, long)]
    pub kitchen: Option<String>,
}

/// Arguments for `fusion-chef cook`.
#[derive(Parser, Debug)]
pub struct CookArgs {
    /// Comma-separated main ingredients.
    #[arg(short, long, default_value = DEFAULT_COOK_INGREDIENTS)]
    pub ingredients: String,

    /// Cuisine to fuse; repeat for several.
    #[arg(short, long = "culture")]
    pub cultures: Vec<String>,

    /// Extreme ingredient the dish must use.
    #[arg(short, long, default_value = DEFAULT_COOK_EXTREME)]
    pub extreme: String,

    /// Extremeness level, 1-5.
    #[arg(long, default_value_t = DEFAULT_COOK_LEVEL, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub level: u8,

    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub vegan: bool,

    #[arg(long)]
    pub nut_allergy: bool,

    #[arg(long)]
    pub not_spicy: bool,

    /// When the food critic runs: never, always or above:N.
    #[arg(long)]
    pub critic: Option<CriticPolicy>,

    /// Print the full pipeline state alongside the dish.
    #[arg(long)]
    pub show_state: bool,

    /// Output JSON to stdout instead of text.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl CookArgs {
    /// Builds the pipeline input from the flags.
    ///
    /// No `--culture` flag means the sample cuisines.
    pub fn to_user_input(&self) -> UserInput {
        let cultures: Vec<String> = if self.cultures.is_empty() {
            DEFAULT_COOK_CULTURES.iter().map(|c| c.to_string()).collect()
        } else {
            self.cultures.clone()
        };

        UserInput::new(self.ingredients.clone())
            .with_cultures(cultures)
            .with_extreme_ingredient(self.extreme.clone())
            .with_extremeness_level(self.level)
            .with_restrictions(Restrictions {
                vegetarian: self.vegetarian,
                vegan: self.vegan,
                nut_allergy: self.nut_allergy,
                not_spicy: self.not_spicy,
            })
    }
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve(args) => run_serve_command(args).await,
        Commands::Cook(args) => run_cook_command(args),
    }
}

async fn run_serve_command(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ChefConfig::from_env()?;
    if let Some(bind) = args.bind {
        config = config.with_bind_addr(bind);
    }
    if let Some(policy) = args.critic {
        config = config.with_critic_policy(policy);
    }
    if let Some(kitchen) = args.kitchen {
        config = config.with_kitchen_file(kitchen);
    }

    crate::web::serve(config).await
}

fn run_cook_command(args: CookArgs) -> anyhow::Result<()> {
    let mut config = ChefConfig::from_env()?;
    if let Some(policy) = args.critic {
        config = config.with_critic_policy(policy);
    }
    config.validate()?;

    let pipeline = ChefPipeline::from_config(&config);
    let input = args.to_user_input();
    info!(cultures = ?input.cultures, level = args.level, "Cooking from the command line");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let result = pipeline.run_with_report(input, Some(&tx));
    drop(tx);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    let run = result?;

    if args.json {
        let json_output = if args.show_state {
            serde_json::to_string_pretty(&run)
        } else {
            serde_json::to_string_pretty(&run.output)
        }
        .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    for event in &events {
        if let Some(line) = describe_event(event) {
            println!("{}", line);
        }
    }
    println!();
    print!("{}", render_dish(&run.output));

    if args.show_state {
        let state = serde_json::to_string_pretty(&run.state)
            .map_err(|e| anyhow::anyhow!("Failed to serialize pipeline state: {}", e))?;
        println!();
        println!("Pipeline state:");
        println!("{}", state);
    }

    print_run_footer(&run);
    Ok(())
}

/// One progress line per stage event; `None` for run-level events.
fn describe_event(event: &PipelineEvent) -> Option<String> {
    match event {
        PipelineEvent::StageCompleted { stage, summary, .. } => {
            Some(format!("[done] {}: {}", stage, summary))
        }
        PipelineEvent::StageSkipped { stage, reason, .. } => {
            Some(format!("[skip] {}: {}", stage, reason))
        }
        PipelineEvent::StageFailed { stage, error, .. } => {
            Some(format!("[fail] {}: {}", stage, error))
        }
        PipelineEvent::StageStarted { .. }
        | PipelineEvent::PipelineCompleted { .. }
        | PipelineEvent::PipelineFailed { .. } => None,
    }
}

/// Human-readable rendering of a dish.
fn render_dish(output: &ChefOutput) -> String {
    let mut text = String::new();
    text.push_str(&format!("{}\n", output.menu_name));
    text.push_str(&format!("{}\n\n", "=".repeat(output.menu_name.chars().count())));
    text.push_str(&format!("Image: {}\n\n", output.image_url));

    text.push_str("Ingredients:\n");
    for ingredient in &output.ingredients_list {
        text.push_str(&format!("  - {}\n", ingredient));
    }

    text.push_str("\nSteps:\n");
    for step in output.cooking_steps.lines() {
        text.push_str(&format!("  {}\n", step));
    }

    text.push_str(&format!("\nWhy this dish: {}\n", output.chef_rationale));
    text.push_str(&format!("Drink: {}\n", output.drink_pairing));
    if !output.critique.is_empty() {
        text.push_str(&format!("Critique: {}\n", output.critique));
    }
    text
}

fn print_run_footer(run: &ChefRun) {
    println!();
    println!(
        "Run {} finished {} stages in {} ms",
        run.run_id,
        run.stages().len(),
        run.duration_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cook_args(extra: &[&str]) -> CookArgs {
        let mut args = vec!["fusion-chef", "cook"];
        args.extend_from_slice(extra);
        match Cli::try_parse_from(args).expect("should parse").command {
            Commands::Cook(args) => args,
            _ => panic!("Expected Cook command"),
        }
    }

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cook_command_defaults() {
        let args = cook_args(&[]);
        assert_eq!(args.ingredients, DEFAULT_COOK_INGREDIENTS);
        assert!(args.cultures.is_empty());
        assert_eq!(args.extreme, DEFAULT_COOK_EXTREME);
        assert_eq!(args.level, DEFAULT_COOK_LEVEL);
        assert!(args.critic.is_none());
        assert!(!args.json);
        assert!(!args.show_state);

        let input = args.to_user_input();
        assert_eq!(input.cultures, vec!["ไทย", "เม็กซิกัน"]);
        assert_eq!(input.extremeness_level, Some(4));
        assert_eq!(input.restrictions, Some(Restrictions::default()));
    }

    #[test]
    fn test_cook_command_with_all_options() {
        let args = cook_args(&[
            "-i",
            "a, b",
            "-c",
            "x",
            "--culture",
            "y",
            "-e",
            "z",
            "--level",
            "2",
            "--vegan",
            "--not-spicy",
            "--critic",
            "always",
            "--show-state",
            "-j",
        ]);
        assert_eq!(args.critic, Some(CriticPolicy::Always));
        assert!(args.show_state);
        assert!(args.json);

        let input = args.to_user_input();
        assert_eq!(input.ingredients, "a, b");
        assert_eq!(input.cultures, vec!["x", "y"]);
        assert_eq!(input.extreme_ingredient, "z");
        assert_eq!(input.extremeness_level, Some(2));
        let restrictions = input.restrictions.expect("restrictions are always set");
        assert_eq!(restrictions.active(), vec!["vegan", "not_spicy"]);
    }

    #[test]
    fn test_cook_rejects_out_of_range_level() {
        assert!(Cli::try_parse_from(["fusion-chef", "cook", "--level", "6"]).is_err());
        assert!(Cli::try_parse_from(["fusion-chef", "cook", "--level", "0"]).is_err());
    }

    #[test]
    fn test_serve_command_parses() {
        let cli = Cli::try_parse_from([
            "fusion-chef",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--critic",
            "above:3",
            "-k",
            "kitchen.yaml",
            "-l",
            "debug",
        ])
        .expect("should parse");
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000"));
                assert_eq!(args.critic, Some(CriticPolicy::AboveExtremeness(3)));
                assert_eq!(args.kitchen.as_deref(), Some("kitchen.yaml"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_bad_critic_policy_is_rejected() {
        assert!(Cli::try_parse_from(["fusion-chef", "serve", "--critic", "sometimes"]).is_err());
    }

    #[test]
    fn test_render_dish_lists_everything() {
        let output = ChefPipeline::new()
            .with_critic_policy(CriticPolicy::Always)
            .run(cook_args(&["-c", "x"]).to_user_input())
            .expect("pipeline never fails");
        let text = render_dish(&output);

        assert!(text.starts_with(&output.menu_name));
        assert!(text.contains(&output.image_url));
        for ingredient in &output.ingredients_list {
            assert!(text.contains(&format!("  - {}", ingredient)));
        }
        assert!(text.contains("Critique: "));
    }

    #[test]
    fn test_describe_event_skips_run_level_events() {
        assert!(describe_event(&PipelineEvent::pipeline_failed("boom")).is_none());
        let line = describe_event(&PipelineEvent::stage_skipped(
            crate::agents::PipelineStage::FoodCritique,
            "policy",
        ))
        .expect("stage event");
        assert_eq!(line, "[skip] AI Food Critic: policy");
    }
}
