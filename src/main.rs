use std::path::Path;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use menu_maker_rs::catalog::RecipeCatalog;
use menu_maker_rs::cli::{Cli, Command};
use menu_maker_rs::error::Result;
use menu_maker_rs::interface::{
    collect_plan_request, display_menu_plan, display_shopping_list, prompt_yes_no,
};
use menu_maker_rs::models::{InventoryItem, MenuPlan};
use menu_maker_rs::planner::MenuPlanner;
use menu_maker_rs::remote::{generate_with_fallback, MenuApiClient, MenuApiConfig};
use menu_maker_rs::shopping;
use menu_maker_rs::state::{load_inventory, load_plan, save_plan};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { output, remote } => cmd_plan(&cli.inventory, &output, remote).await,
        Command::ShoppingList { plan, csv } => {
            cmd_shopping_list(&cli.inventory, &plan, csv.as_deref())
        }
    }
}

fn read_inventory(path: &str) -> Result<Vec<InventoryItem>> {
    if !Path::new(path).exists() {
        println!("No inventory file at {}; planning with an empty pantry.", path);
        return Ok(Vec::new());
    }
    let inventory = load_inventory(path)?;
    println!("Loaded {} inventory items", inventory.len());
    Ok(inventory)
}

/// Generate a menu plan and optionally save it.
async fn cmd_plan(inventory_path: &str, output: &str, remote: bool) -> Result<()> {
    let inventory = read_inventory(inventory_path)?;
    let request = collect_plan_request(&inventory)?;

    let client = if remote {
        match remote_config_from_env() {
            Some(config) => Some(MenuApiClient::new(config)?),
            None => {
                println!("MENU_API_ENDPOINT / MENU_API_KEY not set; using the local planner.");
                None
            }
        }
    } else {
        None
    };

    let planner = MenuPlanner::new(RecipeCatalog::builtin());
    let mut rng = rand::thread_rng();

    let recipes =
        generate_with_fallback(client.as_ref(), &planner, &request, &inventory, &mut rng).await?;
    let plan = MenuPlan::new(
        recipes,
        Local::now().date_naive(),
        request.start_date,
        request.end_date,
    );

    display_menu_plan(&plan);

    if prompt_yes_no("Save this plan?", true)? {
        save_plan(output, &plan)?;
        println!("Plan saved to {}.", output);
    }

    Ok(())
}

fn remote_config_from_env() -> Option<MenuApiConfig> {
    let endpoint = std::env::var("MENU_API_ENDPOINT").ok()?;
    let api_key = std::env::var("MENU_API_KEY").ok()?;
    Some(MenuApiConfig { endpoint, api_key })
}

/// Derive and display the shopping list for a saved plan.
fn cmd_shopping_list(inventory_path: &str, plan_path: &str, csv: Option<&str>) -> Result<()> {
    if !Path::new(plan_path).exists() {
        eprintln!("Menu plan not found: {}", plan_path);
        eprintln!("Generate one with the `plan` command first.");
        return Ok(());
    }

    let plan = load_plan(plan_path)?;
    let inventory = read_inventory(inventory_path)?;

    let list = shopping::aggregate(&plan, &inventory);
    display_shopping_list(&list);

    if let Some(path) = csv {
        shopping::write_csv(&list, Path::new(path))?;
        println!("Shopping list exported to {}.", path);
    }

    Ok(())
}
