use clap::{Parser, Subcommand};

/// MenuMaker — weekly dinner planning with pantry-aware shopping lists.
#[derive(Parser, Debug)]
#[command(name = "menu_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the inventory JSON file.
    #[arg(short, long, default_value = "inventory.json")]
    pub inventory: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a dinner menu plan for a date range.
    Plan {
        /// Where to save the generated plan.
        #[arg(long, default_value = "menu_plan.json")]
        output: String,

        /// Use the remote menu service (MENU_API_ENDPOINT / MENU_API_KEY).
        #[arg(long)]
        remote: bool,
    },

    /// Derive a shopping list from a saved menu plan.
    ShoppingList {
        /// Path to the saved plan.
        #[arg(long, default_value = "menu_plan.json")]
        plan: String,

        /// Export the list to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            output: "menu_plan.json".to_string(),
            remote: false,
        }
    }
}
