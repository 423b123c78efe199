use chrono::{Duration, Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::InventoryItem;
use crate::planner::PlanRequest;

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| MenuError::InvalidInput(format!("Invalid date: {}", input)))
}

/// Prompt for the number of people to cook for.
pub fn prompt_household_size() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many people are you cooking for?")
        .default("4".to_string())
        .interact_text()?;

    let size: u32 = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if size == 0 {
        return Err(MenuError::InvalidInput(
            "Household size must be at least 1".to_string(),
        ));
    }

    Ok(size)
}

/// Prompt for the planning range: a start date and a day count.
pub fn prompt_date_range() -> Result<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();

    let start_input: String = Input::new()
        .with_prompt("Start date (YYYY-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .interact_text()?;
    let start = parse_date(&start_input)?;

    let days_input: String = Input::new()
        .with_prompt("How many days to plan?")
        .default("7".to_string())
        .interact_text()?;
    let days: u32 = days_input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if days == 0 {
        return Err(MenuError::InvalidInput(
            "Plan at least one day".to_string(),
        ));
    }

    let end = start + Duration::days(days as i64 - 1);
    Ok((start, end))
}

/// Prompt for busy dates inside the range; empty input finishes the list.
pub fn prompt_busy_dates(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    let mut busy = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Busy date (YYYY-MM-DD, or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let date = match parse_date(input) {
            Ok(d) => d,
            Err(_) => {
                println!("Not a date: '{}'", input);
                continue;
            }
        };

        if date < start || date > end {
            println!("{} is outside the planned range", date);
            continue;
        }

        if !busy.contains(&date) {
            busy.push(date);
            println!("Added: {}", date);
        }
    }

    Ok(busy)
}

/// Prompt for must-use ingredients with fuzzy matching against the pantry.
pub fn prompt_must_use(inventory: &[InventoryItem]) -> Result<Vec<String>> {
    let mut must_use = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient to use up (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first
        let exact_match = inventory.iter().find(|item| item.name == input);

        if let Some(item) = exact_match {
            must_use.push(item.name.clone());
            println!("Added: {}", item.name);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&InventoryItem, f64)> = inventory
            .iter()
            .map(|item| (item, jaro_winkler(&item.name, input)))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No pantry item found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let item = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            if confirm {
                must_use.push(item.name.clone());
                println!("Added: {}", item.name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(item, _)| item.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                must_use.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(must_use)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all inputs for a generation run.
pub fn collect_plan_request(inventory: &[InventoryItem]) -> Result<PlanRequest> {
    let household_size = prompt_household_size()?;
    let (start, end) = prompt_date_range()?;

    let mut request = PlanRequest::new(household_size, start, end);

    request.diet_mode = prompt_yes_no("Diet mode (skip fried dishes)?", false)?;

    let time_input: String = Input::new()
        .with_prompt("Max cooking time per day in minutes (Enter for default)")
        .allow_empty(true)
        .interact_text()?;
    if !time_input.trim().is_empty() {
        let minutes: u32 = time_input
            .trim()
            .parse()
            .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;
        request.max_cooking_time = Some(minutes);
    }

    request.busy_dates = prompt_busy_dates(start, end)?;

    request.preferences = Input::new()
        .with_prompt("Household preferences (allergies, dislikes; optional)")
        .allow_empty(true)
        .interact_text()?;

    if !inventory.is_empty() {
        request.must_use_ingredients = prompt_must_use(inventory)?;
    }

    Ok(request)
}
