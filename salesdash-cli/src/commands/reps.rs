use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use salesdash_core::{
    DashboardApi, DashboardConfig, DashboardState, DealLine, FetchGateway, RepCard, RepsSection,
};

use super::OutputFormat;

pub async fn handle_reps_command(format: OutputFormat) -> Result<()> {
    let config = DashboardConfig::load()?;
    let gateway = FetchGateway::new(&config.api)?;

    let mut state = DashboardState::default();
    state.begin_mount();
    let result = gateway.fetch_sales_reps().await;
    state.apply_sales_reps(result);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(state.sales_reps())?);
        return Ok(());
    }

    println!("{}", "Sales Representatives".cyan().bold());
    println!("{}", "═".repeat(60).dimmed());
    println!();

    let page = state.render();
    match &page.reps {
        RepsSection::Cards(cards) => {
            for card in cards {
                print_card(card);
            }
            println!("  Total: {} representatives", cards.len());
        }
        section => {
            if let Some(message) = section.message() {
                println!("{}", message.yellow());
            }
        }
    }

    Ok(())
}

fn print_card(card: &RepCard) {
    println!("{}", card.name.bold());
    println!("  {} {}", "Role:".dimmed(), card.role);

    if let Some(message) = card.deals.message() {
        println!("  {}", message.yellow());
        println!();
        return;
    }

    println!("{}", deals_table(card.deals.lines()));
    println!();
}

fn deals_table(lines: &[DealLine]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Client").fg(comfy_table::Color::Cyan),
            Cell::new("Status").fg(comfy_table::Color::Cyan),
            Cell::new("Value").fg(comfy_table::Color::Cyan),
        ]);

    for line in lines {
        table.add_row(vec![
            Cell::new(&line.client),
            Cell::new(&line.status).fg(status_color(&line.status)),
            Cell::new(&line.value),
        ]);
    }

    table
}

fn status_color(status: &str) -> comfy_table::Color {
    match status.to_lowercase().as_str() {
        "closed won" | "won" => comfy_table::Color::Green,
        "closed lost" | "lost" => comfy_table::Color::Red,
        _ => comfy_table::Color::Yellow,
    }
}
