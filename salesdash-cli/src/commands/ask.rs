use anyhow::Result;
use colored::Colorize;
use salesdash_core::{DashboardApi, DashboardConfig, DashboardState, FetchGateway, SalesDashError};

pub async fn handle_ask_command(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        return Err(SalesDashError::EmptyQuestion.into());
    }

    let config = DashboardConfig::load()?;
    let gateway = FetchGateway::new(&config.api)?;

    let mut state = DashboardState::default();
    state.set_question(question);

    println!("{} {}", "Q:".cyan().bold(), state.question());

    let result = gateway.ask_question(state.question()).await;
    let failed = result.is_err();
    state.apply_answer(result);

    match state.render().answer {
        Some(answer) if failed => println!("{} {}", "A:".cyan().bold(), answer.red()),
        Some(answer) => println!("{} {}", "A:".cyan().bold(), answer),
        None => println!("{}", "(no answer)".dimmed()),
    }

    Ok(())
}
