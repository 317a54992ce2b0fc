use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use card_recorder::config::Config;
use card_recorder::domain::StageTable;
use card_recorder::services::{
    compile_comment, window, BusinessDayAccountant, CardRecorder, HolidayCalendar,
};
use card_recorder::trello::TrelloClient;

#[derive(Parser, Debug)]
#[command(name = "card-recorder", version, about = "Annotates kanban cards with elapsed business-day status comments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full per-card recording cycle across a board
    Record {
        /// Board id (defaults to TRELLO_BOARD_ID)
        #[arg(long)]
        board: Option<String>,
        /// Stage definition file (defaults to STAGES_FILE or data/stages.yaml)
        #[arg(long)]
        stages: Option<String>,
    },
    /// Render a status comment without publishing it
    Preview {
        /// Stage name as registered in the stage table
        #[arg(long)]
        stage: String,
        /// Window start, MM/DD/YYYY
        #[arg(long)]
        from: String,
        /// Window end, MM/DD/YYYY
        #[arg(long)]
        to: String,
        #[arg(long)]
        stages: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,card_recorder=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Record { board, stages } => record(board, stages).await,
        Command::Preview {
            stage,
            from,
            to,
            stages,
        } => preview(&stage, &from, &to, stages),
    }
}

async fn record(board: Option<String>, stages_path: Option<String>) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let board_id = board
        .or_else(|| config.board_id.clone())
        .context("no board id: pass --board or set TRELLO_BOARD_ID")?;
    let stages = load_stages(stages_path.as_deref().unwrap_or(&config.stages_file))?;

    let accountant = BusinessDayAccountant::new(HolidayCalendar::for_year(Utc::now().year()));
    let api = TrelloClient::new(reqwest::Client::new(), &config);
    let recorder = CardRecorder::new(api, stages, accountant);

    tracing::info!(board_id = board_id.as_str(), "starting card recorder");
    let summary = recorder.run(&board_id).await?;
    tracing::info!(
        recorded = summary.recorded,
        failed = summary.failed,
        "card recorder complete"
    );

    if summary.failed > 0 {
        anyhow::bail!("{} card(s) failed to record", summary.failed);
    }
    Ok(())
}

fn preview(
    stage: &str,
    from: &str,
    to: &str,
    stages_path: Option<String>,
) -> anyhow::Result<()> {
    let stages = load_stages(stages_path.as_deref().unwrap_or("data/stages.yaml"))?;
    let from_date = window::parse_mdy(from)?;
    let to_date = window::parse_mdy(to)?;

    let accountant = BusinessDayAccountant::new(HolidayCalendar::for_year(Utc::now().year()));
    let artifact = compile_comment(
        &stages,
        &accountant,
        "preview",
        stage,
        stage,
        from_date,
        to_date,
    )?;

    println!("{}", artifact.text);
    Ok(())
}

fn load_stages(path: &str) -> anyhow::Result<StageTable> {
    StageTable::load(Path::new(path))
        .with_context(|| format!("failed to load stage table from {}", path))
}
