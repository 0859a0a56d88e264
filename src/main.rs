// Main entry point
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use polyglot::application::{aggregate, settings};
use polyglot::infrastructure::config::{self, load_config, Logging};
use polyglot::interfaces::cli::Cli;
use polyglot::presentation::render;
use polyglot::state::AppState;
use std::io::IsTerminal;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let state = AppState::new(config)?;

    if let Some(provider) = cli.set_key {
        let secret = read_secret(&format!("{} API key: ", provider))?;
        settings::save_credential(state.credentials.as_ref(), provider, &secret)?;
        println!("{}", format!("Saved {} API key", provider).green());
        return Ok(());
    }
    if let Some(provider) = cli.delete_key {
        settings::delete_credential(state.credentials.as_ref(), provider)?;
        println!("Removed {} API key", provider);
        return Ok(());
    }
    if cli.status {
        let statuses = settings::credential_status(state.credentials.as_ref());
        let config_path = config::get_config_path().map(|p| p.display().to_string());
        print!("{}", render::format_status(&statuses, config_path));
        return Ok(());
    }

    if cli.text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let text = cli.text.join(" ");
    let from = cli
        .from
        .clone()
        .unwrap_or_else(|| state.config.source_language.clone());
    let to = cli
        .to
        .clone()
        .unwrap_or_else(|| state.config.target_language.clone());

    let spinner = start_spinner();
    let round = aggregate::translate_text(&state, &text, &from, &to, &cli.providers);

    let outcomes = tokio::select! {
        result = round => result,
        _ = tokio::signal::ctrl_c() => {
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            eprintln!("\nInterrupted");
            return Ok(());
        }
    };
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let outcomes = outcomes?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print!("{}", render::format_outcomes(&outcomes));
    }

    Ok(())
}

/// Spinner on stderr while the round is in flight; skipped when not a terminal.
fn start_spinner() -> Option<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Translating...");
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Read one line from stdin without echoing it into logs or history.
fn read_secret(prompt: &str) -> anyhow::Result<String> {
    use std::io::Write;

    if std::io::stdin().is_terminal() {
        eprint!("{}", prompt);
        std::io::stderr().flush()?;
    }
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_level()));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
