//! Yatra CLI - Temple guide for Mathura and Vrindavan
//!
//! Browses the built-in temple directory and asks the Yatra backend for
//! weather and guide answers, with demo answers when the backend is down.

mod api;
mod config;
mod guide;
mod session;
mod temples;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use yatra::{Location, WeatherReport};

use api::YatraClient;
use config::Config;
use guide::Guide;
use session::Session;
use temples::{web_search_url, Temple, TempleDirectory};

#[derive(Parser)]
#[command(name = "yatra")]
#[command(about = "Yatra CLI - Temple guide for Mathura and Vrindavan", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend URL (overrides the config file)
    #[arg(long, global = true, env = "YATRA_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List temples
    Temples {
        /// Sort order (directory order if omitted)
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Search temples by name or description
    Search {
        /// Search text
        query: Vec<String>,
        /// Print a web search link instead
        #[arg(long)]
        web: bool,
    },

    /// Show a temple with its current weather
    Visit {
        /// Temple id (see `yatra temples`)
        id: String,
    },

    /// Current weather at coordinates (defaults to the last visited temple)
    Weather {
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// Ask the guide a single question
    Ask {
        /// Question text
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Interactive chat with the guide
    Chat {
        /// Temple to talk about (defaults to the last visited temple)
        #[arg(short, long)]
        temple: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrder {
    Name,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the backend URL
    SetUrl {
        /// e.g. http://localhost:5000
        url: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load()?;
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.base_url.clone());

    let mut session = Session::new(
        Guide::new(YatraClient::new(&base_url)),
        TempleDirectory::default(),
    );
    if let Some(id) = &config.last_temple {
        session.select(id);
    }

    match cli.command {
        Commands::Temples { sort } => cmd_temples(&session, sort),
        Commands::Search { query, web } => cmd_search(&session, &query.join(" "), web),
        Commands::Visit { id } => cmd_visit(&mut session, &mut config, &id).await,
        Commands::Weather { lat, lon } => cmd_weather(&session, lat, lon).await,
        Commands::Ask { message } => cmd_ask(&session, &message.join(" ")).await,
        Commands::Chat { temple } => cmd_chat(&mut session, temple.as_deref()).await,
        Commands::Config { action } => cmd_config(&mut config, action, &base_url).await,
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_temples(session: &Session, sort: Option<SortOrder>) -> Result<()> {
    let temples: Vec<&Temple> = match sort {
        Some(SortOrder::Name) => session.directory().sorted_by_name(),
        None => session.directory().all().iter().collect(),
    };

    println!("{}", "Temples:".bold());
    print_temple_list(&temples, session.selected());

    println!("\n{}", "Visit one with:".dimmed());
    println!("  yatra visit <id>");

    Ok(())
}

fn cmd_search(session: &Session, query: &str, web: bool) -> Result<()> {
    if web {
        if query.trim().is_empty() {
            bail!("Nothing to search for");
        }
        println!("{}", web_search_url(query));
        return Ok(());
    }

    let hits = session.directory().search(query);

    if hits.is_empty() {
        println!("No temples match '{}'", query);
        println!("\n{}", "Search the web instead:".dimmed());
        println!("  {}", web_search_url(query));
        return Ok(());
    }

    println!(
        "{} results for '{}':",
        hits.len().to_string().green(),
        query
    );
    print_temple_list(&hits, session.selected());

    Ok(())
}

async fn cmd_visit(session: &mut Session, config: &mut Config, id: &str) -> Result<()> {
    let temple = session
        .select(id)
        .cloned()
        .with_context(|| format!("Unknown temple '{}'. Run 'yatra temples' to list ids.", id))?;

    config.set_last_temple(temple.id);
    config.save()?;

    println!("{}", temple.name.cyan().bold());
    println!("  {}", temple.desc);
    println!("\n{}", temple.long);
    println!(
        "\n  {} {:.4}, {:.4}",
        "Location:".dimmed(),
        temple.lat,
        temple.lon
    );

    let report = session.guide().weather_for(&temple.location()).await;
    print_weather(&report);

    println!(
        "\n{} Radhe Radhe! Ask me about {} with: yatra chat",
        "🙏".yellow(),
        temple.name
    );

    Ok(())
}

async fn cmd_weather(session: &Session, lat: Option<f64>, lon: Option<f64>) -> Result<()> {
    let location = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Location::new(lat, lon)?),
        _ => None,
    };

    let report = session
        .weather(location)
        .await
        .context("Provide --lat and --lon, or visit a temple first")?;

    print_weather(&report);
    Ok(())
}

async fn cmd_ask(session: &Session, message: &str) -> Result<()> {
    let message = message.trim();
    if message.is_empty() {
        bail!("Message is empty");
    }

    let exchange = session.ask(message).await;
    println!("{}", exchange.reply_text);

    Ok(())
}

async fn cmd_chat(session: &mut Session, temple: Option<&str>) -> Result<()> {
    if let Some(id) = temple {
        session
            .select(id)
            .with_context(|| format!("Unknown temple '{}'", id))?;
    }

    match session.selected() {
        Some(t) => println!("{} {}", "Guide chat about".bold(), t.name.cyan()),
        None => println!("{}", "Guide chat".bold()),
    }
    println!("{}", "Type 'exit' to leave.".dimmed());

    loop {
        let line: String = match Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => break,
        };

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "exit" | "quit") {
            break;
        }

        let exchange = session.ask(message).await;
        println!("{} {}", "Guide:".green().bold(), exchange.reply_text);
    }

    Ok(())
}

async fn cmd_config(
    config: &mut Config,
    action: Option<ConfigAction>,
    base_url: &str,
) -> Result<()> {
    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url)?;
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", base_url);
            println!(
                "  Last Temple: {}",
                config.last_temple.as_deref().unwrap_or("None").cyan()
            );

            print!("  Backend: ");
            let client = YatraClient::new(base_url);
            match client.health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => println!("{}", "Unreachable (demo mode)".yellow()),
            }
        }
    }

    Ok(())
}

// ============================================
// Output helpers
// ============================================

fn print_temple_list(temples: &[&Temple], selected: Option<&Temple>) {
    for temple in temples {
        let marker = if selected.map(|s| s.id) == Some(temple.id) {
            " (last visited)".green().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            temple.id.dimmed(),
            temple.name.cyan(),
            marker
        );
        println!("      {}", truncate_string(temple.desc, 70).dimmed());
    }
}

fn print_weather(report: &WeatherReport) {
    println!(
        "\n{} {}",
        "Weather in".bold(),
        report.location_name.cyan()
    );
    println!("  {}", report.summary());
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("Radhe Radhe", 20), "Radhe Radhe");
        assert_eq!(truncate_string("वृन्दावन धाम", 4), "वृन्...");
    }

    #[test]
    fn test_cli_parses_weather_coordinates() {
        let cli =
            Cli::try_parse_from(["yatra", "weather", "--lat", "27.58", "--lon", "77.69"]).unwrap();
        match cli.command {
            Commands::Weather { lat, lon } => {
                assert_eq!(lat, Some(27.58));
                assert_eq!(lon, Some(77.69));
            }
            _ => panic!("expected weather command"),
        }
    }

    #[test]
    fn test_cli_weather_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["yatra", "weather", "--lat", "27.58"]).is_err());
    }

    #[test]
    fn test_cli_ask_joins_words() {
        let cli = Cli::try_parse_from(["yatra", "ask", "where", "to", "eat"]).unwrap();
        match cli.command {
            Commands::Ask { message } => assert_eq!(message.join(" "), "where to eat"),
            _ => panic!("expected ask command"),
        }
    }
}
