// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - list: fetch once (optionally filtered), print the launch cards, exit
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
//
// With no subcommand the TUI starts (or `list` runs with no filters when
// LAUNCHDECK_NO_TUI is set).

use crate::api::{use_api, ApiProvider, FilterChange, Launch, LAUNCH_YEARS};
use crate::config::{Config, VERSION};
use crate::front_page::{filter_launches, FrontPage, TITLE};
use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::io::Write;

/// launchdeck - browse SpaceX launches from the terminal
#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(version = VERSION)]
#[command(about = "Browse SpaceX launch programs with year and outcome filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch launches once and print them
    List(ListArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only launches from this year (2006-2020)
    #[arg(long, value_parser = PossibleValuesParser::new(LAUNCH_YEARS))]
    pub year: Option<String>,

    /// Only successful (true) or failed (false) launches
    #[arg(long, value_name = "BOOL")]
    pub launch_success: Option<bool>,

    /// Only launches whose first core landed (true) or didn't (false)
    #[arg(long, value_name = "BOOL")]
    pub land_success: Option<bool>,

    /// Case-insensitive mission name search, applied after fetching
    #[arg(long, default_value = "")]
    pub search: String,

    /// Print the matching records as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Filter changes in the order the front page would apply them
    pub fn filter_changes(&self) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        if let Some(year) = &self.year {
            changes.push(FilterChange::LaunchYear(year.clone()));
        }
        if let Some(value) = self.launch_success {
            changes.push(FilterChange::LaunchSuccess(value));
        }
        if let Some(value) = self.land_success {
            changes.push(FilterChange::LandSuccess(value));
        }
        changes
    }
}

/// Handle the synchronous `config` command. Returns true if handled (exit after).
pub fn handle_config_command(command: &Commands) -> bool {
    let Commands::Config { show, reset, path } = command else {
        return false;
    };

    if *path {
        handle_config_path();
    } else if *show {
        handle_config_show();
    } else if *reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: launchdeck config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    true
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("limit = {}", config.limit);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("fallback_patch_url = {:?}", config.fallback_patch_url);
    println!("theme = {:?}", config.theme);
    println!("tui = {}", config.enable_tui);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir);
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

// ─────────────────────────────────────────────────────────────────────────────
// list
// ─────────────────────────────────────────────────────────────────────────────

/// What `list` prints: the page plus the records behind its cards
pub struct ListOutput {
    pub page: FrontPage,
    pub records: Vec<Launch>,
}

/// Mount a provider, apply the requested filters, and read the result
///
/// Each fetch is awaited before the next change is applied so the last
/// requested filters are also the last to resolve. A failed fetch is
/// logged by the provider and leaves the previous (possibly empty) data.
pub async fn collect_list(config: &Config, args: &ListArgs) -> Result<ListOutput> {
    let (provider, _events) = ApiProvider::new(config).context("Failed to build HTTP client")?;

    provider
        .mount()
        .await
        .context("Initial fetch task panicked")?;

    provider
        .provide_async(async {
            let api = use_api()?;
            for change in args.filter_changes() {
                api.handle_filter_change(change)
                    .await
                    .context("Fetch task panicked")?;
            }

            let page = FrontPage::from_context(&args.search, &config.fallback_patch_url)?;
            let records = filter_launches(&api.launch_data(), &args.search)
                .into_iter()
                .cloned()
                .collect();
            Ok::<_, anyhow::Error>(ListOutput { page, records })
        })
        .await
}

/// Run `launchdeck list`
pub async fn run_list(config: &Config, args: &ListArgs) -> Result<()> {
    let output = collect_list(config, args).await?;

    let text = if args.json {
        serde_json::to_string_pretty(&output.records).context("Failed to encode launches")?
    } else {
        render_cards(&output.page)
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text).context("Failed to write output")?;
    Ok(())
}

/// Plain-text rendering of the front page
pub fn render_cards(page: &FrontPage) -> String {
    let mut out = format!(
        "{}\nFilters: {} | {} of {} launches\n",
        TITLE,
        page.filters.summary(),
        page.cards.len(),
        page.fetched
    );

    for card in &page.cards {
        out.push('\n');
        out.push_str(&card.text());
        out.push_str("\nPatch: ");
        out.push_str(&card.patch.src);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::mock_launches_json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            api_url: server.uri(),
            ..Config::default()
        }
    }

    #[test]
    fn cli_parses_list_filters() {
        let cli = Cli::try_parse_from([
            "launchdeck",
            "list",
            "--year",
            "2019",
            "--land-success",
            "false",
            "--search",
            "mission",
        ])
        .unwrap();

        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(
            args.filter_changes(),
            vec![
                FilterChange::LaunchYear("2019".into()),
                FilterChange::LandSuccess(false),
            ]
        );
        assert_eq!(args.search, "mission");
        assert!(!args.json);
    }

    #[test]
    fn cli_rejects_year_outside_tags() {
        assert!(Cli::try_parse_from(["launchdeck", "list", "--year", "2021"]).is_err());
        assert!(Cli::try_parse_from(["launchdeck", "list", "--launch-success", "maybe"]).is_err());
    }

    #[test]
    fn config_command_is_recognised() {
        let cli = Cli::try_parse_from(["launchdeck", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
        assert!(!handle_config_command(&Commands::List(ListArgs::default())));
    }

    #[tokio::test]
    async fn list_applies_filters_and_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/launches"))
            .and(query_param_is_missing("launch_year"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/launches"))
            .and(query_param("launch_year", "2019"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_launches_json()))
            .mount(&server)
            .await;

        let args = ListArgs {
            year: Some("2019".into()),
            search: "mission 2".into(),
            ..ListArgs::default()
        };
        let output = collect_list(&config_for(&server), &args).await.unwrap();

        assert_eq!(output.page.filters.launch_year, "2019");
        assert_eq!(output.page.fetched, 2);
        assert_eq!(output.page.cards.len(), 1);
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].mission_name, "Mission 2");

        let text = render_cards(&output.page);
        assert!(text.contains("Filters: year 2019 | 1 of 2 launches"));
        assert!(text.contains("Mission 2 #2\nMission IDs: XYZ789"));
    }

    #[tokio::test]
    async fn list_survives_failed_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/launches"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let output = collect_list(&config_for(&server), &ListArgs::default())
            .await
            .unwrap();
        assert!(output.page.cards.is_empty());
        assert!(render_cards(&output.page).contains("0 of 0 launches"));
    }
}
