use std::error::Error;
use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aid_report::report::{Report, ReportMode, build_report, render_ansi};
use aid_report::utils::settings_persistence::SETTINGS_FILE;
use aid_report::{
    LogSnapshot, MobFilter, RecordedXp, ReportSettings, load_report_settings, load_snapshot, mob_groups,
    parse_selection, save_report_settings,
};

/// Aid-action reports for a combat log snapshot
#[derive(Parser)]
#[command(name = "aid_report")]
#[command(about = "Buff, healing and status-removal reports with cast intervals", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (spell families, interaction cap, column width)
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one report mode, or every mode when none is given
    Report {
        /// Snapshot JSON exported from the log parser
        #[arg(long)]
        snapshot: PathBuf,

        /// buffs-used, buffs-received, recovery, curing, average-curing or status-curing
        #[arg(long, value_parser = parse_mode)]
        mode: Option<ReportMode>,

        /// all, all-xp, battle:<id>, battles:<ids>, mob:<name> or mob:<name> (<xp>)
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: MobFilter,

        /// Print the aggregated numbers as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// List the mob groups a `mob:` filter can select
    ListMobs {
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Write the default settings file
    InitSettings {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_mode(value: &str) -> Result<ReportMode, String> {
    value.parse::<ReportMode>().map_err(|e| e.to_string())
}

fn parse_filter(value: &str) -> Result<MobFilter, String> {
    parse_selection(value).map_err(|e| e.to_string())
}

fn open_snapshot(path: &Path, settings: &ReportSettings) -> Result<LogSnapshot, Box<dyn Error>> {
    let mut snapshot = load_snapshot(path)?;
    if let Some(max) = settings.max_interactions {
        snapshot.retain_recent(max);
        info!(max, "capped to most recent interactions");
    }
    Ok(snapshot)
}

fn print_report(report: &Report, no_color: bool) {
    if no_color {
        print!("{}", report.plain_text());
    } else {
        print!("{}", render_ansi(&report.segments));
    }
}

/// Directives from `RUST_LOG` when set and valid, `warn` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Report { snapshot, mode, filter, json, no_color } => {
            let settings = load_report_settings(&cli.settings);
            let snapshot = open_snapshot(&snapshot, &settings)?;
            let modes: Vec<ReportMode> = match mode {
                Some(mode) => vec![mode],
                None => ReportMode::ALL.to_vec(),
            };

            let mut reports = Vec::with_capacity(modes.len());
            for mode in modes {
                reports.push(build_report(&snapshot, &filter, mode, &settings, &RecordedXp)?);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    if reports.len() > 1 {
                        println!("== {} ==", report.mode.title());
                    }
                    print_report(report, no_color);
                }
            }
        }
        Command::ListMobs { snapshot } => {
            let settings = load_report_settings(&cli.settings);
            let snapshot = open_snapshot(&snapshot, &settings)?;
            let groups = mob_groups(&snapshot, &RecordedXp);
            if groups.is_empty() {
                warn!("snapshot has no battles with a known enemy");
            }
            for group in groups {
                println!("{:<32} {:>4} battles", group.label(), group.battles);
            }
        }
        Command::InitSettings { force } => {
            if cli.settings.exists() && !force {
                return Err(format!("{} already exists, pass --force to overwrite", cli.settings.display()).into());
            }
            save_report_settings(&ReportSettings::default(), &cli.settings)?;
            println!("Wrote {}", cli.settings.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;
    use super::*;

    #[test]
    fn rust_log_level_is_not_capped() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("aid_report=trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn missing_rust_log_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }
}
