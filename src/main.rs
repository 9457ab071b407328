//! Locale Sync CLI
//!
//! Entry point for the `locale-sync` command-line tool.

use clap::{Args, Parser, Subcommand};
use locale_sync::config::SyncConfig;
use locale_sync::pipeline::{run_check, run_sync, CheckSummary, SyncSummary};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "locale-sync")]
#[command(about = "Keep per-locale translation files in sync with a source file", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile every target against the source and rewrite all files canonically
    Sync {
        #[command(flatten)]
        selection: Selection,

        /// Output the run summary in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Report drift without writing anything; exits non-zero when files are out of sync
    Check {
        #[command(flatten)]
        selection: Selection,

        /// Output the drift summary in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Parse the configuration and print the resolved file set
    VerifyConfig {
        /// Path to config file (default: locale-sync.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

/// File-selection flags shared by sync and check.
#[derive(Args)]
struct Selection {
    /// Path to config file (default: locale-sync.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Source-language file (overrides the config file)
    #[arg(long, short = 's')]
    source: Option<PathBuf>,

    /// Target locale file; repeatable (overrides the config file)
    #[arg(long = "target", short = 't')]
    targets: Vec<PathBuf>,

    /// Orphan report path (default: orphan_report.md)
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Selection {
    fn resolve(self) -> SyncConfig {
        match SyncConfig::resolve(self.config.as_deref(), self.source, self.targets, self.report) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { selection, json } => {
            run_sync_command(selection.resolve(), json);
        }
        Commands::Check { selection, json } => {
            run_check_command(selection.resolve(), json);
        }
        Commands::VerifyConfig { config } => {
            run_verify_config(config);
        }
    }
}

fn run_sync_command(config: SyncConfig, json_output: bool) {
    let summary = match run_sync(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if json_output {
        print_json(&summary);
    } else {
        print_sync_summary(&summary);
    }
}

fn print_sync_summary(summary: &SyncSummary) {
    for target in &summary.targets {
        for key in &target.added {
            println!("[{}] adding missing key: {}", target.path, key);
        }
    }

    if summary.report_written {
        println!("Orphans found; report written to {}", summary.report);
    }

    println!(
        "Synced {} target file(s): {} key(s) added, {} orphan(s) found",
        summary.targets.len(),
        summary.total_added(),
        summary.total_orphans(),
    );
}

fn run_check_command(config: SyncConfig, json_output: bool) {
    let summary = match run_check(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    let clean = summary.is_clean();

    if json_output {
        print_json(&summary);
    } else {
        print_check_summary(&summary);
    }

    if !clean {
        process::exit(1);
    }
}

fn print_check_summary(summary: &CheckSummary) {
    if summary.source_needs_rewrite {
        println!("[{}] not in canonical form", summary.source);
    }

    for target in &summary.targets {
        if !target.missing_keys.is_empty() {
            println!(
                "[{}] missing {} key(s): {}",
                target.path,
                target.missing_keys.len(),
                target.missing_keys.join(", ")
            );
        }
        if target.needs_rewrite {
            println!("[{}] not in canonical form", target.path);
        }
        if !target.orphans.is_empty() {
            println!(
                "[{}] {} orphaned key(s): {}",
                target.path,
                target.orphans.len(),
                target.orphans.join(", ")
            );
        }
    }

    if summary.is_clean() {
        println!("All locale files are canonical and complete");
    }
}

fn run_verify_config(config_path: Option<PathBuf>) {
    let config = match SyncConfig::resolve(config_path.as_deref(), None, Vec::new(), None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    println!("Source: {}", config.source.display());
    println!("Targets: {}", config.targets.len());
    for target in &config.targets {
        println!("  {}", target.display());
    }
    println!("Report: {}", config.report.display());
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
