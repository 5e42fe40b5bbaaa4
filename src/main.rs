//! wsm - Workspace bootstrapper
//!
//! Lists the most recently committed branches of a git repository, lets you
//! pick one, checks it out and creates a dated workspace folder named after
//! the title you give it.

mod app;
mod config;
mod error;
mod git;
mod selector;
mod workspace;

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use clap::builder::BoolishValueParser;
use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, FileConfig};
use crate::git::GitCli;
use crate::selector::PromptSelector;

/// wsm - switch to a recent branch and create a dated workspace folder
#[derive(Parser, Debug)]
#[command(name = "wsm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workspace title (several words are joined with spaces)
    #[arg(required_unless_present = "show_config")]
    title: Vec<String>,

    /// Workspace root directory
    #[arg(long, env = "WS_ROOT")]
    root: Option<String>,

    /// Git repository directory
    #[arg(long = "git-dir", env = "WS_GIT_DIR")]
    git_dir: Option<String>,

    /// Enable logging
    #[arg(
        long,
        env = "LOG_ENABLED",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    log: Option<bool>,

    /// Config file (defaults to <config dir>/wsm/config.json)
    #[arg(long, env = "WSM_CONFIG")]
    config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::load_default()?,
    };
    let config = Config::resolve(
        args.root.as_deref(),
        args.git_dir.as_deref(),
        args.log,
        &file_config,
    )?;

    init_logging(config.log);

    if args.show_config {
        show_config(&config);
        return Ok(());
    }

    let title = args.title.join(" ");
    let git = GitCli::default();
    let mut selector = PromptSelector::stdio();

    let workspace = app::App::new(&git, &mut selector, &config.git_dir, &config.ws_root)
        .run(&title, Local::now().date_naive())?;

    println!("{}", workspace);
    Ok(())
}

/// Without logging no subscriber is installed and every event is dropped.
/// Logs go to stderr so they stay out of the branch menu.
fn init_logging(enabled: bool) {
    if !enabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Show the resolved configuration
fn show_config(config: &Config) {
    println!("wsm Configuration");
    println!("=================");
    println!();
    println!("Workspace root: {}", config.ws_root.display());
    println!("Git directory: {}", config.git_dir.display());
    println!("Logging: {}", config.log);
    match FileConfig::default_path() {
        Some(path) => println!("Default config file: {}", path.display()),
        None => println!("Default config file: (no config directory)"),
    }
}
