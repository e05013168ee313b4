//! Terminal presentation: colors, icons, spinner and the help screen.
//!
//! A [`Ui`] is created once in `main` and handed to whatever needs to print.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::Duration;

pub const ICON_CHECK: &str = "✔";
pub const ICON_ERROR: &str = "✖";
pub const ICON_WARNING: &str = "!";
pub const ICON_INFO: &str = "i";
pub const ICON_SPARKLES: &str = "*";
pub const ICON_FOLDER: &str = "→";

const SPINNER_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Default)]
pub struct Ui {
    quiet: bool,
}

impl Ui {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn banner(&self) {
        println!("{}", banner_text());
    }

    pub fn help(&self) {
        println!("{}", help_text());
    }

    pub fn version(&self) {
        println!("{} v{}", "gale".bold(), crate::VERSION);
    }

    /// Informational line, suppressed in quiet mode.
    pub fn info(&self, icon: &str, message: impl Display) {
        if !self.quiet {
            println!("{}", format!("{} {}", icon, message).cyan());
        }
    }

    /// Dimmed detail line, suppressed in quiet mode.
    pub fn detail(&self, message: impl Display) {
        if !self.quiet {
            println!("{}", format!("{} {}", ICON_FOLDER, message).dimmed());
        }
    }

    pub fn warning(&self, message: impl Display) {
        eprintln!("{}", format!("{} {}", ICON_WARNING, message).yellow());
    }

    pub fn success(&self, message: impl Display) {
        println!("\n{}", format!("{} Success! {}", ICON_CHECK, message).green());
    }

    pub fn error(&self, error: &anyhow::Error) {
        eprintln!("\n{}", format!("{} Error: {:#}", ICON_ERROR, error).red());
    }

    /// Starts a ticking spinner, or a hidden one in quiet mode.
    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(SPINNER_TICK);
        bar
    }
}

pub fn banner_text() -> String {
    format!(
        "\n  {}\n  {}  {}\n {} {}\n",
        "__".cyan(),
        "/ /".cyan(),
        format!("GALE v{}", crate::VERSION).bold(),
        "/ /___".cyan(),
        "A modern CLI to fetch GitHub releases".dimmed(),
    )
}

pub fn help_text() -> String {
    let gale = "gale".cyan();
    format!(
        "
{usage}:
  gale [owner] [repo] [options]

{examples}:
  {gale}                       # Fetch releases for the default repo
  {gale} microsoft vscode      # Fetch VS Code releases
  {gale} cli gh --count 20     # Fetch 20 GitHub CLI releases
  {gale} --help                # Show this help

{options}:
  {count}, -c   Number of releases to fetch (default: 10)
  {output}, -o  Output file name (default: releases.json)
  {token}, -t   GitHub token (or use GITHUB_TOKEN env var)
  {quiet}, -q   Quiet mode (minimal output)
  {help}, -h    Show this help
  {version}, -v Show version

{environment}:
  {env}   Your GitHub personal access token
",
        usage = "USAGE".bold(),
        examples = "EXAMPLES".bold(),
        options = "OPTIONS".bold(),
        environment = "ENVIRONMENT".bold(),
        gale = gale,
        count = "--count".green(),
        output = "--output".green(),
        token = "--token".green(),
        quiet = "--quiet".green(),
        help = "--help".green(),
        version = "--version".green(),
        env = crate::config::TOKEN_ENV.yellow(),
    )
}
