//! The fetch → normalize → write pipeline.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use log::debug;

use crate::config::Config;
use crate::github::{FetchReleases, GitHub, ReleaseQuery};
use crate::normalize::normalize;
use crate::output::{assemble, write_document};
use crate::runtime::Runtime;
use crate::ui::{ICON_INFO, ICON_SPARKLES, Ui};

/// Handles `--help`/`--version`, otherwise builds the GitHub client and runs the pipeline.
#[tracing::instrument(skip(config, runtime, ui))]
pub async fn execute<R: Runtime + ?Sized>(config: Config, runtime: &R, ui: &Ui) -> Result<()> {
    if config.help {
        ui.banner();
        ui.help();
        return Ok(());
    }

    if config.version {
        ui.version();
        return Ok(());
    }

    let client = GitHub::build_client(config.token.as_deref(), config.timeout)?;
    let github = GitHub::new(client, Some(config.api_url.clone()));
    run(config, runtime, github, ui).await
}

/// Fetches one page of releases and writes the output document.
///
/// The query runs on a spawned task while the spinner ticks; its outcome is
/// awaited before anything else happens. Any failure aborts before the output
/// file is touched.
#[tracing::instrument(skip(config, runtime, github, ui))]
pub async fn run<R, G>(config: Config, runtime: &R, github: G, ui: &Ui) -> Result<()>
where
    R: Runtime + ?Sized,
    G: FetchReleases + 'static,
{
    if !ui.is_quiet() {
        ui.banner();
    }

    if config.token.is_none() {
        ui.warning("No GitHub token provided. Rate limits may be lower.");
    }

    let query = ReleaseQuery::new(&config.owner, &config.repo, config.count)?;
    let spinner = ui.spinner(format!(
        "Fetching {} releases for {}...",
        config.count,
        query.to_string().bold()
    ));

    let task = tokio::spawn(async move { github.fetch_releases(&query).await });
    let outcome = task.await;
    spinner.finish_and_clear();

    let page = outcome.context("Release fetch task failed")??;
    debug!(
        "Received {} of {} releases",
        page.nodes.len(),
        page.total_count
    );

    let releases = normalize(&page.nodes);

    ui.info(
        ICON_INFO,
        format!(
            "Found {} releases ({} total)",
            releases.len().to_string().bold(),
            page.total_count.to_string().bold()
        ),
    );
    if let Some(latest) = releases.first() {
        let published = latest
            .published_at
            .map(|date| date.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "an unknown date".to_string());
        ui.info(
            ICON_SPARKLES,
            format!(
                "Latest is {} published on {}",
                latest.version.magenta(),
                published
            ),
        );
    }

    let fetched = releases.len();
    let document = assemble(&config, page.total_count, releases, Utc::now());
    let path = write_document(runtime, &config.output, &document)?;

    ui.success(format!(
        "Saved {} releases to {}",
        fetched.to_string().bold(),
        config.output.display().to_string().cyan()
    ));
    ui.detail(path.display());

    Ok(())
}
