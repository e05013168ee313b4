use clap::Parser;
use gale::config::{Args, Config};
use gale::runtime::RealRuntime;
use gale::ui::Ui;
use std::process::ExitCode;

/// gale - GitHub Artifact & Lifecycle Explorer
///
/// Fetches release metadata for one repository and saves it as JSON.
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let runtime = RealRuntime;
    let config = Config::resolve(args, &runtime);
    let ui = Ui::new(config.quiet);

    match gale::app::execute(config, &runtime, &ui).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e);
            ExitCode::FAILURE
        }
    }
}
