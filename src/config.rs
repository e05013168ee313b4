//! Command-line arguments and the resolved run configuration.

use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::github::DEFAULT_API_URL;
use crate::runtime::Runtime;

pub const DEFAULT_OWNER: &str = "Typeflu";
pub const DEFAULT_REPO: &str = "gale";
pub const DEFAULT_COUNT: u32 = 10;
pub const DEFAULT_OUTPUT: &str = "releases.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// gale - fetch GitHub releases into a JSON file
///
/// If the GITHUB_TOKEN environment variable is set, it is used for authentication
/// unless --token is given.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gale", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Repository owner
    #[arg(value_name = "OWNER", default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name
    #[arg(value_name = "REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Number of releases to fetch
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_COUNT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Output file name
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// GitHub token (defaults to GITHUB_TOKEN)
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Show help
    #[arg(short, long)]
    pub help: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// GitHub GraphQL endpoint
    #[arg(long = "api-url", value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Overall request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, hide = true)]
    pub timeout: u64,
}

/// Settings for a single run. Built once from [`Args`] and the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub count: u32,
    pub output: PathBuf,
    pub token: Option<String>,
    pub quiet: bool,
    pub help: bool,
    pub version: bool,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Combines parsed arguments with the environment.
    ///
    /// An explicit `--token` always wins over `GITHUB_TOKEN`; empty tokens count as absent.
    pub fn resolve<R: Runtime + ?Sized>(args: Args, runtime: &R) -> Self {
        let token = match args.token {
            Some(token) => Some(token),
            None => runtime.env_var(TOKEN_ENV).ok(),
        }
        .filter(|token| !token.is_empty());

        debug!(
            "Resolved target {}/{} (count={}, output={:?}, token={})",
            args.owner,
            args.repo,
            args.count,
            args.output,
            if token.is_some() { "set" } else { "unset" }
        );

        Self {
            owner: args.owner,
            repo: args.repo,
            count: args.count,
            output: args.output,
            token,
            quiet: args.quiet,
            help: args.help,
            version: args.version,
            api_url: args.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn runtime_with_token(token: Option<&'static str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(TOKEN_ENV))
            .returning(move |_| {
                token
                    .map(str::to_string)
                    .ok_or(std::env::VarError::NotPresent)
            });
        runtime
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["gale"]).unwrap();
        assert_eq!(args.owner, "Typeflu");
        assert_eq!(args.repo, "gale");
        assert_eq!(args.count, 10);
        assert_eq!(args.output, PathBuf::from("releases.json"));
        assert_eq!(args.token, None);
        assert!(!args.quiet);
        assert!(!args.help);
        assert!(!args.version);
    }

    #[test]
    fn test_args_positionals() {
        let args = Args::try_parse_from(["gale", "microsoft", "vscode"]).unwrap();
        assert_eq!(args.owner, "microsoft");
        assert_eq!(args.repo, "vscode");
        assert_eq!(args.count, 10);
        assert_eq!(args.output, PathBuf::from("releases.json"));
    }

    #[test]
    fn test_args_owner_only() {
        let args = Args::try_parse_from(["gale", "cli"]).unwrap();
        assert_eq!(args.owner, "cli");
        assert_eq!(args.repo, "gale");
    }

    #[test]
    fn test_args_flags_before_positionals() {
        let args =
            Args::try_parse_from(["gale", "--count", "20", "-o", "out.json", "-q", "owner", "repo"])
                .unwrap();
        assert_eq!(args.count, 20);
        assert_eq!(args.output, PathBuf::from("out.json"));
        assert!(args.quiet);
        assert_eq!(args.owner, "owner");
        assert_eq!(args.repo, "repo");
    }

    #[test]
    fn test_args_flags_after_positionals() {
        let args = Args::try_parse_from(["gale", "cli", "gh", "--count", "20", "-t", "abc"]).unwrap();
        assert_eq!(args.owner, "cli");
        assert_eq!(args.repo, "gh");
        assert_eq!(args.count, 20);
        assert_eq!(args.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_args_short_help_and_version() {
        let args = Args::try_parse_from(["gale", "-h"]).unwrap();
        assert!(args.help);
        let args = Args::try_parse_from(["gale", "-v"]).unwrap();
        assert!(args.version);
        let args = Args::try_parse_from(["gale", "--version", "--help"]).unwrap();
        assert!(args.help && args.version);
    }

    #[test]
    fn test_args_invalid_count_fails() {
        assert!(Args::try_parse_from(["gale", "--count", "abc"]).is_err());
        assert!(Args::try_parse_from(["gale", "-c", "0"]).is_err());
        assert!(Args::try_parse_from(["gale", "-c", "-3"]).is_err());
    }

    #[test]
    fn test_args_unknown_flag_fails() {
        assert!(Args::try_parse_from(["gale", "--bogus"]).is_err());
        assert!(Args::try_parse_from(["gale", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_resolve_token_from_env() {
        let runtime = runtime_with_token(Some("env_token"));
        let args = Args::try_parse_from(["gale"]).unwrap();

        let config = Config::resolve(args, &runtime);

        assert_eq!(config.token.as_deref(), Some("env_token"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_resolve_flag_token_wins() {
        let mut runtime = MockRuntime::new();
        runtime.expect_env_var().never();
        let args = Args::try_parse_from(["gale", "--token", "flag_token"]).unwrap();

        let config = Config::resolve(args, &runtime);

        assert_eq!(config.token.as_deref(), Some("flag_token"));
    }

    #[test]
    fn test_resolve_without_token() {
        let runtime = runtime_with_token(None);
        let args = Args::try_parse_from(["gale", "-q"]).unwrap();

        let config = Config::resolve(args, &runtime);

        assert_eq!(config.token, None);
        assert!(config.quiet);
    }

    #[test]
    fn test_resolve_empty_env_token_is_absent() {
        let runtime = runtime_with_token(Some(""));
        let args = Args::try_parse_from(["gale"]).unwrap();

        assert_eq!(Config::resolve(args, &runtime).token, None);
    }

    #[test]
    fn test_resolve_custom_endpoint_and_timeout() {
        let runtime = runtime_with_token(None);
        let args = Args::try_parse_from([
            "gale",
            "--api-url",
            "http://localhost:1234/graphql",
            "--timeout",
            "5",
        ])
        .unwrap();

        let config = Config::resolve(args, &runtime);

        assert_eq!(config.api_url, "http://localhost:1234/graphql");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
