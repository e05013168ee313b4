pub mod app;
pub mod config;
pub mod format;
pub mod github;
pub mod normalize;
pub mod output;
pub mod runtime;
pub mod ui;

/// Version embedded at build time (an exact git release tag, else the manifest version).
pub const VERSION: &str = env!("GALE_VERSION");
