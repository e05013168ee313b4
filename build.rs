use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let fallback = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    // Only an exact release tag overrides the manifest version
    let output = Command::new("git")
        .args(["describe", "--tags", "--exact-match"])
        .output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip 'v' prefix if present (e.g., "v4.5.0" -> "4.5.0")
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);

            if version.is_empty() {
                fallback
            } else {
                version.to_string()
            }
        }
        _ => fallback,
    };

    println!("cargo:rustc-env=GALE_VERSION={}", version);
}
