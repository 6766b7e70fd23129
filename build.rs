use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn stamp(key: &str, value: &str) {
    println!("cargo:rustc-env={key}={value}");
}

fn command_output(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    stamp("VERGEN_BUILD_TIMESTAMP", &timestamp.to_string());

    let rustc = command_output("rustc", &["--version"]).unwrap_or_default();
    stamp("VERGEN_RUSTC_SEMVER", &rustc);

    let sha = command_output("git", &["rev-parse", "HEAD"]).unwrap_or_default();
    stamp("VERGEN_GIT_SHA", &sha);
}
