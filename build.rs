use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Embeds the short commit hash as `FRAMEINPUT_GIT_HASH` for `--version`.
fn main() {
    let hash = env::var("FRAMEINPUT_GIT_HASH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=FRAMEINPUT_GIT_HASH={hash}");
    println!("cargo:rerun-if-env-changed=FRAMEINPUT_GIT_HASH");

    let git_dir = env::var_os("GIT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".git"));
    for watched in ["HEAD", "packed-refs"] {
        let path = git_dir.join(watched);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
