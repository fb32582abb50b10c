use anyhow::{anyhow, Context, Result};
use std::process::Command as GitCommand;

/// Run a git command and capture stdout as String.
fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "git {:?} exited with status {:?}: {}",
            args,
            output.status.code(),
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Whether the current directory is inside a git repository.
pub fn in_repository() -> bool {
    GitCommand::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Get the full staged diff.
pub fn staged_diff() -> Result<String> {
    git_output(&["diff", "--cached"])
}

/// Whether anything is staged for commit.
pub fn has_staged_changes() -> Result<bool> {
    let diff = staged_diff()?;
    Ok(!diff.trim().is_empty())
}

/// Commit staged changes with the given message.
pub fn commit_with_message(message: &str) -> Result<String> {
    log::info!("Committing staged changes");
    let output = git_output(&["commit", "-m", message])?;
    Ok(output)
}
