use anyhow::{bail, Result};

use crate::git;
use crate::output;

/// Write the raw staged diff to a text file.
pub fn run(output_file: &str) -> Result<()> {
    if !git::in_repository() {
        bail!("Not in a git repository");
    }

    let diff = git::staged_diff()?;

    if diff.trim().is_empty() {
        output::print_info("No staged changes found");
        output::print_info("Use 'git add <files>' to stage changes first");
        return Ok(());
    }

    output::save_to_file(&diff, output_file)?;
    output::print_success(&format!("Saved git diff --cached to: {output_file}"));

    Ok(())
}
