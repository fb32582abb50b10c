use anyhow::{bail, Result};

use crate::config::Config;
use crate::git;
use crate::llm::{self, RequestKind, TextGenerator};
use crate::output;
use crate::text::first_line;

/// Generate a commit message from the staged diff, optionally saving it to
/// a file or committing with its subject line.
pub fn run(
    client: &dyn TextGenerator,
    cfg: &Config,
    output_file: Option<&str>,
    auto_commit: bool,
) -> Result<()> {
    if !git::in_repository() {
        bail!("Not in a git repository");
    }

    if !git::has_staged_changes()? {
        output::print_info("No staged changes found");
        output::print_info("Use 'git add <files>' to stage changes first");
        return Ok(());
    }

    let diff = git::staged_diff()?;

    let pb = output::spinner("Generating commit message...");
    let result = llm::generate(client, cfg, RequestKind::CommitMessage, &diff);
    pb.finish_and_clear();
    let message = result?;

    let save_info = match output_file {
        Some(path) => {
            output::save_to_file(&message, path)?;
            Some(format!("Saved commit message to: {path}"))
        }
        None => None,
    };

    output::print_result_box("Generated Commit Message", &message, save_info.as_deref());

    let subject = first_line(&message);

    if auto_commit {
        git::commit_with_message(subject)?;
        output::print_success("Successfully committed changes!");
        output::print_info(&format!("Commit message: {subject}"));
    } else {
        let mut steps = vec![
            "Copy the message above".to_string(),
            format!("Run: git commit -m \"{subject}\""),
        ];
        if let Some(path) = output_file {
            steps.push(format!("Or use: git commit -F {path}"));
        }
        output::print_next_steps(&steps);
    }

    Ok(())
}
