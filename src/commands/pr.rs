use anyhow::{bail, Result};

use crate::config::Config;
use crate::git;
use crate::llm::{self, RequestKind, TextGenerator};
use crate::output;

/// Generate a PR message (or just a title) from the staged diff.
pub fn run(
    client: &dyn TextGenerator,
    cfg: &Config,
    output_file: Option<&str>,
    title_only: bool,
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

    let (kind, loader, box_title) = if title_only {
        (RequestKind::PrTitle, "Generating PR title...", "Generated PR Title")
    } else {
        (RequestKind::PrMessage, "Generating PR message...", "Generated PR Message")
    };

    let pb = output::spinner(loader);
    let result = llm::generate(client, cfg, kind, &diff);
    pb.finish_and_clear();
    let message = result?;

    let save_info = match output_file {
        Some(path) => {
            output::save_to_file(&message, path)?;
            Some(format!("Saved PR message to: {path}"))
        }
        None => None,
    };

    output::print_result_box(box_title, &message, save_info.as_deref());

    let mut steps = if title_only {
        vec![
            "Copy the title above for your PR".to_string(),
            "Use when creating the pull request on GitHub/GitLab".to_string(),
        ]
    } else {
        vec![
            "Copy the message above for your PR".to_string(),
            "Use the title as PR title and description as PR body".to_string(),
        ]
    };
    if let Some(path) = output_file {
        steps.push(format!("Or copy from file: {path}"));
    }
    output::print_next_steps(&steps);

    Ok(())
}
