use crate::llm::prompts;
use crate::llm::RequestKind;

/// Build the prompt for a diff that fit in a single chunk.
pub fn single_prompt(kind: RequestKind, chunk: &str) -> String {
    let (lead, rules, close) = template_parts(kind, false);
    format!("{lead}\n\n{rules}\n\nGit diff:\n{chunk}\n\n{close}")
}

/// Build the prompt for a multi-chunk diff from the per-chunk summaries,
/// labeled "Chunk 1" onward in chunk order.
pub fn multi_prompt(kind: RequestKind, summaries: &[String]) -> String {
    let (lead, rules, close) = template_parts(kind, true);

    let rendered = summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| format!("Chunk {}: {}", i + 1, summary))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{lead}\n\n{rules}\n\nChange summaries:\n{rendered}\n\n{close}")
}

/// Build the lite-tier prompt that reduces one chunk to a short summary.
pub fn chunk_summary_prompt(chunk: &str) -> String {
    format!(
        "{lead}\n\n{chunk}\n\n{close}",
        lead = prompts::CHUNK_SUMMARY_LEAD,
        close = prompts::CHUNK_SUMMARY_CLOSE
    )
}

fn template_parts(kind: RequestKind, multi: bool) -> (&'static str, &'static str, &'static str) {
    match (kind, multi) {
        (RequestKind::CommitMessage, false) => (
            prompts::COMMIT_SINGLE_LEAD,
            prompts::COMMIT_RULES,
            prompts::COMMIT_CLOSE,
        ),
        (RequestKind::CommitMessage, true) => (
            prompts::COMMIT_MULTI_LEAD,
            prompts::COMMIT_RULES,
            prompts::COMMIT_CLOSE,
        ),
        (RequestKind::PrMessage, false) => (
            prompts::PR_MESSAGE_SINGLE_LEAD,
            prompts::PR_MESSAGE_RULES,
            prompts::PR_MESSAGE_CLOSE,
        ),
        (RequestKind::PrMessage, true) => (
            prompts::PR_MESSAGE_MULTI_LEAD,
            prompts::PR_MESSAGE_RULES,
            prompts::PR_MESSAGE_CLOSE,
        ),
        (RequestKind::PrTitle, false) => (
            prompts::PR_TITLE_SINGLE_LEAD,
            prompts::PR_TITLE_RULES,
            prompts::PR_TITLE_CLOSE,
        ),
        (RequestKind::PrTitle, true) => (
            prompts::PR_TITLE_MULTI_LEAD,
            prompts::PR_TITLE_RULES,
            prompts::PR_TITLE_CLOSE,
        ),
    }
}
