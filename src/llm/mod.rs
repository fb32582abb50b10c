pub mod gemini;
mod prompt_builder;
mod prompts;

use anyhow::Result;

use crate::config::Config;
use crate::text::chunk_text;

/// Which backend model a request should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Full model, used for the one final generation call.
    Primary,
    /// Cheaper model, used for per-chunk summaries.
    Lite,
}

/// What kind of message to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    CommitMessage,
    PrMessage,
    PrTitle,
}

/// Trait for talking to a text-generation backend.
///
/// The single seam between the pipeline and the network; tests substitute
/// a deterministic fake.
pub trait TextGenerator {
    /// Send one prompt to the given model tier and return the raw text.
    fn generate_text(&self, tier: ModelTier, prompt: &str) -> Result<String>;
}

/// Generate a commit or PR message from the staged diff.
///
/// The diff is chunked to `cfg.max_chunk_size`; a single chunk is prompted
/// directly, while multiple chunks are each summarized on the lite tier
/// first and the final prompt is built from those summaries in chunk
/// order. Exactly one primary-tier call produces the result. Backend
/// failures abort the whole call; there is no partial result.
pub fn generate(
    client: &dyn TextGenerator,
    cfg: &Config,
    kind: RequestKind,
    diff: &str,
) -> Result<String> {
    let chunks = chunk_text(diff, cfg.max_chunk_size);
    log::info!("Diff split into {} chunk(s)", chunks.len());

    let prompt = if chunks.len() == 1 {
        prompt_builder::single_prompt(kind, &chunks[0])
    } else {
        let mut summaries = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            log::debug!("Summarizing chunk {} of {}", i + 1, chunks.len());
            summaries.push(summarize_chunk(client, chunk)?);
        }
        prompt_builder::multi_prompt(kind, &summaries)
    };

    log::trace!("Final prompt:\n{}", crate::text::truncate(&prompt, 3000));

    let response = client.generate_text(ModelTier::Primary, &prompt)?;
    Ok(response.trim().to_string())
}

/// Reduce one diff chunk to a short summary on the lite tier.
fn summarize_chunk(client: &dyn TextGenerator, chunk: &str) -> Result<String> {
    let prompt = prompt_builder::chunk_summary_prompt(chunk);
    let summary = client.generate_text(ModelTier::Lite, &prompt)?;
    Ok(summary.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    /// Records every call and replays canned responses.
    struct FakeGenerator {
        calls: RefCell<Vec<(ModelTier, String)>>,
        fail_on_call: Option<usize>,
    }

    impl FakeGenerator {
        fn new() -> Self {
            FakeGenerator {
                calls: RefCell::new(Vec::new()),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            FakeGenerator {
                calls: RefCell::new(Vec::new()),
                fail_on_call: Some(call),
            }
        }

        fn calls(&self) -> Vec<(ModelTier, String)> {
            self.calls.borrow().clone()
        }
    }

    impl TextGenerator for FakeGenerator {
        fn generate_text(&self, tier: ModelTier, prompt: &str) -> Result<String> {
            let n = self.calls.borrow().len();
            self.calls.borrow_mut().push((tier, prompt.to_string()));
            if self.fail_on_call == Some(n) {
                return Err(anyhow!("backend unavailable"));
            }
            match tier {
                ModelTier::Lite => Ok(format!("summary of call {n}")),
                ModelTier::Primary => Ok("  feat(core): final message  \n".to_string()),
            }
        }
    }

    fn test_config(max_chunk_size: usize) -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            model: "primary-model".to_string(),
            lite_model: "lite-model".to_string(),
            max_chunk_size,
        }
    }

    #[test]
    fn single_chunk_skips_the_summarizer() {
        let fake = FakeGenerator::new();
        let cfg = test_config(1000);

        let out = generate(&fake, &cfg, RequestKind::CommitMessage, "line1\nline2").unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ModelTier::Primary);
        assert!(calls[0].1.contains("Git diff:\nline1\nline2"));
        assert_eq!(out, "feat(core): final message");
    }

    #[test]
    fn multi_chunk_summarizes_each_chunk_then_generates_once() {
        let fake = FakeGenerator::new();
        let cfg = test_config(12);
        // Three lines of 9+1 chars, limit 12: one line per chunk.
        let diff = "aaaaaaaaa\nbbbbbbbbb\nccccccccc";

        generate(&fake, &cfg, RequestKind::CommitMessage, diff).unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[..3].iter().all(|(tier, _)| *tier == ModelTier::Lite));
        assert!(calls[0].1.contains("aaaaaaaaa"));
        assert!(calls[1].1.contains("bbbbbbbbb"));
        assert!(calls[2].1.contains("ccccccccc"));

        let (tier, final_prompt) = &calls[3];
        assert_eq!(*tier, ModelTier::Primary);
        assert!(final_prompt.contains("Chunk 1: summary of call 0"));
        assert!(final_prompt.contains("Chunk 2: summary of call 1"));
        assert!(final_prompt.contains("Chunk 3: summary of call 2"));
    }

    #[test]
    fn summaries_keep_chunk_order_in_the_final_prompt() {
        let fake = FakeGenerator::new();
        let cfg = test_config(12);
        let diff = "aaaaaaaaa\nbbbbbbbbb\nccccccccc";

        generate(&fake, &cfg, RequestKind::PrMessage, diff).unwrap();

        let final_prompt = &fake.calls()[3].1;
        let one = final_prompt.find("Chunk 1:").unwrap();
        let two = final_prompt.find("Chunk 2:").unwrap();
        let three = final_prompt.find("Chunk 3:").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn result_is_trimmed() {
        let fake = FakeGenerator::new();
        let cfg = test_config(1000);

        let out = generate(&fake, &cfg, RequestKind::PrTitle, "+one line").unwrap();
        assert_eq!(out, "feat(core): final message");
    }

    #[test]
    fn summarizer_failure_aborts_the_whole_call() {
        let fake = FakeGenerator::failing_on(1);
        let cfg = test_config(12);
        let diff = "aaaaaaaaa\nbbbbbbbbb\nccccccccc";

        let err = generate(&fake, &cfg, RequestKind::CommitMessage, diff).unwrap_err();
        assert!(err.to_string().contains("backend unavailable"));
        // The second summary failed; no final generation happened.
        assert_eq!(fake.calls().len(), 2);
    }

    #[test]
    fn final_call_failure_propagates() {
        let fake = FakeGenerator::failing_on(0);
        let cfg = test_config(1000);

        let err = generate(&fake, &cfg, RequestKind::CommitMessage, "+x").unwrap_err();
        assert!(err.to_string().contains("backend unavailable"));
    }
}
