pub const CHUNK_SUMMARY_LEAD: &str =
    "Summarize the changes in this git diff chunk. Be concise and focus on what was modified:";

pub const CHUNK_SUMMARY_CLOSE: &str = "Provide a brief summary of the changes:";

pub const COMMIT_SINGLE_LEAD: &str =
    "Analyze this git diff and generate a concise, informative commit message with a small explanation.";

pub const COMMIT_MULTI_LEAD: &str =
    "Based on these summaries of git diff chunks, generate a concise, informative commit message.";

pub const COMMIT_RULES: &str = r#"Rules for the commit message:
1. Use conventional commit format: type(scope): description
2. Types: feat, fix, docs, style, refactor, test, chore
3. Keep the first line under 50 characters
4. Be specific about what changed
5. Focus on the "why" and "what", not the "how""#;

pub const COMMIT_CLOSE: &str = "Generate only the commit message, nothing else.";

pub const PR_TITLE_SINGLE_LEAD: &str =
    "Analyze this git diff and generate a concise Pull Request title.";

pub const PR_TITLE_MULTI_LEAD: &str =
    "Based on these summaries of git diff chunks, generate a concise Pull Request title.";

pub const PR_TITLE_RULES: &str = r#"Rules for the PR title:
1. Keep it under 72 characters
2. Use conventional commit format: type(scope): description
3. Types: feat, fix, docs, style, refactor, test, chore
4. Be specific about what changed
5. Focus on the main feature/change"#;

pub const PR_TITLE_CLOSE: &str = "Generate only the PR title, nothing else.";

pub const PR_MESSAGE_SINGLE_LEAD: &str =
    "Analyze this git diff and generate a comprehensive Pull Request message.";

pub const PR_MESSAGE_MULTI_LEAD: &str =
    "Based on these summaries of git diff chunks, generate a comprehensive Pull Request message.";

pub const PR_MESSAGE_RULES: &str = r#"Format the PR message as follows:
1. Title: Use conventional commit format (type(scope): description) - keep under 72 characters
2. Description: Explain what this PR does and why
3. Changes: List the main changes made
4. Testing: Mention how this should be tested (if applicable)

Rules:
- Be clear and informative
- Focus on the "what" and "why"
- Use markdown formatting
- Include relevant details for reviewers"#;

pub const PR_MESSAGE_CLOSE: &str = "Generate a complete PR message with title and description.";
