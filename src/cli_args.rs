use clap::{Parser, Subcommand};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitchef",
    version,
    about = "AI-powered git commit and PR message generator"
)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Model name for the final generation (e.g. gemini-2.0-flash-exp)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Model name for per-chunk summaries (e.g. gemini-2.0-flash-lite)
    #[arg(long, global = true)]
    pub lite_model: Option<String>,

    /// API key (otherwise uses GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Subcommand (e.g. 'commit')
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, e.g. `commitchef commit`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a commit message from staged changes
    Commit {
        /// Save the generated message to a file
        #[arg(short, long)]
        output: Option<String>,

        /// Commit staged changes with the generated subject line
        #[arg(short = 'c', long = "commit")]
        auto_commit: bool,
    },

    /// Generate a Pull Request message from staged changes
    Pr {
        /// Save the generated message to a file
        #[arg(short, long)]
        output: Option<String>,

        /// Generate only the PR title
        #[arg(long)]
        title_only: bool,
    },

    /// Save git diff --cached to a text file
    Save {
        /// Output file name
        #[arg(short, long, default_value = "diff.txt")]
        output: String,
    },
}
