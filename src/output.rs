use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::Duration;

const BOX_WIDTH: usize = 60;

pub fn print_success(message: &str) {
    println!("{} {message}", "ok".green().bold());
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error".red().bold());
}

pub fn print_info(message: &str) {
    println!("{} {message}", "info".cyan());
}

/// Print generated content in a framed box, with an optional save note.
pub fn print_result_box(title: &str, content: &str, save_info: Option<&str>) {
    println!();
    println!("{}", "=".repeat(BOX_WIDTH));
    println!("{}:", title.bold());
    println!("{}", "=".repeat(BOX_WIDTH));
    println!("{content}");
    println!("{}", "=".repeat(BOX_WIDTH));

    if let Some(info) = save_info {
        println!();
        print_info(info);
    }
}

pub fn print_next_steps(steps: &[String]) {
    println!();
    println!("{}", "Next steps:".bold());
    for step in steps {
        println!("  - {step}");
    }
}

/// Spinner shown while a generation request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn save_to_file(content: &str, path: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to save to file: {path}"))
}
