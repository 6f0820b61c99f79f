//! Output formatting and progress indicators for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::puzzle::Board;

/// Create a spinner shown while a search runs on the worker thread
pub fn create_search_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board as an indented 3-line block
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}
