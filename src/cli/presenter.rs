//! CLI presenter for output formatting and the input prompt

use std::io::{self, BufRead, Write};

use colored::*;

use crate::domain::audio::AudioInput;

const BANNER: &[&str] = &[
    "     __,    _    _   ,_    _   __  ",
    r"    /  |  |/ \_|/ \_/  |  |/  /    ",
    r"    \_/|_/|__/ |__/    |_/|__/\___/",
    "         /|   /|                   ",
    r"         \|   \|                   ",
];

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print the banner to stderr
    pub fn banner(&self) {
        eprintln!();
        for line in BANNER {
            eprintln!("{}", line.cyan());
        }
        eprintln!();
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print inputs as `<index>: <name>` lines
    pub fn input_list(&self, inputs: &[AudioInput]) {
        for line in format_input_list(inputs) {
            println!("{}", line);
        }
    }

    /// Ask for an input index on stdin until a valid one is given
    pub fn choose_input(&self, count: usize) -> io::Result<usize> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        self.choose_from(&mut reader, count)
    }

    /// Prompt loop over any reader. Fails on end of input.
    pub fn choose_from<R: BufRead>(&self, reader: &mut R, count: usize) -> io::Result<usize> {
        loop {
            print!("Choose input: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                println!();
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "no input chosen",
                ));
            }

            match parse_choice(&line, count) {
                Some(index) => return Ok(index),
                None => self.error(&format!(
                    "'{}' is not a valid choice (0-{})",
                    line.trim(),
                    count.saturating_sub(1)
                )),
            }
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines shown for the input listing
pub fn format_input_list(inputs: &[AudioInput]) -> Vec<String> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| format!("{}: {}", index, input.name))
        .collect()
}

/// Parse a numeric choice within `0..count`
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    line.trim().parse::<usize>().ok().filter(|&i| i < count)
}
