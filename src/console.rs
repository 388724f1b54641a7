//! The interactive, menu-driven front end.
//!
//! Reads one menu choice at a time, prompts for a single line of items,
//! hands them to the counting engine, and prints either one
//! `label: N occurrence(s)` line per entry or a human-readable error message.
//! The loop runs until the user picks Exit or standard input closes.
//!
//! For every kind except characters the input line is split on whitespace
//! into items; for characters the whole line is handed over as a single item,
//! since the engine counts the characters of the joined input.

use std::io::{self, BufRead, Write};

use crate::counting::{self, SupportedKind};

/// Runs the menu loop over standard input and output until the user exits.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    run_menu(&mut input, &mut output)
}

fn run_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        write_menu(output)?;
        let choice = match read_line(input)? {
            Some(line) => line,
            // closed stdin ends the session the same way Exit does
            None => return Ok(()),
        };
        match choice.trim() {
            "1" => prompt_and_count(
                input,
                output,
                SupportedKind::Text,
                "Enter words/strings separated by spaces:",
            )?,
            "2" => prompt_and_count(
                input,
                output,
                SupportedKind::Integer,
                "Enter integers separated by spaces:",
            )?,
            "3" => prompt_and_count(
                input,
                output,
                SupportedKind::Decimal,
                "Enter decimal numbers separated by spaces:",
            )?,
            "4" => prompt_and_count(
                input,
                output,
                SupportedKind::Character,
                "Enter text (each character will be counted):",
            )?,
            "5" => prompt_and_count(
                input,
                output,
                SupportedKind::Boolean,
                "Enter boolean values separated by spaces (true/false, yes/no, 1/0):",
            )?,
            "6" => prompt_and_count(
                input,
                output,
                SupportedKind::Date,
                "Enter dates separated by spaces (format: MM/DD/YYYY or YYYY-MM-DD):",
            )?,
            "7" => writeln!(output, "To run the web API, restart with: itemcount --api")?,
            "8" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n=== Item Counter ===")?;
    writeln!(output, "1. Count words/strings")?;
    writeln!(output, "2. Count integers")?;
    writeln!(output, "3. Count decimals")?;
    writeln!(output, "4. Count characters")?;
    writeln!(output, "5. Count booleans")?;
    writeln!(output, "6. Count dates")?;
    writeln!(output, "7. Start Web API")?;
    writeln!(output, "8. Exit")?;
    write!(output, "Choose an option (1-8): ")?;
    output.flush()
}

fn prompt_and_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    kind: SupportedKind,
    prompt: &str,
) -> io::Result<()> {
    writeln!(output, "\n{}", prompt)?;
    output.flush()?;
    let line = match read_line(input)? {
        Some(line) => line,
        None => return Ok(()),
    };
    if line.trim().is_empty() {
        return writeln!(output, "No input provided.");
    }
    let items: Vec<String> = if kind == SupportedKind::Character {
        // the engine counts characters across the whole joined input, so the
        // entire line is one item
        vec![line]
    } else {
        line.split_whitespace().map(String::from).collect()
    };
    writeln!(output, "\nCounting {} items:", kind)?;
    match counting::count(&items, kind) {
        Ok(table) => {
            for (label, n) in &table {
                writeln!(output, "{}: {} occurrence(s)", label, n)?;
            }
        }
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut input = io::Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_menu(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn counting_words_prints_one_line_per_label() {
        let out = run_script("1\napple banana apple\n8\n");
        assert!(out.contains("apple: 2 occurrence(s)"));
        assert!(out.contains("banana: 1 occurrence(s)"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn blank_line_reports_no_input() {
        let out = run_script("2\n   \n8\n");
        assert!(out.contains("No input provided."));
    }

    #[test]
    fn bad_integer_prints_the_engine_error() {
        let out = run_script("2\n1 two 3\n8\n");
        assert!(out.contains("'two' is not a valid integer value"));
        assert!(!out.contains("occurrence(s)"));
    }

    #[test]
    fn characters_use_the_whole_line() {
        let out = run_script("4\nab ba\n8\n");
        assert!(out.contains("a: 2 occurrence(s)"));
        assert!(out.contains("b: 2 occurrence(s)"));
        // the space between the tokens is a character too
        assert!(out.contains(" : 1 occurrence(s)"));
    }

    #[test]
    fn dates_collapse_to_the_dashed_form() {
        let out = run_script("6\n01/15/2024 2024-01-15\n8\n");
        assert!(out.contains("2024-01-15: 2 occurrence(s)"));
    }

    #[test]
    fn unknown_choice_reprints_the_menu() {
        let out = run_script("9\n8\n");
        assert!(out.contains("Invalid option. Please try again."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn eof_ends_the_session() {
        let out = run_script("1\napple\n");
        assert!(out.contains("apple: 1 occurrence(s)"));
        assert!(!out.contains("Goodbye!"));
    }
}
