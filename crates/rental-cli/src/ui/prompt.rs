//! Prompt primitives for the interactive menu.
//!
//! Two implementations share the `Prompter` trait:
//! - `TerminalPrompter` uses dialoguer widgets when stdin is a TTY
//! - `LinePrompter` reads one answer per line (piped stdin, tests)
//!
//! Every prompt returns `Ok(None)` once input is exhausted, which the menu
//! treats as a request to exit.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Source of answers for the menu.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<usize>>;

    /// Free-text answer, trimmed.
    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Yes/no answer; anything but yes is no.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<Option<bool>>;
}

/// dialoguer-backed prompts for interactive terminals.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value.trim().to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<Option<bool>> {
        // Escape cancels the rental rather than leaving the menu.
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?;
        Ok(Some(answer.unwrap_or(false)))
    }
}

/// Line-oriented prompts over any reader.
///
/// Prompts are echoed to `out` so a transcript reads like a terminal session.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;
        let answer = self.read_line()?;
        // Piped input is not echoed by a terminal, so end the prompt line ourselves.
        writeln!(self.out)?;
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<usize>> {
        loop {
            for (i, item) in items.iter().enumerate() {
                writeln!(self.out, "{}. {}", i + 1, item)?;
            }
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.out, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn input(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.ask(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<Option<bool>> {
        let answer = self.ask(&format!("{} (Y/N)", prompt))?;
        Ok(answer.map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")))
    }
}
