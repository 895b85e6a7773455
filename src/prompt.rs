//! Prompt module.
//! Operator I/O behind a small trait so the editor runs the same against a terminal,
//! piped stdin, or scripted input in tests.
//! - `TermPrompter`: interactive line editing via `dialoguer`
//! - `LinePrompter`: plain line reads from any `BufRead`, prompts to any `Write`

use anyhow::{Context, Result, bail};
use dialoguer::Input;
use std::io::{BufRead, Write};

/// Source of operator answers.
pub trait Prompter {
    /// Shows `prompt` and returns the trimmed answer, empty when left blank.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Prints an informational line.
    fn say(&mut self, message: &str) -> Result<()>;
}

// *************** Terminal ***************

/// Interactive terminal prompts
#[derive(Debug, Default)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read answer for '{}'", prompt))?;
        Ok(answer.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }
}

// *************** Line-based ***************

/// Reads one line per answer. Used for non-terminal stdin and tests.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input ended while waiting for '{}'", prompt);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

// *************** Field helpers ***************

/// Text answer with a default used when left blank.
pub fn ask_text(prompter: &mut dyn Prompter, text: &str, default: &str) -> Result<String> {
    let answer = prompter.ask(&format!("{} [{}]", text, default))?;
    if answer.is_empty() {
        return Ok(default.to_string());
    }
    Ok(answer)
}

/// Required text, asked exactly once. `None` when left blank.
pub fn ask_required(prompter: &mut dyn Prompter, text: &str) -> Result<Option<String>> {
    let answer = prompter.ask(text)?;
    Ok(Some(answer).filter(|a| !a.is_empty()))
}

/// Integer answer, re-asked until it parses.
///
/// A blank answer returns `default` when there is one, or `None` when `allow_empty` is set;
/// otherwise the question is repeated.
pub fn ask_int(
    prompter: &mut dyn Prompter,
    text: &str,
    default: Option<i64>,
    allow_empty: bool,
) -> Result<Option<i64>> {
    let label = match default {
        Some(value) => format!("{} [{}] (leave empty to omit)", text, value),
        None => format!("{} (leave empty to omit)", text),
    };

    loop {
        let answer = prompter.ask(&label)?;
        if answer.is_empty() {
            if default.is_some() || allow_empty {
                return Ok(default);
            }
            continue;
        }
        match answer.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => prompter.say("  Enter a number.")?,
        }
    }
}
