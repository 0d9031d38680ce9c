use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

/// All contact with the user goes through this seam; no other module touches
/// the process streams.
pub trait Console {
    /// Writes the prompt and blocks until the user enters one line.
    /// The line comes back verbatim apart from the terminator; trimming is
    /// the caller's responsibility.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Writes one line of output.
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented console over any reader/writer pair.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        // Blank line before the prompt, response marker on the input line.
        write!(self.output, "\n{prompt}\n> ").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("read selection")?;
        if read == 0 {
            bail!("input stream closed while waiting for a selection");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("write message")?;
        Ok(())
    }
}

pub fn stdio() -> LineConsole<io::StdinLock<'static>, io::Stdout> {
    LineConsole::new(io::stdin().lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_frames_prompt_and_returns_line_verbatim() {
        let mut out = Vec::new();
        let mut console = LineConsole::new(&b"  2  \n"[..], &mut out);

        let answer = console.ask("Choose a menu option").unwrap();
        assert_eq!(answer, "  2  ");
        assert_eq!(out, b"\nChoose a menu option\n> ");
    }

    #[test]
    fn ask_strips_crlf_terminator() {
        let mut out = Vec::new();
        let mut console = LineConsole::new(&b"3\r\n"[..], &mut out);

        assert_eq!(console.ask("Choose a menu option").unwrap(), "3");
    }

    #[test]
    fn ask_accepts_last_line_without_terminator() {
        let mut out = Vec::new();
        let mut console = LineConsole::new(&b"1"[..], &mut out);

        assert_eq!(console.ask("Choose a menu option").unwrap(), "1");
    }

    #[test]
    fn ask_fails_when_input_is_exhausted() {
        let mut out = Vec::new();
        let mut console = LineConsole::new(&b""[..], &mut out);

        assert!(console.ask("Choose a menu option").is_err());
    }

    #[test]
    fn notify_appends_newline() {
        let mut out = Vec::new();
        let mut console = LineConsole::new(&b""[..], &mut out);

        console.notify("MAIN MENU").unwrap();
        console.notify("1. Method 1").unwrap();
        assert_eq!(out, b"MAIN MENU\n1. Method 1\n");
    }
}
