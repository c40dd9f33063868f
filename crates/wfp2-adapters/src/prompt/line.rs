//! Line-oriented prompt for non-interactive input.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::sync::Mutex;

use tracing::debug;
use wfp2_core::{application::ports::Prompt, error::GeneratorResult};

use super::prompt_failed;

/// Writes the question, reads one line as the answer.
///
/// `y`/`yes` (any case) is yes; anything else, including end of input, is no.
/// End of input while a text answer is expected fails the prompt.
pub struct LinePrompt<R, W> {
    io: Mutex<(R, W)>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Ask `question` and return the raw line, or `None` at end of input.
    fn ask(&self, question: &str) -> GeneratorResult<Option<String>> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| prompt_failed("prompt lock poisoned"))?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{question}")
            .and_then(|()| writer.flush())
            .map_err(|e| prompt_failed(e.to_string()))?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| prompt_failed(e.to_string()))?;
        if read == 0 {
            debug!("Prompt input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask_yes_no(&self, message: &str) -> GeneratorResult<bool> {
        let answer = self.ask(&format!("{message} [y/n] "))?;
        Ok(answer.is_some_and(|a| {
            let a = a.trim();
            a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
        }))
    }

    fn ask_text(&self, message: &str) -> GeneratorResult<String> {
        self.ask(&format!("{message}: "))?
            .ok_or_else(|| prompt_failed("input ended while waiting for an answer"))
    }
}
