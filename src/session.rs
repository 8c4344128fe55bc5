use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::{error::CalcError, evaluate, util::strip_whitespace};

const BANNER: &str = "Roman and Arabic numeral calculator";
const SEPARATOR: &str = "------------------------------";
const PROMPT: &str = "Enter an arithmetic expression:";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input ran out.
    Exhausted,
    /// An error asked for the session to stop.
    Terminated(CalcError),
}

/// An interactive calculator session.
///
/// A session reads one expression per line, evaluates it and writes either
/// the answer or the error message. Recoverable errors are reported and the
/// session moves on to the next line; session-terminating errors are reported
/// and end the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    /// Suppresses the banner and the per-line prompt.
    pub quiet: bool,
}

impl Session {
    /// Creates a session that prints the banner and prompts.
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Creates a session that only prints answers and errors.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }

    /// Runs the session until the input is exhausted or a session-terminating
    /// error occurs.
    ///
    /// Blank lines are skipped without being evaluated.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading `input` or writing `output`.
    ///
    /// # Example
    /// ```
    /// use romanus::session::{Session, SessionEnd};
    ///
    /// let mut output = Vec::new();
    /// let end = Session::quiet().run("3 + 4\nX / II\n".as_bytes(), &mut output).unwrap();
    ///
    /// assert_eq!(end, SessionEnd::Exhausted);
    /// assert_eq!(String::from_utf8(output).unwrap(), "Answer: 7\nAnswer: V\n");
    /// ```
    pub fn run<R: BufRead, W: Write>(self, input: R, output: &mut W) -> io::Result<SessionEnd> {
        if !self.quiet {
            writeln!(output, "{BANNER}")?;
        }

        let mut lines = input.lines();
        loop {
            if !self.quiet {
                writeln!(output, "{SEPARATOR}")?;
                writeln!(output, "{PROMPT}")?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                info!("input exhausted, ending session");
                return Ok(SessionEnd::Exhausted);
            };

            let line = strip_whitespace(&line?);
            if line.is_empty() {
                continue;
            }

            match evaluate(&line) {
                Ok(answer) => writeln!(output, "Answer: {answer}")?,
                Err(e) => {
                    writeln!(output, "{e}")?;
                    if e.terminates_session() {
                        warn!(expression = %line, error = ?e, "session terminated");
                        return Ok(SessionEnd::Terminated(e));
                    }
                },
            }
        }
    }
}
