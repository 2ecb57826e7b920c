use crate::classifier::classify;
use crate::definitions::Command;
use crate::error::{TermError, TermResult};
use crate::notify::Notifier;
use crate::terminal::Terminal;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Counters for one run of the command loop. Unrecognized lines and lines
/// whose parameters can't be parsed both count as rejected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub executed: usize,
    pub rejected: usize,
}

/// Read commands line by line until end of input.
///
/// A line whose parameters can't be parsed is reported and skipped, as is a
/// line that isn't valid UTF-8. Failing to read input or to write the terminal
/// ends the loop with an error.
pub fn run<R, W, N>(input: R, terminal: &mut Terminal<W, N>) -> TermResult<Summary>
where
    R: BufRead,
    W: Write,
    N: Notifier,
{
    run_with_prompt(input, terminal, |_| Ok(()))
}

/// Like [`run`], calling `prompt` before each line is read.
pub fn run_with_prompt<R, W, N, P>(
    mut input: R,
    terminal: &mut Terminal<W, N>,
    mut prompt: P,
) -> TermResult<Summary>
where
    R: BufRead,
    W: Write,
    N: Notifier,
    P: FnMut(&mut Terminal<W, N>) -> TermResult<()>,
{
    let mut summary = Summary::default();
    let mut buf = Vec::new();
    prompt(terminal)?;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).map_err(TermError::Input)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and the line falls through to the fallback
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            prompt(terminal)?;
            continue;
        }

        match classify(line) {
            Ok(command) => {
                terminal.execute(&command)?;
                if matches!(command, Command::Unrecognized(_)) {
                    summary.rejected += 1;
                } else {
                    summary.executed += 1;
                }
            }
            Err(e) => {
                warn!("Rejected {:?}: {}", line, e);
                terminal.report(&e.to_string())?;
                summary.rejected += 1;
            }
        }
        prompt(terminal)?;
    }
    debug!("Input exhausted: {:?}", summary);
    Ok(summary)
}
