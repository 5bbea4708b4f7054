//! Interactive menu loop.
//!
//! Renders a fixed menu of daemon operations, reads one selection per
//! cycle from a line-oriented reader, and dispatches to the matching
//! command. Selections 3-6 consume one follow-up identifier token. The
//! loop runs until the user picks `0` or the input ends.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::client::DaemonClient;
use crate::commands;

/// Errors produced while reading menu input.
///
/// All variants except `Io` are recovered inside the loop: the rejection
/// is reported and the menu is shown again.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream reached end of file.
    #[error("input stream closed")]
    Eof,

    /// The line was empty after trimming.
    #[error("empty input line")]
    Empty,

    /// The selection did not parse as an integer.
    #[error("not a number: {0}")]
    NotANumber(String),

    /// Underlying read failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A single menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Leave,
    ListContainers,
    ListImages,
    StopContainer,
    StartContainer,
    RemoveContainer,
    RemoveImage,
}

impl Selection {
    /// Maps an option number to a selection. Numbers outside the menu
    /// range map to `None`.
    pub fn from_option(option: i64) -> Option<Self> {
        match option {
            0 => Some(Self::Leave),
            1 => Some(Self::ListContainers),
            2 => Some(Self::ListImages),
            3 => Some(Self::StopContainer),
            4 => Some(Self::StartContainer),
            5 => Some(Self::RemoveContainer),
            6 => Some(Self::RemoveImage),
            _ => None,
        }
    }
}

/// Runs the interactive loop until the user selects leave or the input
/// ends.
///
/// The reader and writer are generic so tests can drive the loop with
/// scripted input and capture its output.
pub async fn run<R, W>(daemon: &DaemonClient, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to dockmate")?;

    loop {
        render_menu(out)?;

        let option = match read_selection(input) {
            Ok(option) => option,
            Err(InputError::Eof) => break,
            Err(InputError::Io(e)) => return Err(e),
            Err(err) => {
                tracing::debug!("selection rejected: {err}");
                writeln!(out, "Invalid option")?;
                continue;
            }
        };

        let Some(selection) = Selection::from_option(option) else {
            writeln!(out, "Invalid option")?;
            continue;
        };

        match selection {
            Selection::Leave => break,
            Selection::ListContainers => commands::ps::execute(daemon, out).await?,
            Selection::ListImages => commands::images::execute(daemon, out).await?,
            Selection::StopContainer => {
                let Some(id) = prompt_identifier(input, out, "Enter container id")? else {
                    continue;
                };
                commands::stop::execute(daemon, &id, out).await?;
            }
            Selection::StartContainer => {
                let Some(id) = prompt_identifier(input, out, "Enter container id")? else {
                    continue;
                };
                commands::start::execute(daemon, &id, out).await?;
            }
            Selection::RemoveContainer => {
                let Some(id) = prompt_identifier(input, out, "Enter container id")? else {
                    continue;
                };
                commands::rm::execute(daemon, &id, out).await?;
            }
            Selection::RemoveImage => {
                let Some(id) = prompt_identifier(input, out, "Enter image id")? else {
                    continue;
                };
                commands::images::execute_rmi(daemon, &id, out).await?;
            }
        }
    }

    writeln!(out, "Leaving dockmate")?;
    Ok(())
}

/// Prints the fixed menu.
fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Choose the option you want:")?;
    writeln!(out, "1 - list containers")?;
    writeln!(out, "2 - list images")?;
    writeln!(out, "3 - stop container")?;
    writeln!(out, "4 - start container")?;
    writeln!(out, "5 - remove container")?;
    writeln!(out, "6 - remove image")?;
    writeln!(out, "0 - leave")
}

/// Reads one trimmed line from the input.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line.trim().to_string())
}

/// Reads one line and parses it as an option number.
fn read_selection<R: BufRead>(input: &mut R) -> Result<i64, InputError> {
    let line = read_line(input)?;
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    line.parse().map_err(|_| InputError::NotANumber(line))
}

/// Reads one line and takes its first whitespace-delimited token as an
/// identifier.
fn read_identifier<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let line = read_line(input)?;
    match line.split_whitespace().next() {
        Some(token) => Ok(token.to_string()),
        None => Err(InputError::Empty),
    }
}

/// Prompts for an identifier and reads it.
///
/// Returns `Ok(None)` when the token is missing or unreadable; the caller
/// skips the operation and goes back to the menu.
fn prompt_identifier<R, W>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{prompt}")?;
    match read_identifier(input) {
        Ok(id) => Ok(Some(id)),
        Err(InputError::Io(e)) => Err(e),
        Err(err) => {
            tracing::debug!("identifier rejected: {err}");
            writeln!(out, "Invalid option")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_selection_from_option() {
        assert_eq!(Selection::from_option(0), Some(Selection::Leave));
        assert_eq!(Selection::from_option(1), Some(Selection::ListContainers));
        assert_eq!(Selection::from_option(6), Some(Selection::RemoveImage));
        assert_eq!(Selection::from_option(7), None);
        assert_eq!(Selection::from_option(-1), None);
    }

    #[test]
    fn test_read_selection_valid() {
        let mut input = Cursor::new("3\n");
        assert_eq!(read_selection(&mut input).unwrap(), 3);
    }

    #[test]
    fn test_read_selection_trims_whitespace() {
        let mut input = Cursor::new("  2 \n");
        assert_eq!(read_selection(&mut input).unwrap(), 2);
    }

    #[test]
    fn test_read_selection_rejects_non_integer() {
        let mut input = Cursor::new("abc\n");
        assert!(matches!(
            read_selection(&mut input),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_read_selection_rejects_empty_line() {
        let mut input = Cursor::new("\n");
        assert!(matches!(read_selection(&mut input), Err(InputError::Empty)));
    }

    #[test]
    fn test_read_selection_eof() {
        let mut input = Cursor::new("");
        assert!(matches!(read_selection(&mut input), Err(InputError::Eof)));
    }

    #[test]
    fn test_read_identifier_takes_first_token() {
        let mut input = Cursor::new("abc123 trailing junk\n");
        assert_eq!(read_identifier(&mut input).unwrap(), "abc123");
    }

    #[test]
    fn test_read_identifier_rejects_blank_line() {
        let mut input = Cursor::new("   \n");
        assert!(matches!(
            read_identifier(&mut input),
            Err(InputError::Empty)
        ));
    }

    #[test]
    fn test_render_menu_lists_all_options() {
        let mut out = Vec::new();
        render_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for line in [
            "1 - list containers",
            "2 - list images",
            "3 - stop container",
            "4 - start container",
            "5 - remove container",
            "6 - remove image",
            "0 - leave",
        ] {
            assert!(text.contains(line), "menu missing {line:?}");
        }
    }
}
