//! Line-oriented command script driving the page.

use std::time::Duration;

use pagedom::DomError;
use pagekit::Page;
use thiserror::Error;

/// One user action, or a request to the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a control's value as if typed.
    Type { id: String, text: String },
    /// Empty a control.
    Clear { id: String },
    Blur,
    Focus { id: String },
    Click { id: String },
    Submit,
    Hover { id: String },
    Leave { id: String },
    Touch { id: String },
    Release { id: String },
    /// Let wall-clock time pass before the next command.
    Wait(Duration),
    Show,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("invalid duration `{0}`, expected milliseconds")]
    InvalidDuration(String),
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = split_word(line);
    let command = match name {
        "type" => {
            let (id, text) = split_word(rest);
            if id.is_empty() {
                return Err(missing("type", "an element id"));
            }
            if text.is_empty() {
                return Err(missing("type", "some text"));
            }
            Command::Type {
                id: id.to_string(),
                text: text.to_string(),
            }
        }
        "clear" => Command::Clear {
            id: single_id("clear", rest)?,
        },
        "focus" => Command::Focus {
            id: single_id("focus", rest)?,
        },
        "click" => Command::Click {
            id: single_id("click", rest)?,
        },
        "hover" => Command::Hover {
            id: single_id("hover", rest)?,
        },
        "leave" => Command::Leave {
            id: single_id("leave", rest)?,
        },
        "touch" => Command::Touch {
            id: single_id("touch", rest)?,
        },
        "release" => Command::Release {
            id: single_id("release", rest)?,
        },
        "wait" => {
            if rest.is_empty() {
                return Err(missing("wait", "a duration in milliseconds"));
            }
            let ms: u64 = rest
                .parse()
                .map_err(|_| CommandError::InvalidDuration(rest.to_string()))?;
            Command::Wait(Duration::from_millis(ms))
        }
        "blur" => no_args("blur", rest, Command::Blur)?,
        "submit" => no_args("submit", rest, Command::Submit)?,
        "show" => no_args("show", rest, Command::Show)?,
        "quit" | "exit" => no_args("quit", rest, Command::Quit)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Split off the first whitespace-delimited word; the rest keeps its inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn missing(command: &'static str, what: &'static str) -> CommandError {
    CommandError::MissingArgument { command, what }
}

fn single_id(command: &'static str, rest: &str) -> Result<String, CommandError> {
    let (id, extra) = split_word(rest);
    if id.is_empty() {
        return Err(missing(command, "an element id"));
    }
    if !extra.is_empty() {
        return Err(CommandError::UnexpectedArgument(command));
    }
    Ok(id.to_string())
}

fn no_args(command: &'static str, rest: &str, value: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(CommandError::UnexpectedArgument(command))
    }
}

/// Perform a page action. `Wait`, `Show` and `Quit` belong to the host loop
/// and do nothing here.
pub fn apply(page: &mut Page, command: &Command) -> Result<(), CommandError> {
    match command {
        Command::Type { id, text } => page.type_text(id, text)?,
        Command::Clear { id } => page.type_text(id, "")?,
        Command::Blur => page.blur(),
        Command::Focus { id } => page.focus(id)?,
        Command::Click { id } => page.click(id)?,
        Command::Submit => {
            page.submit()?;
        }
        Command::Hover { id } => page.hover(id)?,
        Command::Leave { id } => page.leave(id)?,
        Command::Touch { id } => page.touch_start(id)?,
        Command::Release { id } => page.touch_end(id)?,
        Command::Wait(_) | Command::Show | Command::Quit => {}
    }
    Ok(())
}
