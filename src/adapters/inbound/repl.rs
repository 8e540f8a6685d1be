//! Interactive loop of `rebuild-console browse`
//!
//! Reads one command per line, hands it to the current view and re-renders.
//! Fetching only happens in `sync`, so commands that change nothing never
//! reach the backend.

use crate::application::views::{InteractiveView, ViewCommand};
use crate::ports::outbound::{OutputPresenter, ProgressReporter, ViewRenderer};
use crate::shared::error::ConsoleError;
use crate::shared::Result;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  page <n>                 go to page n
  per-page <n>             rows per page (returns to page 1)
  next | prev              move one page
  type <field> <text>      type into a filter without applying it
  commit <field>           apply what was typed
  filter <field> [value]   set a filter; no value clears it
  rebuild <row>            rebuild the row with the given number (1 based)
  help                     show this help
  quit                     leave";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ViewCommand>> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field.to_string(), value.trim().to_string()),
        None => (rest.to_string(), String::new()),
    };

    let command = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "page" => ViewCommand::Page(number(word, rest)?),
        "per-page" | "perpage" => ViewCommand::PerPage(number(word, rest)?),
        "next" | "n" => ViewCommand::Next,
        "prev" | "previous" | "p" => ViewCommand::Previous,
        "type" => ViewCommand::Input {
            field: required(word, field)?,
            value,
        },
        "commit" => ViewCommand::Commit {
            field: required(word, field)?,
        },
        "filter" => ViewCommand::Filter {
            field: required(word, field)?,
            value,
        },
        "rebuild" => {
            let row: usize = number(word, rest)?;
            if row == 0 {
                return Err(invalid("row numbers start at 1"));
            }
            ViewCommand::Rebuild(row - 1)
        }
        "help" | "?" => ViewCommand::Help,
        "quit" | "exit" | "q" => ViewCommand::Quit,
        other => return Err(invalid(&format!("unknown command '{}', try 'help'", other))),
    };
    Ok(Some(command))
}

fn number<T: std::str::FromStr>(command: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| invalid(&format!("'{}' needs a number, got '{}'", command, value)))
}

fn required(command: &str, field: String) -> Result<String> {
    if field.is_empty() {
        return Err(invalid(&format!("'{}' needs a filter name", command)));
    }
    Ok(field)
}

fn invalid(message: &str) -> anyhow::Error {
    ConsoleError::Validation {
        message: message.to_string(),
    }
    .into()
}

/// Most views need at most two rounds: the record, then the dependency set
/// it points at.
const MAX_SYNC_ROUNDS: usize = 4;

/// Syncs until the view has nothing left to fetch.
pub async fn settle(view: &mut dyn InteractiveView) {
    for _ in 0..MAX_SYNC_ROUNDS {
        if !view.sync().await {
            break;
        }
    }
}

/// Drives `view` until `quit` or end of input.
///
/// Command errors are reported and the loop continues; only output errors
/// end it.
pub async fn run_interactive<R: BufRead>(
    view: &mut dyn InteractiveView,
    input: R,
    renderer: &dyn ViewRenderer,
    presenter: &dyn OutputPresenter,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let title = view.screen().title;
    let mut lines = input.lines();
    loop {
        progress.begin_loading(&title);
        settle(view).await;
        progress.end_loading();
        presenter.present(&renderer.render(&view.screen())?)?;

        eprint!("> ");
        std::io::stderr().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                progress.report_error(&format!("❌ {}", e));
                continue;
            }
        };

        match command {
            ViewCommand::Quit => break,
            ViewCommand::Help => progress.report(HELP),
            command => {
                tracing::debug!(?command, "dispatching");
                if let Err(e) = view.dispatch(command).await {
                    progress.report_error(&format!("❌ {}", e));
                }
            }
        }
    }
    Ok(())
}
