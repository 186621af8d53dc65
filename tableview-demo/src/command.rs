//! Line commands understood by the demo session.

use std::str::FromStr;

use tableview::body::RowId;
use tableview::controller::PagerAction;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate a header by position.
    Sort(usize),
    /// Drop a sort that has not been committed yet.
    Cancel,
    Pager(PagerAction),
    /// Append a row from comma-separated cells.
    Add(Vec<String>),
    Remove(RowId),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        match name {
            "sort" => Ok(Command::Sort(number("sort", rest)?)),
            "cancel" => Ok(Command::Cancel),
            "first" => Ok(Command::Pager(PagerAction::First)),
            "prev" => Ok(Command::Pager(PagerAction::Prev)),
            "next" => Ok(Command::Pager(PagerAction::Next)),
            "last" => Ok(Command::Pager(PagerAction::Last)),
            "size" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("size"));
                }
                Ok(Command::Pager(PagerAction::SelectPageSize(rest.to_string())))
            }
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("add"));
                }
                Ok(Command::Add(rest.split(',').map(|cell| cell.trim().to_string()).collect()))
            }
            "remove" => Ok(Command::Remove(RowId(number("remove", rest.trim_start_matches('#'))?))),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

pub const HELP: &str = "\
commands:
  sort N        sort by header N (again to flip direction)
  cancel        drop a pending sort
  first | prev | next | last
  size V        page size: a number or 'all'
  add a,b,c     append a row
  remove ID     remove a row by id
  show          print the table
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("next".parse(), Ok(Command::Pager(PagerAction::Next)));
        assert_eq!("  first ".parse(), Ok(Command::Pager(PagerAction::First)));
        assert_eq!("".parse(), Ok(Command::Show));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("sort 2".parse(), Ok(Command::Sort(2)));
        assert_eq!(
            "sort".parse::<Command>(),
            Err(CommandError::MissingArgument("sort"))
        );
        assert_eq!(
            "sort x".parse::<Command>(),
            Err(CommandError::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn test_parse_size_keeps_raw_value() {
        assert_eq!(
            "size all".parse(),
            Ok(Command::Pager(PagerAction::SelectPageSize("all".into())))
        );
        assert_eq!(
            "size -3".parse(),
            Ok(Command::Pager(PagerAction::SelectPageSize("-3".into())))
        );
    }

    #[test]
    fn test_parse_add_and_remove() {
        assert_eq!(
            "add Oslo, Norway ,7".parse(),
            Ok(Command::Add(vec!["Oslo".into(), "Norway".into(), "7".into()]))
        );
        assert_eq!("remove #4".parse(), Ok(Command::Remove(RowId(4))));
        assert_eq!("remove 4".parse(), Ok(Command::Remove(RowId(4))));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "jump 3".parse::<Command>(),
            Err(CommandError::Unknown("jump".into()))
        );
    }
}
