// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of operator input lines into console commands.

use seatbook_domain::{DomainError, SeatId, Show, ShowDate};
use std::str::FromStr;
use thiserror::Error;

/// Console input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' takes no further arguments, got '{extra}'")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error(transparent)]
    InvalidSeat(#[from] DomainError),
}

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Date(ShowDate),
    Show(Show),
    Toggle(SeatId),
    Save,
    Load { date: ShowDate, show: Show },
    Reset,
    Stats,
    Seat(SeatId),
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  date <DATE>           select the date to work on (one word, e.g. 2024-01-01)
  show <SHOW>           select the show to work on
  toggle <SEAT>         advance a seat: available > booked > blocked > bms-booked
  save                  save the seat map for the selected date and show
  load <DATE> <SHOW>    load the latest booking saved for a date and show
                        (the show is everything after the date)
  reset                 reset the seat map to the default layout
  stats                 print booking statistics
  seat <SEAT>           print one seat
  history               print saved bookings
  help                  print this list
  quit                  leave the console";

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line: &str = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "date" => {
                let date: &str = required(rest, "date", "a date")?;
                // Dates are one word so that `load <DATE> <SHOW>` can read them back
                if let Some((_, extra)) = date.split_once(char::is_whitespace) {
                    return Err(ConsoleError::UnexpectedArgument {
                        command: "date",
                        extra: extra.trim().to_string(),
                    });
                }
                Ok(Self::Date(ShowDate::new(date)))
            }
            "show" => Ok(Self::Show(Show::new(required(rest, "show", "a show name")?))),
            "toggle" => Ok(Self::Toggle(required(rest, "toggle", "a seat id")?.parse()?)),
            "seat" => Ok(Self::Seat(required(rest, "seat", "a seat id")?.parse()?)),
            "load" => {
                let args: &str = required(rest, "load", "a date and a show")?;
                let Some((date, show)) = args.split_once(char::is_whitespace) else {
                    return Err(ConsoleError::MissingArgument {
                        command: "load",
                        expected: "a date and a show",
                    });
                };
                Ok(Self::Load {
                    date: ShowDate::new(date),
                    show: Show::new(show.trim()),
                })
            }
            "save" => no_args(rest, "save", Self::Save),
            "reset" => no_args(rest, "reset", Self::Reset),
            "stats" => no_args(rest, "stats", Self::Stats),
            "history" => no_args(rest, "history", Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ConsoleError::UnknownCommand(word.to_string())),
        }
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ConsoleError> {
    if rest.is_empty() {
        Err(ConsoleError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn no_args(
    rest: &str,
    command: &'static str,
    parsed: ConsoleCommand,
) -> Result<ConsoleCommand, ConsoleError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ConsoleError::UnexpectedArgument {
            command,
            extra: rest.to_string(),
        })
    }
}
