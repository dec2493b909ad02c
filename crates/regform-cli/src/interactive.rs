//! Line-oriented form session.
//!
//! Each input line is one command; after every command the current route
//! is printed again.

use std::io::{BufRead, Write};

use anyhow::Result;
use regform_core::{App, Field, FieldParseError, FormEvent, Outcome, Route};
use thiserror::Error;
use tracing::debug;

use crate::render::render_route;

const HELP: &str = "\
commands:
  set <field> <value...>   change a field value (\"...\" keeps spaces)
  blur <field>             leave a field (marks it touched)
  submit                   submit the form
  toggle-password          show or hide the password
  cities                   list cities for the selected country
  show                     print the current view
  back                     return to an empty form
  help                     this text
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Blur(Field),
    Submit,
    TogglePassword,
    Cities,
    Show,
    Back,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error(transparent)]
    Field(#[from] FieldParseError),
}

impl Command {
    /// Command word, without arguments (values may hold a password).
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set(..) => "set",
            Command::Blur(_) => "blur",
            Command::Submit => "submit",
            Command::TogglePassword => "toggle-password",
            Command::Cities => "cities",
            Command::Show => "show",
            Command::Back => "back",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        match word {
            "" => Err(ParseError::Empty),
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::Set(parse_field(name, "set")?, parse_value(value)))
            }
            "blur" => Ok(Command::Blur(parse_field(rest, "blur")?)),
            "submit" => Ok(Command::Submit),
            "toggle-password" => Ok(Command::TogglePassword),
            "cities" => Ok(Command::Cities),
            "show" => Ok(Command::Show),
            "back" => Ok(Command::Back),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_field(name: &str, cmd: &'static str) -> Result<Field, ParseError> {
    if name.is_empty() {
        return Err(ParseError::MissingField(cmd));
    }
    Ok(name.parse()?)
}

/// Leading padding is dropped; a value wrapped in double quotes is taken
/// verbatim, so `set firstName "  "` stores two spaces.
fn parse_value(raw: &str) -> String {
    let value = raw.trim_start();
    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(quoted) => quoted.to_string(),
        None => value.to_string(),
    }
}

/// Run a session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut out: W) -> Result<()> {
    print_lines(&mut out, &render_route(app.route()))?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        debug!(command = command.name(), "Interactive command");

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Cities => {
                let Route::Form(controller) = app.route() else {
                    writeln!(out, "error: not on the form")?;
                    continue;
                };
                let cities = controller.state().city_options();
                if cities.is_empty() {
                    writeln!(out, "(select a country first)")?;
                } else {
                    writeln!(out, "{}", cities.join(", "))?;
                }
                continue;
            }
            Command::Show => {}
            Command::Back => app.go_back(),
            Command::Set(field, value) => report(&mut out, app.dispatch(FormEvent::edit(field, value)))?,
            Command::Blur(field) => report(&mut out, app.dispatch(FormEvent::Blur(field)))?,
            Command::Submit => report(&mut out, app.dispatch(FormEvent::Submit))?,
            Command::TogglePassword => report(&mut out, app.dispatch(FormEvent::TogglePassword))?,
        }

        print_lines(&mut out, &render_route(app.route()))?;
    }

    Ok(())
}

fn report<W: Write>(out: &mut W, outcome: Option<Outcome>) -> Result<()> {
    match outcome {
        None => writeln!(out, "error: not on the form, use 'back' first")?,
        Some(Outcome::Rejected { errors }) => {
            writeln!(out, "Form has {} error(s).", errors.len())?
        }
        Some(Outcome::Updated) | Some(Outcome::Submitted(_)) => {}
    }
    Ok(())
}

fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
