mod cli;
mod interactive;
mod logging;
mod render;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use regform_core::{
    cities_for, countries, validate, App, FormController, FormData, FormState, Outcome, SuccessView,
};
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, Cmd, Format};
use crate::render::{render_errors, render_form, render_success};

/// Result of checking or submitting a form data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Accepted,
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Accepted => ExitCode::SUCCESS,
            Status::Rejected => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let mut out = io::stdout().lock();
    match args.cmd {
        Cmd::Validate { file, format } => Ok(validate_file(&file, format, &mut out)?.into()),
        Cmd::Submit { file, format } => Ok(submit_file(&file, format, &mut out)?.into()),
        Cmd::Cities { country } => {
            list_cities(country.as_deref(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Interactive => {
            let mut app = App::new();
            interactive::run(&mut app, io::stdin().lock(), out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(file: &Path) -> Result<FormData> {
    let data = FormData::from_file(file)
        .with_context(|| format!("Failed to load form data from {}", file.display()))?;
    info!(file = %file.display(), "Loaded form data");
    Ok(data)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn validate_file<W: Write>(file: &Path, format: Format, out: &mut W) -> Result<Status> {
    let errors = validate(&load(file)?);

    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&errors)?)?,
        Format::Text if errors.is_empty() => writeln!(out, "Form data is valid.")?,
        Format::Text => write_lines(out, &render_errors(&errors))?,
    }

    Ok(if errors.is_empty() {
        Status::Accepted
    } else {
        Status::Rejected
    })
}

fn submit_file<W: Write>(file: &Path, format: Format, out: &mut W) -> Result<Status> {
    let mut controller = FormController::with_state(FormState::with_data(load(file)?));

    match controller.submit() {
        Outcome::Submitted(submission) => {
            match format {
                Format::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&json!({ "status": "submitted", "submission": submission }))?
                )?,
                Format::Text => write_lines(out, &render_success(&SuccessView::new(Some(submission))))?,
            }
            Ok(Status::Accepted)
        }
        Outcome::Rejected { errors } => {
            match format {
                Format::Json => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&json!({ "status": "rejected", "errors": errors }))?
                )?,
                Format::Text => write_lines(out, &render_form(controller.state()))?,
            }
            Ok(Status::Rejected)
        }
        // Submit always ends in one of the two outcomes above.
        Outcome::Updated => Ok(Status::Rejected),
    }
}

fn list_cities<W: Write>(country: Option<&str>, out: &mut W) -> Result<()> {
    match country {
        Some(country) => {
            for city in cities_for(country) {
                writeln!(out, "{}", city)?;
            }
        }
        None => {
            for country in countries() {
                writeln!(out, "{}", country)?;
            }
        }
    }
    Ok(())
}
