use crate::core::estimator::CapacityEstimator;
use crate::core::session::{InputField, Session};
use crate::core::Storage;
use crate::domain::model::CapacityReport;
use crate::export::{table, ExportFormat};
use crate::utils::error::{ErrorSeverity, EstimatorError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Set(InputField, String),
    Calculate,
    Reset,
    Export(ExportFormat),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = EstimatorError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match (keyword.as_str(), args.as_slice()) {
            ("show", []) => Command::Show,
            ("set", [field, value]) => Command::Set(field.parse()?, value.to_string()),
            ("calc" | "calculate", []) => Command::Calculate,
            ("reset", []) => Command::Reset,
            ("export", [format]) => Command::Export(format.parse()?),
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => {
                return Err(EstimatorError::UnknownCommandError {
                    command: line.trim().to_string(),
                })
            }
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  show                  list the current inputs
  set <field> <value>   change one input
  calc                  calculate capacity for the current inputs
  reset                 restore the default inputs
  export <format>       write csv, pdf, json or bundle
  help                  show this message
  quit                  leave the session
";

/// Runs a line-oriented session until `quit` or end of input. Bad commands
/// and bad values are reported on `out` and the session carries on; only
/// failures to write to `out` end it early.
pub fn run<S, R, W>(
    session: &mut Session,
    estimator: &CapacityEstimator<S>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Data Capacity Estimator for Payment Service")?;
    write!(out, "{}", table::render_inputs(session.inputs()))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected command {:?}: {}", line, e);
                writeln!(out, "❌ {}", e.user_friendly_message())?;
                writeln!(out, "💡 {}", e.recovery_suggestion())?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Err(e) = execute(session, estimator, command, out) {
            if e.severity() >= ErrorSeverity::Medium {
                tracing::warn!("Command failed: {}", e);
            }
            writeln!(out, "❌ {}", e.user_friendly_message())?;
        }
    }

    Ok(())
}

fn execute<S: Storage, W: Write>(
    session: &mut Session,
    estimator: &CapacityEstimator<S>,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Show => write!(out, "{}", table::render_inputs(session.inputs()))?,
        Command::Set(field, value) => {
            session.set(field, &value)?;
            let current = field.value_of(session.inputs());
            let default = field.value_of(session.defaults());
            if current == default {
                writeln!(out, "{} = {}", field.label(), current)?;
            } else {
                writeln!(out, "{} = {} (default {})", field.label(), current, default)?;
            }
        }
        Command::Calculate => {
            let result = session.calculate();
            writeln!(out, "Data Capacity Requirements")?;
            write!(out, "{}", table::render_results(&result))?;
        }
        Command::Reset => {
            session.reset();
            writeln!(out, "Inputs reset to defaults.")?;
            write!(out, "{}", table::render_inputs(session.defaults()))?;
        }
        Command::Export(format) => {
            let result = match session.last_result() {
                Some(result) => *result,
                None => session.calculate(),
            };
            let report = CapacityReport::new(*session.inputs(), result);
            let path = estimator.export(&report, format)?;
            writeln!(out, "📁 Saved {} to {}", format, path)?;
        }
        Command::Help => write!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}
