//! Command parsing and execution.
//!
//! Arguments are positional and parsed by hand. Every command produces its
//! whole output as a `String`, so the binary only decides where to print it.

use linkchain_core::{Chain, ChainError, Node};

/// Errors reported by the driver.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` is missing argument <{name}>")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    #[error("argument <{name}> must be an integer, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Link four free nodes by hand and look up position 3.
    Demo,
    /// Append each value to a flat chain.
    List(Vec<i64>),
    /// A rectangular table filled with `pad`.
    Grid { rows: usize, cols: usize, pad: i64 },
    /// A rectangular table grown by one `append_2d`.
    Grow {
        rows: usize,
        cols: usize,
        row: usize,
        value: i64,
        pad: i64,
        keep_dims: bool,
    },
}

/// Usage text printed when no command is given.
pub fn usage() -> &'static str {
    "Usage: linkchain <command> [args]\n\
     \n\
     Commands:\n  \
       demo                                     Link 1 -> 5 -> 10 -> 100 and index position 3\n  \
       list <v>...                              Append values to a flat chain\n  \
       grid <rows> <cols> <pad>                 Print a rectangular table\n  \
       grow <rows> <cols> <row> <value> <pad>   Append to one row, padding the others\n      \
            [--jagged]                          ...or grow only the target row\n"
}

impl Command {
    /// Parse arguments (without the program name).
    ///
    /// Returns `Ok(None)` when no command was given.
    pub fn parse(args: &[String]) -> Result<Option<Self>, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(None);
        };
        let command = match name.as_str() {
            "demo" => {
                no_more(rest)?;
                Command::Demo
            }
            "list" => Command::List(
                rest.iter()
                    .map(|v| integer("v", v))
                    .collect::<Result<_, _>>()?,
            ),
            "grid" => {
                let mut args = Positional::new("grid", rest);
                let rows = args.count("rows")?;
                let cols = args.count("cols")?;
                let pad = args.integer("pad")?;
                args.finish()?;
                Command::Grid { rows, cols, pad }
            }
            "grow" => {
                let keep_dims = !rest.iter().any(|a| a == "--jagged");
                let rest: Vec<String> = rest.iter().filter(|a| *a != "--jagged").cloned().collect();
                let mut args = Positional::new("grow", &rest);
                let rows = args.count("rows")?;
                let cols = args.count("cols")?;
                let row = args.count("row")?;
                let value = args.integer("value")?;
                let pad = args.integer("pad")?;
                args.finish()?;
                Command::Grow {
                    rows,
                    cols,
                    row,
                    value,
                    pad,
                    keep_dims,
                }
            }
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Execute a command and return what it prints.
#[tracing::instrument(level = "debug", skip_all, fields(command = ?command))]
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Demo => demo(),
        Command::List(values) => {
            let mut chain = Chain::new();
            for &value in values {
                chain.append(value);
            }
            Ok(format!("{chain}\n"))
        }
        Command::Grid { rows, cols, pad } => {
            let table = Chain::filled_rectangular(*rows, *cols, *pad);
            Ok(format!("{table}\n"))
        }
        Command::Grow {
            rows,
            cols,
            row,
            value,
            pad,
            keep_dims,
        } => {
            let mut table = Chain::filled_rectangular(*rows, *cols, *pad);
            table.append_2d(*value, *row, *keep_dims, *pad)?;
            tracing::debug!(sizes = ?table.row_sizes(), "grew table");
            Ok(format!("{table}\n"))
        }
    }
}

/// Build 1 -> 5 -> 10 -> 100 from free nodes, then adopt it into a chain.
fn demo() -> Result<String, CliError> {
    let mut ten = Node::new(10_i64);
    ten.insert_after(Box::new(Node::new(100)));
    let five = Node::with_next(5, Box::new(ten));

    let mut first = Node::empty();
    first.set_value(1);
    first.insert_after(Box::new(five));

    let chain = Chain::from_nodes(Box::new(first));
    let head = chain.index(0)?;
    let third = chain.index(3)?;
    Ok(format!("{head}\n{third}\n{chain}\n"))
}

/// Cursor over positional arguments of one command.
struct Positional<'a> {
    command: &'static str,
    args: std::slice::Iter<'a, String>,
}

impl<'a> Positional<'a> {
    fn new(command: &'static str, args: &'a [String]) -> Self {
        Positional {
            command,
            args: args.iter(),
        }
    }

    fn take(&mut self, name: &'static str) -> Result<&'a String, CliError> {
        self.args.next().ok_or(CliError::MissingArgument {
            command: self.command,
            name,
        })
    }

    fn integer(&mut self, name: &'static str) -> Result<i64, CliError> {
        let raw = self.take(name)?;
        integer(name, raw)
    }

    fn count(&mut self, name: &'static str) -> Result<usize, CliError> {
        let raw = self.take(name)?;
        raw.parse().map_err(|_| CliError::InvalidNumber {
            name,
            value: raw.clone(),
        })
    }

    fn finish(mut self) -> Result<(), CliError> {
        match self.args.next() {
            Some(extra) => Err(CliError::UnexpectedArgument(extra.clone())),
            None => Ok(()),
        }
    }
}

fn integer(name: &'static str, raw: &str) -> Result<i64, CliError> {
    raw.parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

fn no_more(rest: &[String]) -> Result<(), CliError> {
    match rest.first() {
        Some(extra) => Err(CliError::UnexpectedArgument(extra.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
