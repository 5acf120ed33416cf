use crate::stopwatch::{Clock, Snapshot, Stopwatch};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::str::FromStr;

const COMMANDS: [&str; 7] = ["start", "stop", "reset", "duration", "status", "help", "quit"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    Duration,
    Status,
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command {0:?}, try \"help\"")]
pub struct CommandParseError(String);

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_suffix("()").unwrap_or(trimmed).trim_end();

        match name.to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "reset" => Ok(Command::Reset),
            "duration" => Ok(Command::Duration),
            "status" => Ok(Command::Status),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandParseError(trimmed.to_string())),
        }
    }
}

/// The result of one command, rendered as a single output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Ok { ok: bool },
    Duration { duration: f64 },
    Status(Snapshot),
    Help { commands: Vec<&'static str> },
    Error { error: String },
}

impl Display for Reply {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Ok { .. } => write!(f, "ok"),
            Reply::Duration { duration } => write!(f, "{duration}"),
            Reply::Status(snapshot) => write!(f, "{snapshot}"),
            Reply::Help { commands } => write!(f, "commands: {}", commands.join(", ")),
            Reply::Error { error } => write!(f, "error: {error}"),
        }
    }
}

/// Drives a stopwatch from line-oriented commands.
pub struct Session<C, W> {
    stopwatch: Stopwatch<C>,
    output: W,
    format: Format,
    prompt: bool,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub fn new(stopwatch: Stopwatch<C>, output: W, format: Format) -> Self {
        Self {
            stopwatch,
            output,
            format,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Reads commands until end of input or `quit`.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and rejected as
    /// unknown commands.
    pub fn run(&mut self, mut input: impl BufRead) -> anyhow::Result<()> {
        let mut buffer = Vec::new();

        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                tracing::debug!("Reached the end of input");
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buffer);

            if line.trim().is_empty() {
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    tracing::debug!("Quitting");
                    return Ok(());
                }
                Ok(command) => self.apply(command),
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse the command");
                    Reply::Error {
                        error: e.to_string(),
                    }
                }
            };

            self.render(&reply)?;
        }
    }

    pub fn apply(&mut self, command: Command) -> Reply {
        tracing::trace!(?command, "Applying command");

        let result = match command {
            Command::Start => self.stopwatch.start(),
            Command::Stop => self.stopwatch.stop(),
            Command::Reset => {
                self.stopwatch.reset();
                Ok(())
            }
            Command::Duration => {
                return Reply::Duration {
                    duration: self.stopwatch.duration(),
                }
            }
            Command::Status => return Reply::Status(self.stopwatch.snapshot()),
            Command::Help => {
                return Reply::Help {
                    commands: COMMANDS.to_vec(),
                }
            }
            // Ending the session is up to the caller.
            Command::Quit => Ok(()),
        };

        match result {
            Ok(()) => Reply::Ok { ok: true },
            Err(e) => {
                tracing::info!(%e, ?command, "Rejected command");
                Reply::Error {
                    error: e.to_string(),
                }
            }
        }
    }

    fn render(&mut self, reply: &Reply) -> anyhow::Result<()> {
        match self.format {
            Format::Text => writeln!(self.output, "{reply}")?,
            Format::Json => {
                serde_json::to_writer(&mut self.output, reply)?;
                writeln!(self.output)?;
            }
        }

        Ok(())
    }

    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
