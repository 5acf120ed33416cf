use clap::Parser;
use stopwatch::console::Format;

/// Drive a stopwatch from the console: start, stop, reset, duration, status.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "STOPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[arg(short, long, env = "STOPWATCH_FORMAT", value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print a prompt before reading each command.
    #[arg(short, long, env = "STOPWATCH_PROMPT")]
    pub prompt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["stopwatch"]).unwrap();

        assert_eq!(arguments.verbosity, 0);
        assert_eq!(arguments.format, Format::Text);
        assert!(!arguments.prompt);
    }

    #[test]
    fn flags() {
        let arguments =
            Arguments::try_parse_from(["stopwatch", "-vvv", "--format", "json", "--prompt"])
                .unwrap();

        assert_eq!(arguments.verbosity, 3);
        assert_eq!(arguments.format, Format::Json);
        assert!(arguments.prompt);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Arguments::try_parse_from(["stopwatch", "--format", "xml"]).is_err());
    }
}
