//! # Command Parsing
//!
//! Turns a REPL input line into a [`Command`]. Commands are case-insensitive
//! and whitespace-separated; unknown commands and malformed arguments
//! produce an error message, never a crash, and never reach the engine.
//!
//! The `insert` argument must parse as a signed 64-bit integer. Anything
//! else is rejected here with a one-line message, so the engine only ever
//! sees valid keys.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert(i64),
    Sample,
    Reset,
    Show,
    Steps,
    Goto(usize),
    Next,
    Prev,
    First,
    Last,
    Play(Option<f32>),
    Pause,
    Svg(PathBuf),
    Check,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Command, String> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(&head) = parts.first() else {
            return Err(String::new());
        };
        let args = &parts[1..];

        match head.to_lowercase().as_str() {
            "insert" | "i" => {
                let Some(raw) = args.first() else {
                    return Err("usage: insert <integer>".to_string());
                };
                raw.parse::<i64>()
                    .map(Command::Insert)
                    .map_err(|_| format!("not an integer: '{raw}'"))
            }
            "sample" => Ok(Command::Sample),
            "reset" => Ok(Command::Reset),
            "show" | "print" => Ok(Command::Show),
            "steps" => Ok(Command::Steps),
            "goto" => {
                let Some(raw) = args.first() else {
                    return Err("usage: goto <step-index>".to_string());
                };
                raw.parse::<usize>()
                    .map(Command::Goto)
                    .map_err(|_| format!("not a step index: '{raw}'"))
            }
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "first" => Ok(Command::First),
            "last" => Ok(Command::Last),
            "play" => match args.first() {
                None => Ok(Command::Play(None)),
                Some(raw) => raw
                    .parse::<f32>()
                    .map(|s| Command::Play(Some(s)))
                    .map_err(|_| format!("not a speed: '{raw}'")),
            },
            "pause" => Ok(Command::Pause),
            "svg" => {
                let Some(raw) = args.first() else {
                    return Err("usage: svg <path>".to_string());
                };
                Ok(Command::Svg(PathBuf::from(raw)))
            }
            "check" => Ok(Command::Check),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!(
                "unknown command: '{other}'. Type help for available commands."
            )),
        }
    }
}

pub fn help_text() -> String {
    "\
Commands:
  insert <key>   schedule an integer insertion (duplicates allowed)
  sample         load the demo sequence 10 20 5 6 12 30 7 17
  reset          cancel pending inserts and discard the tree
  show           print the current tree, one line per level
  steps          list recorded animation steps
  goto <n>       jump the step cursor to step n
  next / prev    move the step cursor one step
  first / last   jump the step cursor to either end
  play [speed]   autoplay steps (speed 0.25..4, default 1)
  pause          stop autoplay
  svg <path>     write the current tree as an SVG file
  check          verify tree invariants
  quit           exit"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_parses_signed_integers() {
        assert_eq!(Command::parse("insert 42"), Ok(Command::Insert(42)));
        assert_eq!(Command::parse("i -7"), Ok(Command::Insert(-7)));
    }

    #[test]
    fn non_numeric_insert_is_rejected() {
        assert!(Command::parse("insert abc").is_err());
        assert!(Command::parse("insert 1.5").is_err());
        assert!(Command::parse("insert").is_err());
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(Command::parse("SAMPLE"), Ok(Command::Sample));
        assert_eq!(Command::parse("Show"), Ok(Command::Show));
    }

    #[test]
    fn play_takes_an_optional_speed() {
        assert_eq!(Command::parse("play"), Ok(Command::Play(None)));
        assert_eq!(Command::parse("play 2.0"), Ok(Command::Play(Some(2.0))));
        assert!(Command::parse("play fast").is_err());
    }

    #[test]
    fn unknown_commands_mention_help() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("help"));
    }
}
