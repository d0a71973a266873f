//! Command script parsing
//!
//! One command per line. `#` starts a comment; blank lines are skipped.
//!
//! ```text
//! drop sock
//! mode quick
//! wash
//! wait 2000
//! reset
//! ```

use std::fmt;

use thiserror::Error;

use washday_core::{GarmentKind, WashMode};

/// Demo session used when no script is given
pub const DEMO_SCRIPT: &str = include_str!("../demo.wash");

/// A scripted input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a garment from the pile into the drum
    Drop(GarmentKind),
    /// Choose a wash mode
    Mode(WashMode),
    /// Start the wash
    Wash,
    /// Let time pass, ticking the game (ms)
    Wait(u64),
    /// Reset the game
    Reset,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Drop(kind) => write!(f, "drop {}", kind.id()),
            Command::Mode(mode) => write!(f, "mode {}", mode.label().to_lowercase()),
            Command::Wash => f.write_str("wash"),
            Command::Wait(ms) => write!(f, "wait {}", ms),
            Command::Reset => f.write_str("reset"),
        }
    }
}

/// Script parse errors, with 1-based line numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: unexpected argument `{extra}`")]
    UnexpectedArgument { line: usize, extra: String },
    #[error("line {line}: unknown garment `{id}`")]
    UnknownGarment { line: usize, id: String },
    #[error("line {line}: unknown wash mode `{name}`")]
    UnknownMode { line: usize, name: String },
    #[error("line {line}: invalid duration `{value}`")]
    InvalidDuration { line: usize, value: String },
}

/// Parse a whole script
pub fn parse_script(input: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let mut words = content.split_whitespace();

        let Some(word) = words.next() else {
            continue;
        };

        let command = match word {
            "drop" => {
                let id = argument(&mut words, line, "drop", "a garment id")?;
                let kind = GarmentKind::from_id(id).ok_or_else(|| ScriptError::UnknownGarment {
                    line,
                    id: id.to_owned(),
                })?;
                Command::Drop(kind)
            }
            "mode" => {
                let name = argument(&mut words, line, "mode", "quick, eco or heavy")?;
                let mode = WashMode::from_name(name).ok_or_else(|| ScriptError::UnknownMode {
                    line,
                    name: name.to_owned(),
                })?;
                Command::Mode(mode)
            }
            "wait" => {
                let value = argument(&mut words, line, "wait", "a duration in ms")?;
                let ms = value.parse().map_err(|_| ScriptError::InvalidDuration {
                    line,
                    value: value.to_owned(),
                })?;
                Command::Wait(ms)
            }
            "wash" => Command::Wash,
            "reset" => Command::Reset,
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    word: other.to_owned(),
                })
            }
        };

        if let Some(extra) = words.next() {
            return Err(ScriptError::UnexpectedArgument {
                line,
                extra: extra.to_owned(),
            });
        }

        commands.push(command);
    }

    Ok(commands)
}

fn argument<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    line: usize,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ScriptError> {
    words.next().ok_or(ScriptError::MissingArgument {
        line,
        command,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let script = "drop sock\nmode Quick\nwash\nwait 1500\nreset\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Drop(GarmentKind::Sock),
                Command::Mode(WashMode::Quick),
                Command::Wash,
                Command::Wait(1500),
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let script = "# header\n\n   \ndrop towel   # trailing comment\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands, vec![Command::Drop(GarmentKind::Towel)]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_script("drop sock\ndrop hat\n"),
            Err(ScriptError::UnknownGarment {
                line: 2,
                id: "hat".to_owned()
            })
        );
        assert_eq!(
            parse_script("\n\nspin\n"),
            Err(ScriptError::UnknownCommand {
                line: 3,
                word: "spin".to_owned()
            })
        );
    }

    #[test]
    fn test_argument_errors() {
        assert!(matches!(
            parse_script("wait"),
            Err(ScriptError::MissingArgument { line: 1, command: "wait", .. })
        ));
        assert!(matches!(
            parse_script("wait soon"),
            Err(ScriptError::InvalidDuration { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("mode delicate"),
            Err(ScriptError::UnknownMode { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("wash now"),
            Err(ScriptError::UnexpectedArgument { line: 1, .. })
        ));
    }

    #[test]
    fn test_demo_script_parses() {
        let commands = parse_script(DEMO_SCRIPT).unwrap();
        assert_eq!(commands.first(), Some(&Command::Drop(GarmentKind::Sock)));
        assert_eq!(commands.last(), Some(&Command::Reset));
    }

    #[test]
    fn test_display_parses_back() {
        let commands = [
            Command::Drop(GarmentKind::TShirt),
            Command::Mode(WashMode::Heavy),
            Command::Wait(16),
        ];
        for command in commands {
            let parsed = parse_script(&command.to_string()).unwrap();
            assert_eq!(parsed, vec![command]);
        }
    }
}
