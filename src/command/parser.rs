//! Line tokenizer for lot commands.

use serde::{Deserialize, Serialize};

/// How numeric arguments that are missing or not integers are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Treat the value as zero.
    #[default]
    Lenient,
    /// Reject the whole line as an invalid command.
    Strict,
}

impl NumberPolicy {
    fn parse<T: std::str::FromStr + Default>(self, token: Option<&str>) -> Option<T> {
        match (token.and_then(|t| t.parse().ok()), self) {
            (Some(value), _) => Some(value),
            (None, Self::Lenient) => Some(T::default()),
            (None, Self::Strict) => None,
        }
    }
}

/// A parsed lot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    Create { capacity: i64 },
    /// `park <registration>`
    Park { registration: String },
    /// `leave <registration> <hours>`
    Leave { registration: String, hours: i64 },
    /// `status`
    Status,
}

impl Command {
    /// Parse one input line.
    ///
    /// The keyword is matched case-insensitively, arguments literally.
    /// Tokens past the ones a command needs are ignored. Returns `None` for an
    /// unknown keyword, a missing registration, or (under
    /// [`NumberPolicy::Strict`]) a bad number.
    #[must_use]
    pub fn parse(line: &str, numbers: NumberPolicy) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?.to_lowercase();

        match keyword.as_str() {
            "create_parking_lot" => Some(Self::Create {
                capacity: numbers.parse(tokens.next())?,
            }),
            "park" => Some(Self::Park {
                registration: tokens.next()?.to_string(),
            }),
            "leave" => {
                let registration = tokens.next()?.to_string();
                let hours = numbers.parse(tokens.next())?;
                Some(Self::Leave {
                    registration,
                    hours,
                })
            }
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Keyword of this command as written in input files.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create_parking_lot",
            Self::Park { .. } => "park",
            Self::Leave { .. } => "leave",
            Self::Status => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let lenient = NumberPolicy::Lenient;
        assert_eq!(
            Command::parse("create_parking_lot 6", lenient),
            Some(Command::Create { capacity: 6 })
        );
        assert_eq!(
            Command::parse("park KA-01-HH-1234", lenient),
            Some(Command::Park {
                registration: "KA-01-HH-1234".to_string()
            })
        );
        assert_eq!(
            Command::parse("leave KA-01-HH-1234 4", lenient),
            Some(Command::Leave {
                registration: "KA-01-HH-1234".to_string(),
                hours: 4
            })
        );
        assert_eq!(Command::parse("status", lenient), Some(Command::Status));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            Command::parse("STATUS", NumberPolicy::Lenient),
            Some(Command::Status)
        );
        assert_eq!(
            Command::parse("Park ka-01", NumberPolicy::Lenient),
            Some(Command::Park {
                registration: "ka-01".to_string()
            })
        );
    }

    #[test]
    fn test_lenient_numbers_fall_back_to_zero() {
        let lenient = NumberPolicy::Lenient;
        assert_eq!(
            Command::parse("create_parking_lot six", lenient),
            Some(Command::Create { capacity: 0 })
        );
        assert_eq!(
            Command::parse("leave KA-01 2.5", lenient),
            Some(Command::Leave {
                registration: "KA-01".to_string(),
                hours: 0
            })
        );
        assert_eq!(
            Command::parse("leave KA-01 x", lenient),
            Some(Command::Leave {
                registration: "KA-01".to_string(),
                hours: 0
            })
        );
        assert_eq!(
            Command::parse("leave KA-01", lenient),
            Some(Command::Leave {
                registration: "KA-01".to_string(),
                hours: 0
            })
        );
    }

    #[test]
    fn test_negative_numbers_are_integers() {
        for numbers in [NumberPolicy::Lenient, NumberPolicy::Strict] {
            assert_eq!(
                Command::parse("create_parking_lot -2", numbers),
                Some(Command::Create { capacity: -2 })
            );
            assert_eq!(
                Command::parse("leave KA-01 -1", numbers),
                Some(Command::Leave {
                    registration: "KA-01".to_string(),
                    hours: -1
                })
            );
        }
    }

    #[test]
    fn test_strict_numbers_reject() {
        let strict = NumberPolicy::Strict;
        assert_eq!(Command::parse("create_parking_lot six", strict), None);
        assert_eq!(Command::parse("leave KA-01", strict), None);
        assert_eq!(
            Command::parse("leave KA-01 3", strict),
            Some(Command::Leave {
                registration: "KA-01".to_string(),
                hours: 3
            })
        );
    }

    #[test]
    fn test_invalid_lines() {
        let lenient = NumberPolicy::Lenient;
        assert_eq!(Command::parse("", lenient), None);
        assert_eq!(Command::parse("fly KA-01", lenient), None);
        assert_eq!(Command::parse("park", lenient), None);
        assert_eq!(Command::parse("leave", lenient), None);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            Command::parse("status now please", NumberPolicy::Lenient),
            Some(Command::Status)
        );
    }
}
