//! Alignment and direction settings for rows of items.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

/// The direction items flow within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Items flow from left to right.
    #[default]
    Forward,
    /// Items flow from right to left.
    Reverse,
}

/// The horizontal alignment of items within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HorizontalAlignment {
    /// Rows start at the bound's left edge.
    #[default]
    Leading,
    /// Rows are centred in the bound's width.
    Center,
    /// Rows end at the bound's right edge.
    Trailing,
}

/// The vertical alignment of an item within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VerticalAlignment {
    /// Items hug the top of the row.
    Top,
    /// Items are centred within the row's height.
    #[default]
    Center,
    /// Items hug the bottom of the row.
    Bottom,
}

/// Error returned when a configuration value cannot be parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {expected} `{input}`")]
pub struct ParseError {
    input: String,
    expected: &'static str,
}

impl ParseError {
    fn new(input: &str, expected: &'static str) -> Self {
        Self {
            input: input.to_string(),
            expected,
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The kind of value that was expected.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        self.expected
    }
}

macro_rules! named_values {
    ($ty:ty, $expected:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase name used when parsing and serializing.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $(name if name.eq_ignore_ascii_case($name) => Ok(Self::$variant),)+
                    _ => Err(ParseError::new(s, $expected)),
                }
            }
        }
    };
}

named_values!(Direction, "direction", {
    "forward" => Forward,
    "reverse" => Reverse,
});

named_values!(HorizontalAlignment, "horizontal alignment", {
    "leading" => Leading,
    "center" => Center,
    "trailing" => Trailing,
});

named_values!(VerticalAlignment, "vertical alignment", {
    "top" => Top,
    "center" => Center,
    "bottom" => Bottom,
});

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_defaults() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Leading);
        assert_eq!(VerticalAlignment::default(), VerticalAlignment::Center);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("reverse".parse::<Direction>(), Ok(Direction::Reverse));
        assert_eq!(" Trailing ".parse::<HorizontalAlignment>(), Ok(HorizontalAlignment::Trailing));
        assert_eq!("BOTTOM".parse::<VerticalAlignment>(), Ok(VerticalAlignment::Bottom));
    }

    #[test]
    fn test_display_matches_parse() {
        for alignment in [
            HorizontalAlignment::Leading,
            HorizontalAlignment::Center,
            HorizontalAlignment::Trailing,
        ] {
            assert_eq!(alignment.to_string().parse::<HorizontalAlignment>(), Ok(alignment));
        }
    }

    #[test]
    fn test_parse_error_message() {
        let error = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(error.input(), "sideways");
        assert_eq!(error.expected(), "direction");
        assert_eq!(error.to_string(), "unknown direction `sideways`");

        let error = "middle".parse::<VerticalAlignment>().unwrap_err();
        assert_eq!(error.to_string(), "unknown vertical alignment `middle`");
    }
}
