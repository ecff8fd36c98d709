//! Startup parameters - the positional launch encoding.
//!
//! A ruler is launched either with no arguments (defaults) or with exactly six
//! space-separated positional fields:
//!
//! ```text
//! width height isVertical opacity isLocked topMost
//! 400   75     False      0.7     False    False
//! ```
//!
//! "Duplicate" serializes the running ruler with [`StartupParams::to_args`] and
//! the new process parses it back with [`StartupParams::from_args`], so the two
//! must stay in lock-step.

mod error;

pub use error::{ParamsError, ParamsResult};

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};
use crate::settings::RulerSettings;
use std::fmt;

/// Number of positional fields in the launch encoding
pub const PARAM_COUNT: usize = 6;

/// Everything needed to open a ruler: its size plus its settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartupParams {
    pub width: i32,
    pub height: i32,
    pub settings: RulerSettings,
}

impl Default for StartupParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            settings: RulerSettings::default(),
        }
    }
}

impl StartupParams {
    /// Parse command-line arguments (program name already stripped).
    ///
    /// No arguments yields the defaults; anything else must be exactly six
    /// well-formed fields.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> ParamsResult<Self> {
        if args.is_empty() {
            return Ok(Self::default());
        }
        if args.len() != PARAM_COUNT {
            return Err(ParamsError::WrongCount {
                expected: PARAM_COUNT,
                actual: args.len(),
            });
        }

        let field = |i: usize| args[i].as_ref().trim();

        let width = parse_dimension("width", field(0))?;
        let height = parse_dimension("height", field(1))?;
        let is_vertical = parse_bool("isVertical", field(2))?;
        let opacity = parse_opacity("opacity", field(3))?;
        let is_locked = parse_bool("isLocked", field(4))?;
        let stay_on_top = parse_bool("topMost", field(5))?;

        Ok(Self {
            width,
            height,
            settings: RulerSettings {
                is_vertical,
                is_locked,
                opacity,
                stay_on_top,
            },
        })
    }

    /// Parse a single space-separated parameter line.
    pub fn parse(line: &str) -> ParamsResult<Self> {
        let args: Vec<&str> = line.split_whitespace().collect();
        Self::from_args(&args)
    }

    /// Serialize to the positional fields, in the order `from_args` reads them.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.width.to_string(),
            self.height.to_string(),
            format_bool(self.settings.is_vertical).to_string(),
            self.settings.opacity.to_string(),
            format_bool(self.settings.is_locked).to_string(),
            format_bool(self.settings.stay_on_top).to_string(),
        ]
    }
}

impl fmt::Display for StartupParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_args().join(" "))
    }
}

fn parse_dimension(field: &'static str, value: &str) -> ParamsResult<i32> {
    let parsed: i32 = value.parse().map_err(|_| ParamsError::InvalidInteger {
        field,
        value: value.to_string(),
    })?;
    if parsed < MIN_DIMENSION {
        return Err(ParamsError::NonPositiveDimension {
            field,
            value: parsed,
        });
    }
    if parsed > MAX_DIMENSION {
        return Err(ParamsError::DimensionTooLarge {
            field,
            value: parsed,
            max: MAX_DIMENSION,
        });
    }
    Ok(parsed)
}

fn parse_opacity(field: &'static str, value: &str) -> ParamsResult<f64> {
    let parsed: f64 = value.parse().map_err(|_| ParamsError::InvalidFloat {
        field,
        value: value.to_string(),
    })?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(ParamsError::OpacityOutOfRange {
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}

fn parse_bool(field: &'static str, value: &str) -> ParamsResult<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParamsError::InvalidBool {
            field,
            value: value.to_string(),
        })
    }
}

fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
