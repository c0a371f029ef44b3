//! Preset data model.
//!
//! A [`Preset`] can only be built through validation, so every value that
//! exists in memory or on disk has three strictly positive fields.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidValue, ValidationError};

/// Catalog used when no preset file exists yet.
pub const DEFAULT_PRESETS: [Preset; 2] = [
    Preset {
        width: 1920,
        height: 1080,
        refresh_rate: 60,
    },
    Preset {
        width: 1280,
        height: 720,
        refresh_rate: 60,
    },
];

/// The three fields of a preset, used to name the culprit in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    RefreshRate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::RefreshRate => "refresh rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPreset")]
pub struct Preset {
    width: u32,
    height: u32,
    refresh_rate: u32,
}

impl Preset {
    /// Build a preset, rejecting any zero field.
    pub fn new(width: u32, height: u32, refresh_rate: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            width: check_value(Field::Width, width.into())?,
            height: check_value(Field::Height, height.into())?,
            refresh_rate: check_value(Field::RefreshRate, refresh_rate.into())?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {}Hz", self.width, self.height, self.refresh_rate)
    }
}

/// Shape of a preset as found on disk, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPreset {
    width: i64,
    height: i64,
    refresh_rate: i64,
}

impl TryFrom<RawPreset> for Preset {
    type Error = ValidationError;

    fn try_from(raw: RawPreset) -> Result<Self, Self::Error> {
        Ok(Self {
            width: check_value(Field::Width, raw.width)?,
            height: check_value(Field::Height, raw.height)?,
            refresh_rate: check_value(Field::RefreshRate, raw.refresh_rate)?,
        })
    }
}

/// Field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetInput {
    pub width: String,
    pub height: String,
    pub refresh_rate: String,
}

impl PresetInput {
    pub fn new(
        width: impl Into<String>,
        height: impl Into<String>,
        refresh_rate: impl Into<String>,
    ) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            refresh_rate: refresh_rate.into(),
        }
    }

    /// Parse and validate all three fields. Fields are checked in order, so
    /// the error names the first bad one.
    pub fn build(&self) -> Result<Preset, ValidationError> {
        Ok(Preset {
            width: parse_field(Field::Width, &self.width)?,
            height: parse_field(Field::Height, &self.height)?,
            refresh_rate: parse_field(Field::RefreshRate, &self.refresh_rate)?,
        })
    }
}

/// A partial update. Missing fields keep the value of the preset being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetEdit {
    pub width: Option<String>,
    pub height: Option<String>,
    pub refresh_rate: Option<String>,
}

impl PresetEdit {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.refresh_rate.is_none()
    }

    /// Produce the replacement value for `current`.
    pub fn build(&self, current: &Preset) -> Result<Preset, ValidationError> {
        let pick = |field: Field, raw: &Option<String>, existing: u32| match raw {
            Some(raw) => parse_field(field, raw),
            None => Ok(existing),
        };

        Ok(Preset {
            width: pick(Field::Width, &self.width, current.width)?,
            height: pick(Field::Height, &self.height, current.height)?,
            refresh_rate: pick(Field::RefreshRate, &self.refresh_rate, current.refresh_rate)?,
        })
    }
}

fn parse_field(field: Field, raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| {
        let reason = match e.kind() {
            IntErrorKind::PosOverflow => InvalidValue::TooLarge(trimmed.to_string()),
            IntErrorKind::NegOverflow => InvalidValue::NotPositive(trimmed.to_string()),
            _ => InvalidValue::NotANumber(trimmed.to_string()),
        };
        ValidationError::new(field, reason)
    })?;

    check_value(field, value)
}

fn check_value(field: Field, value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::new(
            field,
            InvalidValue::NotPositive(value.to_string()),
        ));
    }

    u32::try_from(value)
        .map_err(|_| ValidationError::new(field, InvalidValue::TooLarge(value.to_string())))
}
