use std::fmt;

use strum::EnumString;

/// Missing-value bit pattern for 32-bit integer INFO fields, as stored by BCF.
/// Records that round-trip raw payloads may hand this back instead of omitting
/// the field; readers treat it the same as "not present".
pub const MISSING_INT: i32 = i32::MIN;

/// Declared type of an INFO field in the header dictionary.
#[derive(Debug, Clone, Eq, PartialEq, EnumString)]
pub enum InfoType {
    Integer,
    Float,
    Flag,
    String,
}

/// One INFO value as stored on a record.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Int(i32),
    Float(f32),
    String(String),
    Flag,
}

impl InfoValue {
    pub(crate) fn kind(&self) -> InfoType {
        match self {
            InfoValue::Int(_) => InfoType::Integer,
            InfoValue::Float(_) => InfoType::Float,
            InfoValue::String(_) => InfoType::String,
            InfoValue::Flag => InfoType::Flag,
        }
    }
}

/// One reference/alternate variation at a locus: the replaced reference span
/// and the sequence that replaces it. Opaque to everything in this crate
/// except the locus rendering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RefVar {
    pub start: i64,
    pub end: i64,
    pub alt: String,
}

impl RefVar {
    pub fn new(start: i64, end: i64, alt: impl Into<String>) -> Self {
        Self {
            start,
            end,
            alt: alt.into(),
        }
    }
}

impl fmt::Display for RefVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.start, self.end, self.alt)
    }
}
