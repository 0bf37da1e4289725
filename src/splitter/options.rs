use std::{fmt, str::FromStr};

use crate::SegmentError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SplitOptions {
    /// Keep every segment, including empty ones.
    #[default]
    None,
    /// Drop zero-length segments from the result.
    RemoveEmptyEntries,
}

impl SplitOptions {
    pub fn remove_empty(self) -> bool {
        self == Self::RemoveEmptyEntries
    }
}

impl From<bool> for SplitOptions {
    fn from(remove_empty: bool) -> Self {
        if remove_empty {
            Self::RemoveEmptyEntries
        } else {
            Self::None
        }
    }
}

impl TryFrom<u32> for SplitOptions {
    type Error = SegmentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::RemoveEmptyEntries),
            _ => Err(SegmentError::invalid_option("split options", value)),
        }
    }
}

impl fmt::Display for SplitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::RemoveEmptyEntries => "remove-empty-entries",
        })
    }
}

impl FromStr for SplitOptions {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "remove-empty-entries" | "removeemptyentries" => Ok(Self::RemoveEmptyEntries),
            _ => Err(SegmentError::invalid_option("split options", s)),
        }
    }
}
