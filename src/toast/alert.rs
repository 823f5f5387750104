// SPDX-License-Identifier: MPL-2.0
//! Alert severity carried by every toast.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity classification of a toast.
///
/// The set is closed: renderers can match exhaustively and pick a color and
/// glyph per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// Plain message without semantic urgency.
    #[default]
    None,
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
    /// Something the user should look at, nothing failed yet.
    Warning,
    /// Operation failed.
    Error,
}

impl Alert {
    /// All variants, in display order.
    pub const ALL: [Alert; 5] = [
        Alert::None,
        Alert::Success,
        Alert::Info,
        Alert::Warning,
        Alert::Error,
    ];

    /// Lowercase name, as accepted by [`Alert::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Alert::None => "none",
            Alert::Success => "success",
            Alert::Info => "info",
            Alert::Warning => "warning",
            Alert::Error => "error",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alert {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alert::ALL
            .into_iter()
            .find(|alert| alert.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown alert level: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alert_is_none() {
        assert_eq!(Alert::default(), Alert::None);
    }

    #[test]
    fn from_str_accepts_every_display_name() {
        for alert in Alert::ALL {
            assert_eq!(alert.to_string().parse::<Alert>().unwrap(), alert);
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" Warning ".parse::<Alert>().unwrap(), Alert::Warning);
    }

    #[test]
    fn from_str_rejects_unknown_levels() {
        let err = "fatal".parse::<Alert>().unwrap_err();
        assert!(matches!(err, Error::Config(message) if message.contains("fatal")));
    }
}
