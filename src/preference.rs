//! Theme preference and resolved theme values.
//!
//! A [`ThemePreference`] is what the user asked for; a [`ResolvedTheme`] is
//! the concrete scheme that is actually applied. [`resolve`] maps one onto
//! the other given the platform's current color-scheme signal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// The user's stated theme intent, as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the platform's live color-scheme signal
    #[default]
    System,
}

impl ThemePreference {
    /// All preferences, in the order a picker offers them.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Returns the literal used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Parses the exact storage literal. No trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => ThemePreference::Light,
            ResolvedTheme::Dark => ThemePreference::Dark,
        }
    }
}

/// The concrete scheme applied to the presentation root. Never "system".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Maps a "prefers dark color scheme" reading onto a scheme.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    /// The scheme a two-state toggle switches to.
    pub fn opposite(self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    /// Glyph for the scheme currently shown.
    pub fn icon(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "☀",
            ResolvedTheme::Dark => "🌙",
        }
    }

    /// Hover hint for a toggle control showing this scheme.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "Switch to dark mode",
            ResolvedTheme::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolvedTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ResolvedTheme::Light),
            "dark" => Ok(ResolvedTheme::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

/// Resolves a preference against the platform signal.
///
/// Explicit `light`/`dark` ignore the signal; `system` follows it.
pub fn resolve(preference: ThemePreference, system_prefers_dark: bool) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => ResolvedTheme::from_prefers_dark(system_prefers_dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preferences_ignore_signal() {
        for signal in [false, true] {
            assert_eq!(resolve(ThemePreference::Light, signal), ResolvedTheme::Light);
            assert_eq!(resolve(ThemePreference::Dark, signal), ResolvedTheme::Dark);
        }
    }

    #[test]
    fn test_system_follows_signal() {
        assert_eq!(resolve(ThemePreference::System, true), ResolvedTheme::Dark);
        assert_eq!(resolve(ThemePreference::System, false), ResolvedTheme::Light);
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!("system".parse::<ThemePreference>().unwrap(), ThemePreference::System);
    }

    #[test]
    fn test_parse_rejects_non_literals() {
        for raw in ["Dark", " dark", "blue", ""] {
            let err = raw.parse::<ThemePreference>().unwrap_err();
            assert!(matches!(err, ThemeError::InvalidPreference(ref v) if v == raw));
        }
        assert!("system".parse::<ResolvedTheme>().is_err());
    }

    #[test]
    fn test_display_matches_storage_literal() {
        for pref in ThemePreference::ALL {
            assert_eq!(pref.to_string().parse::<ThemePreference>().unwrap(), pref);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");
        let parsed: ResolvedTheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ResolvedTheme::Dark);
    }

    #[test]
    fn test_opposite_and_hints() {
        assert_eq!(ResolvedTheme::Dark.opposite(), ResolvedTheme::Light);
        assert_eq!(ResolvedTheme::Light.opposite(), ResolvedTheme::Dark);
        assert_eq!(ResolvedTheme::Dark.toggle_hint(), "Switch to light mode");
        assert_eq!(ResolvedTheme::Light.toggle_hint(), "Switch to dark mode");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ThemePreference::default(), ThemePreference::System);
        assert_eq!(ResolvedTheme::default(), ResolvedTheme::Light);
    }
}
