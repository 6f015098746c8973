//! Runtime configuration assembled by the binary from command-line flags.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::dataset::TableName;
use crate::tui::{Page, ThemeMode};

/// Default event poll interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Quiet period before a terminal resize is applied.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Requested color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the terminal's background hint.
    #[default]
    Auto,
}

impl ThemePreference {
    /// Resolves the preference to a concrete theme.
    ///
    /// `colorfgbg` is the terminal's `COLORFGBG` hint (`"fg;bg"`). Background
    /// indices 7 and 9-15 are light colors, everything else reads as dark.
    /// Without a usable hint the dark theme is chosen.
    pub fn resolve(self, colorfgbg: Option<&str>) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::Auto => {
                let bg = colorfgbg
                    .and_then(|v| v.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                match bg {
                    Some(7) | Some(9..=15) => ThemeMode::Light,
                    _ => ThemeMode::Dark,
                }
            }
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Auto => "auto",
        })
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "auto" => Ok(ThemePreference::Auto),
            other => Err(format!(
                "invalid theme '{}' (expected light, dark or auto)",
                other
            )),
        }
    }
}

/// Settings for one application session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub start_page: Page,
    pub start_table: TableName,
    pub tick_rate: Duration,
    pub resize_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            start_page: Page::Overview,
            start_table: TableName::Users,
            tick_rate: DEFAULT_TICK_RATE,
            resize_debounce: RESIZE_DEBOUNCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_ignore_terminal_hint() {
        assert_eq!(ThemePreference::Light.resolve(Some("0;0")), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(Some("0;15")), ThemeMode::Dark);
    }

    #[test]
    fn auto_reads_background_index() {
        assert_eq!(ThemePreference::Auto.resolve(Some("0;15")), ThemeMode::Light);
        assert_eq!(ThemePreference::Auto.resolve(Some("0;7")), ThemeMode::Light);
        assert_eq!(ThemePreference::Auto.resolve(Some("15;0")), ThemeMode::Dark);
        assert_eq!(ThemePreference::Auto.resolve(Some("15;default;0")), ThemeMode::Dark);
        assert_eq!(ThemePreference::Auto.resolve(Some("garbage")), ThemeMode::Dark);
        assert_eq!(ThemePreference::Auto.resolve(None), ThemeMode::Dark);
    }

    #[test]
    fn preference_parses_from_flag_values() {
        assert_eq!("DARK".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert!("sepia".parse::<ThemePreference>().is_err());
    }
}
