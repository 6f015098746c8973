//! Light and dark color schemes and the styles derived from them.

use ratatui::style::{Color, Modifier, Style};

/// Active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Toggle button icon: offers the opposite scheme.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &Palette::LIGHT,
            ThemeMode::Dark => &Palette::DARK,
        }
    }

    pub fn styles(self) -> Styles {
        Styles {
            p: self.palette(),
        }
    }
}

/// Color palette of one scheme.
#[derive(Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selected_bg: Color,
    pub accent: Color,
    pub border: Color,
    pub field_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg: Color::Reset,
        fg: Color::White,
        fg_dim: Color::DarkGray,
        header_bg: Color::Blue,
        header_fg: Color::White,
        selected_bg: Color::DarkGray,
        accent: Color::Cyan,
        border: Color::Gray,
        field_bg: Color::Rgb(38, 40, 40),
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        info: Color::LightBlue,
    };

    pub const LIGHT: Palette = Palette {
        bg: Color::Rgb(252, 252, 249),
        fg: Color::Rgb(19, 52, 59),
        fg_dim: Color::Rgb(98, 108, 113),
        header_bg: Color::Rgb(33, 128, 141),
        header_fg: Color::Rgb(252, 252, 249),
        selected_bg: Color::Rgb(214, 232, 234),
        accent: Color::Rgb(33, 128, 141),
        border: Color::Rgb(167, 169, 169),
        field_bg: Color::Rgb(240, 240, 236),
        success: Color::Rgb(30, 130, 76),
        warning: Color::Rgb(168, 75, 47),
        error: Color::Rgb(192, 21, 47),
        info: Color::Rgb(98, 108, 113),
    };
}

/// Tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusTone {
    pub fn of(status: &str) -> StatusTone {
        match status.to_lowercase().as_str() {
            "active" | "delivered" => StatusTone::Success,
            "pending" | "processing" => StatusTone::Warning,
            "inactive" => StatusTone::Error,
            _ => StatusTone::Info,
        }
    }
}

/// Styles for the active palette.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    p: &'static Palette,
}

impl Styles {
    pub fn palette(&self) -> &'static Palette {
        self.p
    }

    /// Default text style.
    pub fn default(&self) -> Style {
        Style::default().fg(self.p.fg).bg(self.p.bg)
    }

    /// Header bar style.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.p.header_fg)
            .bg(self.p.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row style.
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.p.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.p.header_fg)
            .bg(self.p.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Column header that has keyboard focus.
    pub fn focused_column(&self) -> Style {
        self.table_header()
            .add_modifier(Modifier::UNDERLINED | Modifier::REVERSED)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.p.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.p.fg_dim)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.p.fg_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.p.accent)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.p.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.p.accent)
    }

    pub fn field_filled(&self) -> Style {
        Style::default().fg(self.p.fg).bg(self.p.field_bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.p.error)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.p.warning)
    }

    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.p.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key(&self) -> Style {
        Style::default().fg(self.p.fg).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, status: &str) -> Style {
        let color = match StatusTone::of(status) {
            StatusTone::Success => self.p.success,
            StatusTone::Warning => self.p.warning,
            StatusTone::Error => self.p.error,
            StatusTone::Info => self.p.info,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones_follow_badge_rules() {
        assert_eq!(StatusTone::of("Active"), StatusTone::Success);
        assert_eq!(StatusTone::of("Delivered"), StatusTone::Success);
        assert_eq!(StatusTone::of("PENDING"), StatusTone::Warning);
        assert_eq!(StatusTone::of("Processing"), StatusTone::Warning);
        assert_eq!(StatusTone::of("Inactive"), StatusTone::Error);
        assert_eq!(StatusTone::of("Shipped"), StatusTone::Info);
        assert_eq!(StatusTone::of("Archived"), StatusTone::Info);
    }

    #[test]
    fn theme_toggle_swaps_palette_and_icon() {
        let t = ThemeMode::Light;
        assert_eq!(t.toggle(), ThemeMode::Dark);
        assert_eq!(t.icon(), "☾");
        assert_eq!(t.toggle().icon(), "☀");
        assert_eq!(t.toggle().toggle(), t);
        assert_ne!(t.palette().bg, t.toggle().palette().bg);
    }
}
