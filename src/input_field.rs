//! Themeable single-line input field model.
//!
//! The field keeps its value plus a set of presentation options. What is
//! visible (error text, loading spinner, clear button) is derived from those
//! options on every query, so toggling an option never leaves stale state.

use std::fmt;

/// Visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Outlined,
    Filled,
    Ghost,
}

impl Variant {
    pub fn next(self) -> Self {
        match self {
            Variant::Outlined => Variant::Filled,
            Variant::Filled => Variant::Ghost,
            Variant::Ghost => Variant::Outlined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Outlined => "outlined",
            Variant::Filled => "filled",
            Variant::Ghost => "ghost",
        }
    }
}

/// Field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl FieldSize {
    pub fn next(self) -> Self {
        match self {
            FieldSize::Sm => FieldSize::Md,
            FieldSize::Md => FieldSize::Lg,
            FieldSize::Lg => FieldSize::Sm,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldSize::Sm => "sm",
            FieldSize::Md => "md",
            FieldSize::Lg => "lg",
        }
    }
}

/// Input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl FieldKind {
    pub fn next(self) -> Self {
        match self {
            FieldKind::Text => FieldKind::Password,
            FieldKind::Password => FieldKind::Email,
            FieldKind::Email => FieldKind::Number,
            FieldKind::Number => FieldKind::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
            _ => !c.is_control(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input field state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    pub variant: Variant,
    pub size: FieldSize,
    pub kind: FieldKind,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub clear_button: bool,
}

impl InputField {
    pub const ERROR_MESSAGE: &'static str = "Please enter a valid value";
    pub const PLACEHOLDER: &'static str = "Type something...";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value as shown on screen. Passwords are masked.
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }

    pub fn is_editable(&self) -> bool {
        !self.disabled
    }

    /// Appends `c`. Returns false when the field is disabled or the kind
    /// rejects the character.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.is_editable() || !self.kind.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.is_editable() && self.value.pop().is_some()
    }

    /// Presses the clear button. Does nothing unless the button is shown and
    /// the field is editable.
    pub fn clear(&mut self) -> bool {
        if !self.show_clear_button() || !self.is_editable() {
            return false;
        }
        self.value.clear();
        true
    }

    pub fn show_clear_button(&self) -> bool {
        self.clear_button && !self.value.is_empty()
    }

    pub fn show_error(&self) -> bool {
        self.invalid
    }

    pub fn show_loading(&self) -> bool {
        self.loading
    }

    /// Modifier names for the current options, rebuilt from scratch.
    pub fn modifiers(&self) -> Vec<&'static str> {
        let mut mods = vec![self.variant.as_str(), self.size.as_str()];
        if self.disabled {
            mods.push("disabled");
        }
        if self.invalid {
            mods.push("invalid");
        }
        if self.loading {
            mods.push("loading");
        }
        mods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputField {
        let mut f = InputField::new();
        for c in s.chars() {
            f.insert_char(c);
        }
        f
    }

    #[test]
    fn defaults_are_outlined_medium_text() {
        let f = InputField::new();
        assert_eq!(f.modifiers(), vec!["outlined", "md"]);
        assert_eq!(f.kind, FieldKind::Text);
        assert!(f.is_editable());
    }

    #[test]
    fn modifiers_follow_flags() {
        let mut f = InputField::new();
        f.variant = Variant::Ghost;
        f.size = FieldSize::Lg;
        f.invalid = true;
        f.loading = true;
        assert_eq!(f.modifiers(), vec!["ghost", "lg", "invalid", "loading"]);
        f.invalid = false;
        assert_eq!(f.modifiers(), vec!["ghost", "lg", "loading"]);
        assert!(!f.show_error());
        assert!(f.show_loading());
    }

    #[test]
    fn clear_button_needs_flag_and_value() {
        let mut f = typed("hi");
        assert!(!f.show_clear_button());
        f.clear_button = true;
        assert!(f.show_clear_button());
        assert!(f.clear());
        assert_eq!(f.value(), "");
        assert!(!f.show_clear_button());
        assert!(!f.clear());
    }

    #[test]
    fn disabled_field_rejects_edits_and_clear() {
        let mut f = typed("abc");
        f.clear_button = true;
        f.disabled = true;
        assert!(!f.insert_char('d'));
        assert!(!f.backspace());
        assert!(f.show_clear_button());
        assert!(!f.clear());
        assert_eq!(f.value(), "abc");
    }

    #[test]
    fn number_kind_filters_characters() {
        let mut f = InputField::new();
        f.kind = FieldKind::Number;
        for c in "-12a.5".chars() {
            f.insert_char(c);
        }
        assert_eq!(f.value(), "-12.5");
    }

    #[test]
    fn password_is_masked() {
        let mut f = typed("secret");
        f.kind = FieldKind::Password;
        assert_eq!(f.display_value(), "••••••");
        assert_eq!(f.value(), "secret");
    }

    #[test]
    fn option_cycles_wrap() {
        assert_eq!(Variant::Ghost.next(), Variant::Outlined);
        assert_eq!(FieldSize::Lg.next(), FieldSize::Sm);
        assert_eq!(FieldKind::Number.next(), FieldKind::Text);
    }
}
