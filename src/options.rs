//! Generation options and character classes.
//!
//! The options are unchecked: any length (including negative
//! values or garbage text) may be stored here. Range and pool checks happen
//! only when a password is generated, see [`crate::generator`].

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// Characters that are easily confused with one another.
pub const AMBIGUOUS: &str = "Il1O0";

pub const MIN_LENGTH: i64 = 8;
pub const MAX_LENGTH: i64 = 32;

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool order: uppercase, lowercase, numbers, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase Letters",
            CharClass::Lowercase => "Lowercase Letters",
            CharClass::Numbers => "Numbers",
            CharClass::Symbols => "Symbols",
        }
    }
}

/// User-selected options for a generation attempt.
///
/// Also used as the `defaults` section of the settings file, so every field
/// falls back to [`Default`] when missing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationOptions {
    /// Desired length. Not range-checked until generation.
    pub length: i64,

    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,

    /// Drop `I`, `l`, `1`, `O` and `0` from the pool.
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationOptions {
    pub fn set_length(&mut self, length: i64) {
        self.length = length;
    }

    /// Store a length typed by the user.
    ///
    /// Only plain decimal integers are read. Blank text and anything else
    /// (`"abc"`, `"12.5"`, `"1e1"`, `"0x10"`) is stored as `0`, which the
    /// generator later rejects like any other out-of-range length.
    pub fn set_length_input(&mut self, raw: &str) {
        self.length = raw.trim().parse().unwrap_or(0);
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, on: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Numbers => &mut self.include_numbers,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = on;
    }

    pub fn toggle(&mut self, class: CharClass) {
        let on = self.includes(class);
        self.set_class(class, !on);
    }

    pub fn set_exclude_ambiguous(&mut self, on: bool) {
        self.exclude_ambiguous = on;
    }

    /// Build the character pool for the current selection.
    pub fn pool(&self) -> CharacterPool {
        let mut chars = Vec::new();
        for class in CharClass::ALL {
            if self.includes(class) {
                chars.extend(class.chars().chars());
            }
        }
        if self.exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(*c));
        }
        CharacterPool { chars }
    }
}

/// Ordered set of characters a password is sampled from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form_state() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.length, 16);
        assert!(CharClass::ALL.iter().all(|c| opts.includes(*c)));
        assert!(!opts.exclude_ambiguous);
    }

    #[test]
    fn pool_is_concatenated_in_fixed_order() {
        let pool = GenerationOptions::default().pool();
        let expected: String = [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS].concat();
        assert_eq!(pool.as_slice().len(), 86);
        assert_eq!(pool.as_slice().iter().collect::<String>(), expected);
    }

    #[test]
    fn pool_skips_unselected_classes() {
        let mut opts = GenerationOptions::default();
        opts.set_class(CharClass::Uppercase, false);
        opts.set_class(CharClass::Symbols, false);
        let pool = opts.pool();
        assert_eq!(
            pool.as_slice().iter().collect::<String>(),
            [LOWERCASE, NUMBERS].concat()
        );
    }

    #[test]
    fn pool_is_empty_without_classes() {
        let mut opts = GenerationOptions::default();
        for class in CharClass::ALL {
            opts.toggle(class);
        }
        assert!(opts.pool().is_empty());
    }

    #[test]
    fn ambiguous_characters_are_removed() {
        let mut opts = GenerationOptions::default();
        opts.set_exclude_ambiguous(true);
        let pool = opts.pool();
        assert_eq!(pool.as_slice().len(), 86 - AMBIGUOUS.len());
        for c in AMBIGUOUS.chars() {
            assert!(!pool.as_slice().contains(&c));
        }
    }

    #[test]
    fn length_setters_accept_anything() {
        let mut opts = GenerationOptions::default();
        opts.set_length(-3);
        assert_eq!(opts.length, -3);

        opts.set_length_input(" 40 ");
        assert_eq!(opts.length, 40);

        opts.set_length_input("-7");
        assert_eq!(opts.length, -7);

        opts.set_length_input("abc");
        assert_eq!(opts.length, 0);

        opts.set_length_input("");
        assert_eq!(opts.length, 0);
    }

    #[test]
    fn length_input_reads_only_decimal_integers() {
        let mut opts = GenerationOptions::default();
        for raw in ["12.5", "1e1", "0x10", "16px"] {
            opts.set_length(16);
            opts.set_length_input(raw);
            assert_eq!(opts.length, 0, "input {:?}", raw);
        }

        opts.set_length_input("+12");
        assert_eq!(opts.length, 12);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let json = r#"{ "length": 20, "include_symbols": false }"#;
        let opts: GenerationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.length, 20);
        assert!(!opts.include_symbols);
        assert!(opts.include_uppercase);
    }
}
