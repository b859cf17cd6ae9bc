use serde::{Deserialize, Serialize};

/// Gesture classes the classifier can produce, in class-index order.
pub const ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// One recognized gesture class.
///
/// A validated member of [`ALPHABET`]; construction outside the alphabet is
/// rejected so the word buffer only ever sees characters it can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Create a symbol from a character, if it is in the alphabet.
    pub fn new(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        ALPHABET.contains(&c).then_some(Self(c))
    }

    /// Create a symbol from a classifier class index.
    pub fn from_class_index(index: usize) -> Option<Self> {
        ALPHABET.get(index).map(|&c| Self(c))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("'{c}' is not a recognized gesture class"))
    }
}

impl From<Symbol> for char {
    fn from(s: Symbol) -> char {
        s.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the classifier saw in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observation {
    /// A hand was detected and classified.
    Sign(Symbol),
    /// No hand was detected this frame.
    Absent,
}

impl Observation {
    pub fn is_absent(&self) -> bool {
        matches!(self, Observation::Absent)
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Observation::Sign(s) => Some(*s),
            Observation::Absent => None,
        }
    }
}

impl From<Option<Symbol>> for Observation {
    fn from(value: Option<Symbol>) -> Self {
        match value {
            Some(s) => Observation::Sign(s),
            None => Observation::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accepts_alphabet_only() {
        assert_eq!(Symbol::new('A').unwrap().as_char(), 'A');
        assert_eq!(Symbol::new('z').unwrap().as_char(), 'Z');
        assert!(Symbol::new('1').is_none());
        assert!(Symbol::new(' ').is_none());
    }

    #[test]
    fn test_symbol_from_class_index() {
        assert_eq!(Symbol::from_class_index(0).unwrap().as_char(), 'A');
        assert_eq!(Symbol::from_class_index(25).unwrap().as_char(), 'Z');
        assert!(Symbol::from_class_index(26).is_none());
    }

    #[test]
    fn test_symbol_serde_roundtrip() {
        let s = Symbol::new('K').unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"K\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_symbol_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<Symbol>("\"?\"").is_err());
    }

    #[test]
    fn test_observation_from_option() {
        let s = Symbol::new('B').unwrap();
        assert_eq!(Observation::from(Some(s)), Observation::Sign(s));
        assert!(Observation::from(None).is_absent());
    }
}
