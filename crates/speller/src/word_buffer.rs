//! The committed character sequence.

use handspell_classify::Symbol;

/// Word separator committed after sustained hand absence.
pub const SEPARATOR: char = ' ';

/// Ordered sequence of committed characters.
///
/// Grows only through commits, shrinks only through delete-last. This is
/// the sole artifact exposed for display.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordBuffer {
    chars: Vec<char>,
}

impl WordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True while sustained absence should count toward a word boundary:
    /// there is something to terminate and it is not terminated yet.
    pub fn wants_separator(&self) -> bool {
        self.chars.last().is_some_and(|&c| c != SEPARATOR)
    }

    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.chars.push(symbol.as_char());
    }

    pub fn push_separator(&mut self) {
        // Guarded by the caller via wants_separator; keep the invariant
        // anyway so separators can never run.
        if self.wants_separator() {
            self.chars.push(SEPARATOR);
        }
    }

    /// Remove and return the most recent character.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl std::fmt::Display for WordBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    #[test]
    fn test_empty_buffer_never_wants_separator() {
        let buf = WordBuffer::new();
        assert!(!buf.wants_separator());
    }

    #[test]
    fn test_separator_cannot_run() {
        let mut buf = WordBuffer::new();
        buf.push_symbol(sym('H'));
        buf.push_separator();
        buf.push_separator();
        buf.push_separator();
        assert_eq!(buf.text(), "H ");
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut buf = WordBuffer::new();
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_pop_removes_last() {
        let mut buf = WordBuffer::new();
        buf.push_symbol(sym('H'));
        buf.push_symbol(sym('I'));
        assert_eq!(buf.pop(), Some('I'));
        assert_eq!(buf.text(), "H");
    }
}
