// input.rs - Keystroke routing into the line buffer

/// Keys the terminal reacts to. Everything else passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    Char(char),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name. Named keys other than Backspace
    /// and Enter ("ArrowUp", "F5", "Shift", ...) are dropped by the
    /// single-character rule.
    pub fn from_dom(name: &str) -> Option<Self> {
        match name {
            "Backspace" => Some(Key::Backspace),
            "Enter" => Some(Key::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Whether the page's default action should be suppressed
    pub fn consumes_default(self) -> bool {
        matches!(self, Key::Backspace | Key::Enter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// No-op when empty
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Trimmed contents; the buffer is left empty
    pub fn take(&mut self) -> String {
        let line = self.text.trim().to_string();
        self.text.clear();
        line
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_keys() {
        assert_eq!(Key::from_dom("Backspace"), Some(Key::Backspace));
        assert_eq!(Key::from_dom("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_dom("a"), Some(Key::Char('a')));
        assert_eq!(Key::from_dom(" "), Some(Key::Char(' ')));
        assert_eq!(Key::from_dom("ü"), Some(Key::Char('ü')));
    }

    #[test]
    fn multi_char_names_are_ignored() {
        for name in ["ArrowLeft", "F1", "Shift", "Tab", "Escape", ""] {
            assert_eq!(Key::from_dom(name), None, "{name}");
        }
    }

    #[test]
    fn only_edit_keys_consume_default() {
        assert!(Key::Backspace.consumes_default());
        assert!(Key::Enter.consumes_default());
        assert!(!Key::Char('x').consumes_default());
    }

    #[test]
    fn backspace_on_empty_stays_empty() {
        let mut buf = InputBuffer::new();
        buf.backspace();
        buf.backspace();
        assert!(buf.is_empty());
    }

    #[test]
    fn take_trims_and_clears() {
        let mut buf = InputBuffer::new();
        for c in "  scan x  ".chars() {
            buf.push(c);
        }
        assert_eq!(buf.take(), "scan x");
        assert!(buf.is_empty());
    }

    proptest! {
        #[test]
        fn backspaces_never_underflow(s in "[a-z ]{0,12}", extra in 0usize..20) {
            let mut buf = InputBuffer::new();
            for c in s.chars() {
                buf.push(c);
            }
            for _ in 0..s.chars().count() + extra {
                buf.backspace();
            }
            prop_assert!(buf.is_empty());
        }

        #[test]
        fn pushes_then_backspace_drops_last(s in "\\PC{1,16}") {
            let mut buf = InputBuffer::new();
            for c in s.chars() {
                buf.push(c);
            }
            buf.backspace();
            let mut expect = s.clone();
            expect.pop();
            prop_assert_eq!(buf.as_str(), expect.as_str());
        }
    }
}
