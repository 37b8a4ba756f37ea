/// Remembers the last text sent on one channel (status updates or errors) so
/// an identical repeat can be suppressed.
///
/// Equality is exact string comparison.
#[derive(Clone, Debug, Default)]
pub struct LastSent {
    last: Option<String>,
}

impl LastSent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn is_repeat(&self, text: &str) -> bool {
        self.last.as_deref() == Some(text)
    }

    /// Record `text` and return `true` if it differs from the previous one.
    pub fn replace_if_changed(&mut self, text: &str) -> bool {
        if self.is_repeat(text) {
            return false;
        }
        self.last = Some(text.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_is_always_new() {
        let mut cell = LastSent::new();
        assert_eq!(cell.last(), None);
        assert!(cell.replace_if_changed("a"));
        assert_eq!(cell.last(), Some("a"));
    }

    #[test]
    fn identical_repeat_is_suppressed_and_change_is_not() {
        let mut cell = LastSent::new();
        assert!(cell.replace_if_changed("a"));
        assert!(!cell.replace_if_changed("a"));
        assert!(cell.replace_if_changed("b"));
        assert!(cell.replace_if_changed("a"));
        assert!(cell.is_repeat("a"));
    }

    #[test]
    fn empty_string_is_a_real_value() {
        let mut cell = LastSent::new();
        assert!(cell.replace_if_changed(""));
        assert!(!cell.replace_if_changed(""));
    }
}
