/// Leading hyphen run that marks a separator line.
pub const SEPARATOR_START: &str = "-----------------------------------------------------";

/// Is `line` a separator (ignoring leading whitespace)?
pub fn is_separator(line: &str) -> bool {
    line.trim_start().starts_with(SEPARATOR_START)
}

/// Counts consecutive separator lines to detect the double separator closing a block.
///
/// Blank lines between the two separators are allowed; any other content resets the count.
#[derive(Debug, Default)]
pub struct DoubleSeparator {
    seen: u8,
}

impl DoubleSeparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line. Returns `true` when this line completes a double separator.
    pub fn feed(&mut self, line: &str) -> bool {
        if is_separator(line) {
            self.seen += 1;
            if self.seen == 2 {
                self.seen = 0;
                return true;
            }
        } else if self.seen > 0 && !line.trim().is_empty() {
            self.seen = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_separator() {
        assert!(is_separator(SEPARATOR_START));
        assert!(is_separator(&format!("   {}---", SEPARATOR_START)));
        assert!(!is_separator(&SEPARATOR_START[1..]));
        assert!(!is_separator("lodash@4.17.21"));
        assert!(!is_separator(""));
    }

    #[test]
    fn test_two_separators_close() {
        let mut d = DoubleSeparator::new();
        assert!(!d.feed(SEPARATOR_START));
        assert!(d.feed(SEPARATOR_START));
        // counter restarts after closing
        assert!(!d.feed(SEPARATOR_START));
    }

    #[test]
    fn test_blank_lines_between_separators_allowed() {
        let mut d = DoubleSeparator::new();
        assert!(!d.feed(SEPARATOR_START));
        assert!(!d.feed(""));
        assert!(!d.feed("   "));
        assert!(d.feed(SEPARATOR_START));
    }

    #[test]
    fn test_content_between_separators_resets() {
        let mut d = DoubleSeparator::new();
        assert!(!d.feed(SEPARATOR_START));
        assert!(!d.feed("Copyright (c) someone"));
        assert!(!d.feed(SEPARATOR_START));
        assert!(d.feed(SEPARATOR_START));
    }
}
