use std::num::ParseIntError;

/// Editable integer field for the search target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetInput {
    text: String,
}

impl TargetInput {
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Accept digits anywhere and a minus sign only as the first character.
    /// A lone `0` is replaced by whatever is typed next.
    /// Returns whether the character was taken.
    pub fn push(&mut self, ch: char) -> bool {
        if self.text == "0" && (ch.is_ascii_digit() || ch == '-') {
            self.text.clear();
        }
        let accepted = ch.is_ascii_digit() || (ch == '-' && self.text.is_empty());
        if accepted {
            self.text.push(ch);
        }
        accepted
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn set(&mut self, value: i64) {
        self.text = value.to_string();
    }

    pub fn value(&self) -> Result<i64, ParseIntError> {
        self.text.trim().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_builds_signed_numbers() {
        let mut input = TargetInput::default();
        assert!(input.push('-'));
        assert!(input.push('4'));
        assert!(!input.push('-'));
        assert!(!input.push('x'));
        assert_eq!(input.value(), Ok(-4));
    }

    #[test]
    fn typing_over_zero_replaces_it() {
        let mut input = TargetInput::new(0);
        input.push('7');
        assert_eq!(input.text(), "7");
    }

    #[test]
    fn minus_over_zero_starts_a_negative_number() {
        let mut input = TargetInput::new(0);
        assert!(input.push('-'));
        assert!(input.push('5'));
        assert_eq!(input.text(), "-5");
        assert_eq!(input.value(), Ok(-5));
    }

    #[test]
    fn empty_or_lone_sign_does_not_parse() {
        let mut input = TargetInput::new(5);
        input.pop();
        assert!(input.value().is_err());
        input.push('-');
        assert!(input.value().is_err());
    }
}
