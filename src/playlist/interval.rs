/// Seconds between URL rotations. Zero means unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interval {
    seconds: f64,
}

/// What happened to a text edit of the interval field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEdit {
    Accepted,
    /// The field was cleared; the interval is unset again.
    Reset,
    /// Not a positive number; the previous value is kept.
    Rejected,
}

impl Interval {

    pub fn from_seconds(seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            Self { seconds }
        } else {
            Self::default()
        }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn is_set(&self) -> bool {
        self.seconds > 0.0
    }

    pub fn as_millis(&self) -> u64 {
        (self.seconds * 1000.0).round() as u64
    }

    pub fn edit(&mut self, text: &str) -> IntervalEdit {
        let text = text.trim();
        if text.is_empty() {
            self.seconds = 0.0;
            return IntervalEdit::Reset;
        }
        match text.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds > 0.0 => {
                self.seconds = seconds;
                IntervalEdit::Accepted
            }
            _ => IntervalEdit::Rejected,
        }
    }

    /// Text for the input field: `5` rather than `5.0`.
    pub fn display(&self) -> String {
        self.seconds.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_value_accepted() {
        let mut interval = Interval::default();
        assert_eq!(interval.edit("5"), IntervalEdit::Accepted);
        assert_eq!(interval.seconds(), 5.0);
        assert_eq!(interval.edit(" 2.5 "), IntervalEdit::Accepted);
        assert_eq!(interval.as_millis(), 2500);
    }

    #[test]
    fn test_empty_resets() {
        let mut interval = Interval::from_seconds(9.0);
        assert_eq!(interval.edit(""), IntervalEdit::Reset);
        assert!(!interval.is_set());
    }

    #[test]
    fn test_bad_input_keeps_previous() {
        let mut interval = Interval::from_seconds(3.0);
        for text in ["abc", "0", "-4", "NaN", "inf"] {
            assert_eq!(interval.edit(text), IntervalEdit::Rejected, "{}", text);
            assert_eq!(interval.seconds(), 3.0);
        }
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(Interval::from_seconds(5.0).display(), "5");
        assert_eq!(Interval::from_seconds(1.5).display(), "1.5");
        assert_eq!(Interval::default().display(), "0");
    }
}
