/// Fixed set of one-key time presets offered next to the input field
pub const QUICK_TIMES: [&str; 4] = ["09:00", "12:00", "15:00", "18:00"];

/// The query form: a single required `HH:MM` time field.
///
/// The field enforces its format the way a native time input would:
/// only digits are accepted, the `:` separator is inserted
/// automatically, and digits that cannot form a valid 24-hour time are
/// rejected. Presence is the only submit-time validation; an empty (or
/// still incomplete) value sets the missing-value flag instead of
/// submitting.
#[derive(Debug, Clone, Default)]
pub struct TimeForm {
    value: String,
    missing: bool,
}

impl TimeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True once a submit was attempted without a usable time value.
    /// Cleared by any edit or by applying a preset.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.value.len() == 5
    }

    /// Append one digit, subject to the `HH:MM` mask. Rejected digits
    /// leave the field untouched.
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let digit = c as u8 - b'0';
        let accepted = match self.value.len() {
            0 => digit <= 2,
            1 => !self.value.starts_with('2') || digit <= 3,
            2 => digit <= 5, // minutes, tens
            4 => true,       // minutes, ones
            _ => false,
        };
        if !accepted {
            return;
        }
        if self.value.len() == 2 {
            self.value.push(':');
        }
        self.value.push(c);
        self.missing = false;
    }

    /// Remove the last digit (and the separator along with it)
    pub fn backspace(&mut self) {
        self.value.pop();
        if self.value.ends_with(':') {
            self.value.pop();
        }
        self.missing = false;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.missing = false;
    }

    /// Set the field to a quick-time preset without submitting
    pub fn apply_preset(&mut self, index: usize) {
        if let Some(preset) = QUICK_TIMES.get(index) {
            self.value = preset.to_string();
            self.missing = false;
        }
    }

    /// Cycle to the next preset (first one if the field holds anything else)
    pub fn cycle_preset(&mut self) {
        let next = QUICK_TIMES
            .iter()
            .position(|preset| *preset == self.value)
            .map_or(0, |i| (i + 1) % QUICK_TIMES.len());
        self.apply_preset(next);
    }

    /// The value to submit, or `None` with the missing-value flag set
    pub fn submit_value(&mut self) -> Option<String> {
        if !self.is_complete() {
            self.missing = true;
            return None;
        }
        self.missing = false;
        Some(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_time(form: &mut TimeForm, time: &str) {
        for c in time.chars().filter(|c| c.is_ascii_digit()) {
            form.push_digit(c);
        }
    }

    #[test]
    fn test_mask_inserts_separator() {
        let mut form = TimeForm::new();
        type_time(&mut form, "0930");
        assert_eq!(form.value(), "09:30");
        assert!(form.is_complete());
    }

    #[test]
    fn test_mask_rejects_invalid_hours() {
        let mut form = TimeForm::new();
        form.push_digit('2');
        form.push_digit('9'); // 29:xx is not a time
        assert_eq!(form.value(), "2");
        form.push_digit('3');
        assert_eq!(form.value(), "23");
    }

    #[test]
    fn test_mask_rejects_invalid_minutes() {
        let mut form = TimeForm::new();
        type_time(&mut form, "12");
        form.push_digit('7'); // minutes tens above 5
        assert_eq!(form.value(), "12");
        form.push_digit('5');
        form.push_digit('9');
        assert_eq!(form.value(), "12:59");
    }

    #[test]
    fn test_mask_caps_length() {
        let mut form = TimeForm::new();
        type_time(&mut form, "1200");
        form.push_digit('1');
        assert_eq!(form.value(), "12:00");
    }

    #[test]
    fn test_empty_submit_sets_missing_flag() {
        let mut form = TimeForm::new();
        assert_eq!(form.submit_value(), None);
        assert!(form.is_missing());
    }

    #[test]
    fn test_incomplete_submit_sets_missing_flag() {
        let mut form = TimeForm::new();
        form.push_digit('1');
        assert_eq!(form.submit_value(), None);
        assert!(form.is_missing());
    }

    #[test]
    fn test_submit_yields_value_and_clears_flag() {
        let mut form = TimeForm::new();
        let _ = form.submit_value();
        assert!(form.is_missing());
        type_time(&mut form, "0900");
        assert!(!form.is_missing());
        assert_eq!(form.submit_value(), Some("09:00".to_string()));
        assert!(!form.is_missing());
    }

    #[test]
    fn test_edit_clears_missing_flag() {
        let mut form = TimeForm::new();
        let _ = form.submit_value();
        assert!(form.is_missing());
        form.push_digit('1');
        assert!(!form.is_missing());

        form.backspace();
        let _ = form.submit_value();
        assert!(form.is_missing());
        form.backspace();
        assert!(!form.is_missing());
    }

    #[test]
    fn test_preset_sets_value_without_submitting() {
        let mut form = TimeForm::new();
        let _ = form.submit_value();
        form.apply_preset(1);
        assert_eq!(form.value(), "12:00");
        assert!(!form.is_missing());
        assert_eq!(form.submit_value(), Some("12:00".to_string()));
    }

    #[test]
    fn test_cycle_preset_walks_the_list() {
        let mut form = TimeForm::new();
        form.cycle_preset();
        assert_eq!(form.value(), "09:00");
        form.cycle_preset();
        assert_eq!(form.value(), "12:00");
        form.cycle_preset();
        form.cycle_preset();
        assert_eq!(form.value(), "18:00");
        form.cycle_preset();
        assert_eq!(form.value(), "09:00");
    }

    #[test]
    fn test_backspace_removes_separator_with_digit() {
        let mut form = TimeForm::new();
        type_time(&mut form, "093");
        assert_eq!(form.value(), "09:3");
        form.backspace();
        assert_eq!(form.value(), "09");
    }
}
