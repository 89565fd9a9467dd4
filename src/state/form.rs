//! Contact form field registry

/// Index of the submit button in the Tab cycle (after the four fields)
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// Identifies one of the four registry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldId {
    /// Map a Tab-cycle slot to a field; the button row maps to `None`
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FirstName),
            1 => Some(Self::LastName),
            2 => Some(Self::Email),
            3 => Some(Self::Message),
            _ => None,
        }
    }
}

/// A single text field with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create an empty text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            is_multiline,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters currently entered (chars, not bytes)
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Append a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

/// The contact form: four fields plus the Tab cursor over fields and
/// the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("firstName", "First Name", false),
            last_name: FormField::text("lastName", "Last Name", false),
            email: FormField::text("email", "Email", false),
            message: FormField::text("message", "Message", true),
            active_field_index: 0,
        }
    }

    /// Tab-cycle slots: the four fields plus the submit button row
    fn slot_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1
    }

    /// Move focus to the next slot (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.slot_count();
    }

    /// Move focus to the previous slot (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.slot_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true when focus sits on the submit button
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// The field under the cursor, `None` on the button row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field {
        use super::*;

        #[test]
        fn test_push_and_pop_char() {
            let mut field = FormField::text("firstName", "First Name", false);
            field.push_char('a');
            field.push_char('b');
            assert_eq!(field.value, "ab");
            field.pop_char();
            assert_eq!(field.value, "a");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = FormField::text("email", "Email", false);
            field.pop_char();
            assert!(field.is_empty());
        }

        #[test]
        fn test_char_count_is_unicode_aware() {
            let mut field = FormField::text("firstName", "First Name", false);
            for c in "émile".chars() {
                field.push_char(c);
            }
            assert_eq!(field.char_count(), 5);
            assert!(field.value.len() > 5); // bytes, not chars
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_starts_on_first_name() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_id(), Some(FieldId::FirstName));
        }

        #[test]
        fn test_next_field_cycles_through_all_slots() {
            let mut form = ContactForm::new();
            for _ in 0..=SUBMIT_BUTTON_INDEX {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // wrapped back
        }

        #[test]
        fn test_prev_field_wraps_to_button_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_button_row_active());
            assert_eq!(form.active_field_id(), None);
        }

        #[test]
        fn test_field_order_matches_tab_cycle() {
            let mut form = ContactForm::new();
            let expected = [
                Some(FieldId::FirstName),
                Some(FieldId::LastName),
                Some(FieldId::Email),
                Some(FieldId::Message),
                None,
            ];
            for id in expected {
                assert_eq!(form.active_field_id(), id);
                form.next_field();
            }
        }

        #[test]
        fn test_field_accessors_map_to_same_field() {
            let mut form = ContactForm::new();
            form.field_mut(FieldId::Email).push_char('x');
            assert_eq!(form.field(FieldId::Email).value, "x");
            assert_eq!(form.email.value, "x");
        }
    }
}
