//! Form field value objects

/// Inputs across the project wizard, task form and login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    ProjectType,
    Template,
    StartDate,
    DueDate,
    /// Pending collaborator email in the wizard, account email on login
    Email,
    /// Task assignee
    Responsible,
    Password,
}

impl Field {
    /// Translation key and English fallback for the field label
    pub fn label(self) -> (&'static str, &'static str) {
        match self {
            Self::Name => ("inputs.name", "Name"),
            Self::Description => ("inputs.description", "Description"),
            Self::ProjectType => ("inputs.projectType", "Project Type"),
            Self::Template => ("inputs.template", "Template"),
            Self::StartDate => ("inputs.startDate", "Start Date (YYYY-MM-DD)"),
            Self::DueDate => ("inputs.dueDate", "Due Date (YYYY-MM-DD)"),
            Self::Email => ("inputs.email", "Email"),
            Self::Responsible => ("inputs.selectResponsible", "Responsible"),
            Self::Password => ("inputs.password", "Password"),
        }
    }
}

/// Key into the wizard's error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Field(Field),
    /// Reserved slot for the last submission failure
    Submit,
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        ErrorKey::Field(field)
    }
}

/// Project types offered by the backend
pub const PROJECT_TYPES: &[&str] = &["TCC", "Artigo Acadêmico", "ABNT"];

/// Base templates a project can start from
pub const TEMPLATES: &[&str] = &[
    "Introdução, Objetivo, Conclusão...",
    "Resumo, Metodologia, Resultados...",
    "Em branco",
];

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [&'static str],
        selected: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: Field,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Rendered masked
    pub is_secret: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(field: Field, is_multiline: bool) -> Self {
        Self {
            field,
            value: FieldValue::Text(String::new()),
            is_multiline,
            is_secret: false,
        }
    }

    /// Create a masked single-line text field
    pub fn secret(field: Field) -> Self {
        Self {
            is_secret: true,
            ..Self::text(field, false)
        }
    }

    /// Create a choice field with the first option selected
    pub fn choice(field: Field, options: &'static [&'static str]) -> Self {
        Self {
            field,
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
            is_multiline: false,
            is_secret: false,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the current value as text (selected option for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                options.get(*selected).copied().unwrap_or("")
            }
        }
    }

    /// Set the value from text
    ///
    /// Choice fields select the matching option and ignore unknown text.
    /// Returns whether the value was accepted.
    pub fn set_text(&mut self, value: String) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                *s = value;
                true
            }
            FieldValue::Choice { options, selected } => {
                match options.iter().position(|o| *o == value) {
                    Some(idx) => {
                        *selected = idx;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Text with `c` appended, or `None` for choice fields
    pub fn with_char(&self, c: char) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.push(c);
                Some(next)
            }
            FieldValue::Choice { .. } => None,
        }
    }

    /// Text with the last character removed, or `None` for choice fields
    pub fn without_last_char(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.pop();
                Some(next)
            }
            FieldValue::Choice { .. } => None,
        }
    }

    /// Option adjacent to the current one (wraps), or `None` for text fields
    pub fn cycled_option(&self, forward: bool) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice { options, selected } if !options.is_empty() => {
                let len = options.len();
                let idx = if forward {
                    (selected + 1) % len
                } else {
                    (selected + len - 1) % len
                };
                Some(options[idx])
            }
            _ => None,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = 0,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => format!("◀ {} ▶", self.as_text()),
        }
    }
}

/// Named storage for one form's inputs
pub trait FieldSet {
    /// The input for `field`, if this form has one
    fn get(&self, field: Field) -> Option<&FormField>;
    fn get_mut(&mut self, field: Field) -> Option<&mut FormField>;

    /// Current text of `field`, empty when the form has no such input
    fn text(&self, field: Field) -> &str {
        self.get(field).map_or("", FormField::as_text)
    }

    /// Set `field` from text; false when the form lacks it or a choice rejects it
    fn set(&mut self, field: Field, value: String) -> bool {
        self.get_mut(field).is_some_and(|f| f.set_text(value))
    }
}
