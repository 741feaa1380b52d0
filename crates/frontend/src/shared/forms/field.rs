//! Declarative description of form fields.

use super::value::{FormValue, FormValues};

/// Rule replacing the generated validation of a field
pub type Validator = fn(&FormValue, &FormValues) -> Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Widget and value type of a field. Each variant carries only what it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
        /// Lower bound read from another field's live value
        dynamic_min: Option<String>,
        /// Upper bound read from another field's live value
        dynamic_max: Option<String>,
    },
    Textarea {
        rows: u32,
    },
    Select {
        options: Vec<SelectOption>,
    },
    MultiSelect {
        options: Vec<SelectOption>,
    },
    /// Options looked up remotely as the user types
    SearchableSelect {
        endpoint: &'static str,
        value_field: String,
        label_field: String,
        min_query: usize,
    },
    Checkbox,
    Date,
    DateTime,
    Hidden,
}

impl FieldKind {
    pub fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
            step: None,
            dynamic_min: None,
            dynamic_max: None,
        }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self::Select { options }
    }

    pub fn multi_select(options: Vec<SelectOption>) -> Self {
        Self::MultiSelect { options }
    }

    pub fn searchable(endpoint: &'static str, value_field: &str, label_field: &str) -> Self {
        Self::SearchableSelect {
            endpoint,
            value_field: value_field.to_string(),
            label_field: label_field.to_string(),
            min_query: 2,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Select { options } | Self::MultiSelect { options } => options,
            _ => &[],
        }
    }

    /// Value of a field nobody touched
    pub fn empty_value(&self) -> FormValue {
        match self {
            Self::Checkbox => FormValue::Bool(false),
            Self::MultiSelect { .. } => FormValue::List(Vec::new()),
            _ => FormValue::Text(String::new()),
        }
    }
}

/// Show a field only while another field has one of the given values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowWhen {
    pub field: String,
    pub one_of: Vec<String>,
}

impl ShowWhen {
    pub fn matches(&self, values: &FormValues) -> bool {
        let current = values.text(&self.field);
        self.one_of.iter().any(|v| *v == current)
    }
}

#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub help: Option<String>,
    pub default: Option<FormValue>,
    pub show_when: Option<ShowWhen>,
    pub validator: Option<Validator>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            help: None,
            default: None,
            show_when: None,
            validator: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(mut self, value: FormValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn show_when(mut self, field: &str, one_of: &[&str]) -> Self {
        self.show_when = Some(ShowWhen {
            field: field.to_string(),
            one_of: one_of.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    pub fn validate_with(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn initial_value(&self) -> FormValue {
        self.default
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }

    /// Hidden-by-condition fields are neither rendered nor validated
    pub fn is_visible(&self, values: &FormValues) -> bool {
        self.show_when
            .as_ref()
            .map(|rule| rule.matches(values))
            .unwrap_or(true)
    }
}
