use serde_json::Value;

use super::field::FieldConfig;
use super::schema::{validate, validate_field, FormErrors};
use super::value::{FormValue, FormValues};

/// Everything an open form knows, apart from its widgets
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    initial: FormValues,
    values: FormValues,
    errors: FormErrors,
    submitting: bool,
    submit_error: Option<String>,
}

impl FormState {
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FormErrors::default(),
            submitting: false,
            submit_error: None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Edit one field; a shown error is re-checked as the user fixes it
    pub fn set(&mut self, fields: &[FieldConfig], name: &str, value: FormValue) {
        self.values.set(name, value);
        if self.errors.get(name).is_none() {
            return;
        }
        let mut errors = FormErrors::default();
        for field in fields.iter().filter(|f| f.is_visible(&self.values)) {
            if self.errors.get(&field.name).is_none() {
                continue;
            }
            if let Err(message) = validate_field(field, &self.values) {
                errors.insert(&field.name, message);
            }
        }
        self.errors = errors;
    }

    /// Validate and return the payload to submit, or keep the errors shown
    pub fn begin_submit(&mut self, fields: &[FieldConfig]) -> Option<Value> {
        if self.submitting {
            return None;
        }
        self.submit_error = None;
        match validate(fields, &self.values) {
            Ok(()) => {
                self.errors = FormErrors::default();
                self.submitting = true;
                Some(self.values.to_payload(fields))
            }
            Err(errors) => {
                log::debug!("form rejected: {} invalid field(s)", errors.len());
                self.errors = errors;
                None
            }
        }
    }

    /// Success resets the form; a failure keeps the input and shows the message
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.values = self.initial.clone();
                self.errors = FormErrors::default();
                self.submit_error = None;
            }
            Err(message) => self.submit_error = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::field::FieldKind;
    use serde_json::json;

    fn fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig::new("code", "Code", FieldKind::Text).required(),
            FieldConfig::new("email", "Email", FieldKind::Email),
        ]
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let fields = fields();
        let mut form = FormState::new(FormValues::initial(&fields));
        assert_eq!(form.begin_submit(&fields), None);
        assert!(!form.is_submitting());
        assert_eq!(form.errors().get("code"), Some("Code is required"));

        form.set(&fields, "code", FormValue::Text("IBKR".into()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_successful_submit_resets() {
        let fields = fields();
        let mut form = FormState::new(FormValues::initial(&fields));
        form.set(&fields, "code", FormValue::Text("IBKR".into()));

        let payload = form.begin_submit(&fields).unwrap();
        assert_eq!(payload, json!({"code": "IBKR", "email": null}));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(&fields), None);

        form.finish_submit(Ok(()));
        assert_eq!(form.values().text("code"), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let fields = fields();
        let mut form = FormState::new(FormValues::initial(&fields));
        form.set(&fields, "code", FormValue::Text("IBKR".into()));
        form.begin_submit(&fields);

        form.finish_submit(Err("Code already exists".into()));
        assert_eq!(form.submit_error(), Some("Code already exists"));
        assert_eq!(form.values().text("code"), "IBKR");
        assert!(form.begin_submit(&fields).is_some());
        assert_eq!(form.submit_error(), None);
    }
}
