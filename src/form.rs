//! Form Field Registry
//!
//! Bridges uncontrolled input elements to a per-dialog form handle. Each
//! dialog owns a [`FormHandle`]; inputs register a [`ValueAccessor`] for their
//! field name once their element exists, and the dialog extracts every value
//! at submit time. Registration never triggers a render, and the inputs never
//! push per-keystroke updates anywhere.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Value kind declared per field; drives parsing at submit time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Numeric,
    Url,
}

/// A field value parsed through its declared [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Numeric(f64),
    Url(String),
}

/// Submit-time validation errors, rendered verbatim in the dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("field \"{0}\" is not registered")]
    Unregistered(String),
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a number greater than zero")]
    InvalidNumber { field: String },
    #[error("{field} must be a valid URL")]
    InvalidUrl { field: String },
    #[error("{field} does not hold a {expected} value")]
    WrongKind {
        field: String,
        expected: &'static str,
    },
}

impl FieldKind {
    fn parse(self, field: &str, raw: &str) -> Result<FieldValue, FormError> {
        let raw = raw.trim();
        match self {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Numeric => raw
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite() && *price > 0.0)
                .map(FieldValue::Numeric)
                .ok_or_else(|| FormError::InvalidNumber {
                    field: field.to_string(),
                }),
            FieldKind::Url => url::Url::parse(raw)
                .map(|_| FieldValue::Url(raw.to_string()))
                .map_err(|_| FormError::InvalidUrl {
                    field: field.to_string(),
                }),
        }
    }
}

/// Reads and writes one field's value wherever it actually lives.
///
/// The DOM-backed implementation is [`ElementAccessor`]; tests register
/// in-memory accessors instead.
pub trait ValueAccessor {
    fn read(&self) -> String;
    fn write(&self, value: &str);
}

/// Accessor over a real `<input>` element's value property.
pub struct ElementAccessor {
    element: web_sys::HtmlInputElement,
}

impl ElementAccessor {
    pub fn new(element: web_sys::HtmlInputElement) -> Self {
        Self { element }
    }
}

impl ValueAccessor for ElementAccessor {
    fn read(&self) -> String {
        self.element.value()
    }

    fn write(&self, value: &str) {
        self.element.set_value(value);
    }
}

struct FieldEntry {
    kind: FieldKind,
    accessor: Rc<dyn ValueAccessor>,
}

/// Per-dialog form state: field name -> accessor, plus seeded initial values.
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone, Default)]
pub struct FormHandle {
    fields: Rc<RefCell<HashMap<String, FieldEntry>>>,
    initial: Rc<RefCell<HashMap<String, String>>>,
}

impl FormHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the accessor for `name`. The last registration for a given
    /// name wins, so re-registering on every render is harmless. A pending
    /// initial value for the field is written through the new accessor.
    pub fn register(&self, name: &str, kind: FieldKind, accessor: Rc<dyn ValueAccessor>) {
        if let Some(initial) = self.initial.borrow().get(name) {
            accessor.write(initial);
        }
        self.fields
            .borrow_mut()
            .insert(name.to_string(), FieldEntry { kind, accessor });
    }

    /// Raw current value of a registered field.
    pub fn value(&self, name: &str) -> Option<String> {
        self.fields
            .borrow()
            .get(name)
            .map(|entry| entry.accessor.read())
    }

    /// Current value parsed through the field's declared kind.
    pub fn field_value(&self, name: &str) -> Result<FieldValue, FormError> {
        let fields = self.fields.borrow();
        let entry = fields
            .get(name)
            .ok_or_else(|| FormError::Unregistered(name.to_string()))?;
        entry.kind.parse(name, &entry.accessor.read())
    }

    pub fn text(&self, name: &str) -> Result<String, FormError> {
        match self.field_value(name)? {
            FieldValue::Text(value) => Ok(value),
            _ => Err(FormError::WrongKind {
                field: name.to_string(),
                expected: "text",
            }),
        }
    }

    pub fn numeric(&self, name: &str) -> Result<f64, FormError> {
        match self.field_value(name)? {
            FieldValue::Numeric(value) => Ok(value),
            _ => Err(FormError::WrongKind {
                field: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    pub fn url(&self, name: &str) -> Result<String, FormError> {
        match self.field_value(name)? {
            FieldValue::Url(value) => Ok(value),
            _ => Err(FormError::WrongKind {
                field: name.to_string(),
                expected: "url",
            }),
        }
    }

    /// Seed initial values. Fields already registered are written through
    /// immediately; fields registered later pick the value up at
    /// registration time.
    pub fn seed(&self, values: &[(&str, String)]) {
        for (name, value) in values {
            if let Some(entry) = self.fields.borrow().get(*name) {
                entry.accessor.write(value);
            }
            self.initial
                .borrow_mut()
                .insert((*name).to_string(), value.clone());
        }
    }

    /// Clear every registered element and forget seeded initial values.
    pub fn reset(&self) {
        self.initial.borrow_mut().clear();
        for entry in self.fields.borrow().values() {
            entry.accessor.write("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAccessor {
        value: RefCell<String>,
    }

    impl StubAccessor {
        fn with(value: &str) -> Rc<Self> {
            Rc::new(Self {
                value: RefCell::new(value.to_string()),
            })
        }
    }

    impl ValueAccessor for StubAccessor {
        fn read(&self) -> String {
            self.value.borrow().clone()
        }

        fn write(&self, value: &str) {
            *self.value.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn last_registration_wins() {
        let form = FormHandle::new();
        form.register("name", FieldKind::Text, StubAccessor::with("first"));
        form.register("name", FieldKind::Text, StubAccessor::with("second"));

        assert_eq!(form.value("name"), Some("second".to_string()));
    }

    #[test]
    fn registration_picks_up_seeded_initial() {
        let form = FormHandle::new();
        form.seed(&[("name", "Pizza".to_string())]);

        let accessor = StubAccessor::with("");
        form.register("name", FieldKind::Text, accessor.clone());

        assert_eq!(accessor.read(), "Pizza");
        assert_eq!(form.value("name"), Some("Pizza".to_string()));
    }

    #[test]
    fn seed_writes_through_registered_fields() {
        let form = FormHandle::new();
        let accessor = StubAccessor::with("stale");
        form.register("name", FieldKind::Text, accessor.clone());

        form.seed(&[("name", "Lasagna".to_string())]);
        assert_eq!(accessor.read(), "Lasagna");
    }

    #[test]
    fn numeric_field_rejects_garbage_and_non_positive() {
        let form = FormHandle::new();
        form.register("price", FieldKind::Numeric, StubAccessor::with("abc"));
        assert!(matches!(
            form.numeric("price"),
            Err(FormError::InvalidNumber { .. })
        ));

        form.register("price", FieldKind::Numeric, StubAccessor::with("-3"));
        assert!(matches!(
            form.numeric("price"),
            Err(FormError::InvalidNumber { .. })
        ));

        form.register("price", FieldKind::Numeric, StubAccessor::with(" 19.90 "));
        assert_eq!(form.numeric("price").unwrap(), 19.90);
    }

    #[test]
    fn url_field_requires_absolute_url() {
        let form = FormHandle::new();
        form.register("image", FieldKind::Url, StubAccessor::with("pizza.png"));
        assert!(matches!(
            form.url("image"),
            Err(FormError::InvalidUrl { .. })
        ));

        form.register(
            "image",
            FieldKind::Url,
            StubAccessor::with("https://example.com/pizza.png"),
        );
        assert_eq!(form.url("image").unwrap(), "https://example.com/pizza.png");
    }

    #[test]
    fn unregistered_field_is_an_error() {
        let form = FormHandle::new();
        assert_eq!(
            form.field_value("missing"),
            Err(FormError::Unregistered("missing".to_string()))
        );
    }

    #[test]
    fn reset_clears_values_and_initials() {
        let form = FormHandle::new();
        let accessor = StubAccessor::with("typed");
        form.register("name", FieldKind::Text, accessor.clone());
        form.seed(&[("description", "old".to_string())]);

        form.reset();
        assert_eq!(accessor.read(), "");

        let late = StubAccessor::with("late");
        form.register("description", FieldKind::Text, late.clone());
        assert_eq!(late.read(), "late");
    }
}
