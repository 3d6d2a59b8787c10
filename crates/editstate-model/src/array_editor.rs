//! Ordered composites.
//!
//! An [`ArrayEditor`] holds a list of heterogeneous elements. Elements that
//! carry the [`Editable`] capability take part in validity, reset and
//! serialization; plain values are always kept as they are.
//!
//! `reset` is how temporary, never-validated items are removed from a list;
//! `serialize` gives the same selection without touching the list.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::editable::Editable;
use crate::editor::Editor;
use crate::error::{ErrorView, FieldError};
use crate::observer::{NoopObserver, Observer};
use crate::property::Property;
use crate::serializer::Serializable;

#[derive(Debug)]
pub enum Element {
    Validatable(Box<dyn Editable>),
    Opaque(Value),
}

impl Element {
    pub fn validatable(node: impl Editable) -> Self {
        Self::Validatable(Box::new(node))
    }

    pub fn opaque(value: impl Into<Value>) -> Self {
        Self::Opaque(value.into())
    }

    /// Whether this element survives a reset.
    pub fn is_kept(&self) -> bool {
        match self {
            Element::Opaque(_) => true,
            Element::Validatable(node) => node.has_valid_value(),
        }
    }

    pub fn error(&self) -> Option<ErrorView> {
        match self {
            Element::Opaque(_) => None,
            Element::Validatable(node) => node.error_view(),
        }
    }

    pub fn as_editable(&self) -> Option<&dyn Editable> {
        match self {
            Element::Validatable(node) => Some(node.as_ref()),
            Element::Opaque(_) => None,
        }
    }

    pub fn downcast_ref<T: Editable>(&self) -> Option<&T> {
        self.as_editable()?.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Editable>(&mut self) -> Option<&mut T> {
        match self {
            Element::Validatable(node) => node.as_any_mut().downcast_mut(),
            Element::Opaque(_) => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        self.downcast_ref()
    }

    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        self.downcast_mut()
    }
}

impl From<Property> for Element {
    fn from(property: Property) -> Self {
        Self::validatable(property)
    }
}

impl From<Editor> for Element {
    fn from(editor: Editor) -> Self {
        Self::validatable(editor)
    }
}

impl From<ArrayEditor> for Element {
    fn from(editor: ArrayEditor) -> Self {
        Self::validatable(editor)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::Opaque(value)
    }
}

impl Serializable for Element {
    fn serialize(&self) -> Value {
        match self {
            Element::Opaque(value) => value.serialize(),
            Element::Validatable(node) => node.serialize(),
        }
    }
}

pub struct ArrayEditor {
    value: Option<Vec<Element>>,
    observer: Rc<dyn Observer>,
}

impl ArrayEditor {
    /// An absent list becomes empty when `allow_empty`, and stays absent
    /// (and invalid) otherwise.
    pub fn new(value: Option<Vec<Element>>, allow_empty: bool) -> Self {
        let value = match value {
            None if allow_empty => Some(Vec::new()),
            other => other,
        };
        Self {
            value,
            observer: Rc::new(NoopObserver),
        }
    }

    pub fn from_elements<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self::new(Some(elements.into_iter().map(Into::into).collect()), true)
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Rc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn get(&self) -> Option<&[Element]> {
        self.value.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Vec<Element>> {
        self.value.as_mut()
    }

    /// Replace the list. Element validity is the elements' own concern, so
    /// this always succeeds.
    pub fn set(&mut self, value: Option<Vec<Element>>) -> bool {
        self.value = value;
        true
    }

    /// Per-element errors, aligned with the list. Nested editors and lists
    /// report their own views. Empty when the list is absent.
    pub fn error(&self) -> Vec<Option<ErrorView>> {
        self.value
            .iter()
            .flatten()
            .map(Element::error)
            .collect()
    }
}

impl Default for ArrayEditor {
    fn default() -> Self {
        Self::new(None, true)
    }
}

impl Editable for ArrayEditor {
    /// Invalid when absent. Otherwise valid when empty or when any element is
    /// kept by [`Element::is_kept`].
    fn has_valid_value(&self) -> bool {
        match &self.value {
            None => false,
            Some(elements) => elements.is_empty() || elements.iter().any(Element::is_kept),
        }
    }

    fn reset(&mut self) {
        let Some(elements) = self.value.take() else {
            return;
        };
        let mut kept = Vec::with_capacity(elements.len());
        for (index, mut element) in elements.into_iter().enumerate() {
            if !element.is_kept() {
                self.observer.element_dropped(index);
                continue;
            }
            if let Element::Validatable(node) = &mut element {
                node.reset();
            }
            kept.push(element);
        }
        self.value = Some(kept);
    }

    /// An absent list reads as unset. A present one reports its element
    /// errors, or nothing when no element has one.
    fn error_view(&self) -> Option<ErrorView> {
        if self.value.is_none() {
            return Some(ErrorView::Field(FieldError::Unset));
        }
        let errors = self.error();
        if errors.iter().all(Option::is_none) {
            return None;
        }
        Some(ErrorView::List(errors))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Serializable for ArrayEditor {
    fn serialize(&self) -> Value {
        match &self.value {
            None => Value::Null,
            Some(elements) => Value::Array(
                elements
                    .iter()
                    .filter(|element| element.is_kept())
                    .map(Serializable::serialize)
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for ArrayEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayEditor")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
