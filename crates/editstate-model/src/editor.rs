//! Named composites.
//!
//! An [`Editor`] groups properties, nested editors and behaviour functions
//! under slot names. Its validity and its serialized form are derived from the
//! slots listed in `must_be_valid`; it never validates anything itself.
//!
//! ```
//! use editstate_model::{Editable, Editor};
//! use serde_json::json;
//!
//! let editor = Editor::builder().value("a", 1).unset("b").build()?;
//! assert!(!editor.has_valid_value());
//! assert_eq!(editor.serialize_with(true), json!({"a": 1}));
//! # Ok::<(), editstate_model::ModelError>(())
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::editable::Editable;
use crate::error::{ErrorView, ModelError, Result};
use crate::observer::Observer;
use crate::property::Property;
use crate::serializer::Serializable;

/// A behaviour slot. It receives the owning editor so it can read siblings.
pub type Behavior = Box<dyn Fn(&Editor) -> Value>;

/// One named entry of an editor, classified once at construction.
pub enum Slot {
    Data(Property),
    Nested(Box<dyn Editable>),
    Behavior(Behavior),
}

impl Slot {
    /// The slot as a node taking part in validity and serialization.
    /// Behaviour slots take part in neither.
    pub fn as_editable(&self) -> Option<&dyn Editable> {
        match self {
            Slot::Data(property) => Some(property),
            Slot::Nested(nested) => Some(nested.as_ref()),
            Slot::Behavior(_) => None,
        }
    }

    pub fn as_editable_mut(&mut self) -> Option<&mut dyn Editable> {
        match self {
            Slot::Data(property) => Some(property),
            Slot::Nested(nested) => Some(nested.as_mut()),
            Slot::Behavior(_) => None,
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Data(property) => f.debug_tuple("Data").field(property).finish(),
            Slot::Nested(nested) => f.debug_tuple("Nested").field(nested).finish(),
            Slot::Behavior(_) => f.write_str("Behavior(..)"),
        }
    }
}

enum Pending {
    Field(Option<Value>),
    Slot(Slot),
}

/// Construction-time configuration of an [`Editor`].
#[derive(Default)]
pub struct EditorBuilder {
    slots: Vec<(String, Pending)>,
    must_be_valid: Option<Vec<String>>,
    observer: Option<Rc<dyn Observer>>,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A property slot starting valid with `value`.
    #[must_use]
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field(name, Some(value.into()))
    }

    /// A property slot starting unset.
    #[must_use]
    pub fn unset(self, name: impl Into<String>) -> Self {
        self.field(name, None)
    }

    /// A property slot starting with `value`, or unset when `None`.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: Option<Value>) -> Self {
        self.slots.push((name.into(), Pending::Field(value)));
        self
    }

    /// A property slot holding an already built property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.slots
            .push((name.into(), Pending::Slot(Slot::Data(property))));
        self
    }

    /// A nested editor, array editor, or shared handle to one.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, nested: impl Editable) -> Self {
        self.slots
            .push((name.into(), Pending::Slot(Slot::Nested(Box::new(nested)))));
        self
    }

    #[must_use]
    pub fn behavior<F>(mut self, name: impl Into<String>, behavior: F) -> Self
    where
        F: Fn(&Editor) -> Value + 'static,
    {
        self.slots
            .push((name.into(), Pending::Slot(Slot::Behavior(Box::new(behavior)))));
        self
    }

    /// Restrict validity and default serialization to these slots.
    /// Without this, every property and nested slot is required.
    #[must_use]
    pub fn must_be_valid<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_be_valid = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Observer attached to the properties this builder creates.
    #[must_use]
    pub fn observer(mut self, observer: Rc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<Editor> {
        let mut slots = IndexMap::with_capacity(self.slots.len());
        let mut prop_names = Vec::new();

        for (name, pending) in self.slots {
            if slots.contains_key(&name) {
                return Err(ModelError::DuplicateSlot(name));
            }
            let slot = match pending {
                Pending::Field(value) => {
                    let mut property = Property::from_option(value).named(name.as_str());
                    if let Some(observer) = &self.observer {
                        property.set_observer(Rc::clone(observer));
                    }
                    Slot::Data(property)
                }
                Pending::Slot(Slot::Data(mut property)) => {
                    property.set_name_if_missing(&name);
                    Slot::Data(property)
                }
                Pending::Slot(slot) => slot,
            };
            if !matches!(slot, Slot::Behavior(_)) {
                prop_names.push(name.clone());
            }
            slots.insert(name, slot);
        }

        let must_be_valid = match self.must_be_valid {
            Some(names) => {
                if let Some(unknown) = names.iter().find(|name| !prop_names.contains(name)) {
                    return Err(ModelError::UnknownRequiredSlot(unknown.clone()));
                }
                names
            }
            None => prop_names.clone(),
        };

        Ok(Editor {
            slots,
            prop_names,
            must_be_valid,
        })
    }
}

#[derive(Debug)]
pub struct Editor {
    slots: IndexMap<String, Slot>,
    prop_names: Vec<String>,
    must_be_valid: Vec<String>,
}

impl Editor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    /// Property and nested slot names, in declaration order.
    pub fn prop_names(&self) -> &[String] {
        &self.prop_names
    }

    pub fn must_be_valid(&self) -> &[String] {
        &self.must_be_valid
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        match self.slots.get(name)? {
            Slot::Data(property) => Some(property),
            _ => None,
        }
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        match self.slots.get_mut(name)? {
            Slot::Data(property) => Some(property),
            _ => None,
        }
    }

    /// Accepted value of a property slot.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.property(name)?.get()
    }

    pub fn nested(&self, name: &str) -> Option<&dyn Editable> {
        match self.slots.get(name)? {
            Slot::Nested(nested) => Some(nested.as_ref()),
            _ => None,
        }
    }

    pub fn nested_mut(&mut self, name: &str) -> Option<&mut dyn Editable> {
        match self.slots.get_mut(name)? {
            Slot::Nested(nested) => Some(nested.as_mut()),
            _ => None,
        }
    }

    /// A nested slot viewed as its concrete type.
    pub fn nested_as<T: Editable>(&self, name: &str) -> Option<&T> {
        self.nested(name)?.as_any().downcast_ref()
    }

    pub fn nested_as_mut<T: Editable>(&mut self, name: &str) -> Option<&mut T> {
        self.nested_mut(name)?.as_any_mut().downcast_mut()
    }

    /// Invoke a behaviour slot with this editor as its context.
    pub fn call(&self, name: &str) -> Option<Value> {
        match self.slots.get(name)? {
            Slot::Behavior(behavior) => Some(behavior(self)),
            _ => None,
        }
    }

    /// Current errors of property and nested slots, skipping those without one.
    /// Nested editors and lists contribute their whole error view.
    pub fn errors(&self) -> IndexMap<String, ErrorView> {
        self.editables(&self.prop_names)
            .filter_map(|(name, node)| {
                let error = node.error_view()?;
                Some((name.to_string(), error))
            })
            .collect()
    }

    /// Serialize the required slots (`only_required`) or every property and
    /// nested slot. Slots without a valid value are left out entirely.
    pub fn serialize_with(&self, only_required: bool) -> Value {
        let names = if only_required {
            &self.must_be_valid
        } else {
            &self.prop_names
        };
        let map: Map<String, Value> = self
            .editables(names)
            .filter(|(_, node)| node.has_valid_value())
            .map(|(name, node)| (name.to_string(), node.serialize()))
            .collect();
        Value::Object(map)
    }

    fn editables<'a>(
        &'a self,
        names: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a dyn Editable)> + 'a {
        names.iter().filter_map(|name| {
            let node = self.slots.get(name)?.as_editable()?;
            Some((name.as_str(), node))
        })
    }
}

impl Editable for Editor {
    fn has_valid_value(&self) -> bool {
        self.editables(&self.must_be_valid)
            .all(|(_, node)| node.has_valid_value())
    }

    fn reset(&mut self) {
        for name in &self.prop_names {
            if let Some(node) = self.slots.get_mut(name).and_then(Slot::as_editable_mut) {
                node.reset();
            }
        }
    }

    fn error_view(&self) -> Option<ErrorView> {
        let errors = self.errors();
        (!errors.is_empty()).then_some(ErrorView::Fields(errors))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Serializable for Editor {
    fn serialize(&self) -> Value {
        self.serialize_with(true)
    }
}
