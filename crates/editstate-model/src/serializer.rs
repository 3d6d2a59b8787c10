//! Flattening of state trees into plain data.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

/// Anything that can be flattened into plain data.
///
/// Composites decide for themselves which children to include; behaviour
/// slots never reach this trait.
pub trait Serializable {
    fn serialize(&self) -> Value;
}

/// Flatten `target` into plain data.
pub fn serialize<T: Serializable + ?Sized>(target: &T) -> Value {
    target.serialize()
}

impl Serializable for Value {
    fn serialize(&self) -> Value {
        self.clone()
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self) -> Value {
        match self {
            Some(inner) => inner.serialize(),
            None => Value::Null,
        }
    }
}

impl<T: Serializable> Serializable for [T] {
    fn serialize(&self) -> Value {
        Value::Array(self.iter().map(Serializable::serialize).collect())
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self) -> Value {
        self.as_slice().serialize()
    }
}

impl<T: Serializable + ?Sized> Serializable for Box<T> {
    fn serialize(&self) -> Value {
        (**self).serialize()
    }
}

impl<T: Serializable + ?Sized> Serializable for Rc<RefCell<T>> {
    fn serialize(&self) -> Value {
        self.borrow().serialize()
    }
}
