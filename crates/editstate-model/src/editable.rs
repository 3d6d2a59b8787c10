use std::any::Any;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::error::ErrorView;
use crate::serializer::Serializable;

/// The capability shared by properties, editors and array editors: a current
/// validity, a way back to the last valid state, and a plain-data view.
pub trait Editable: Serializable + Debug + Any {
    /// Whether this node currently holds a usable value.
    fn has_valid_value(&self) -> bool;

    /// Drop rejected input and return to the last valid state.
    fn reset(&mut self);

    /// The node's error state, `None` when there is nothing to report.
    /// Composites report their children's errors.
    fn error_view(&self) -> Option<ErrorView>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Explicitly shared node, e.g. one editor nested under two parents.
///
/// Borrows are taken per call; a node must not be reset or serialized from
/// inside its own behaviour slots.
impl<E: Editable> Editable for Rc<RefCell<E>> {
    fn has_valid_value(&self) -> bool {
        self.borrow().has_valid_value()
    }

    fn reset(&mut self) {
        self.borrow_mut().reset();
    }

    fn error_view(&self) -> Option<ErrorView> {
        self.borrow().error_view()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
