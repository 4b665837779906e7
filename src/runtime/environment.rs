use std::rc::Rc;
use std::cell::RefCell;

use crate::runtime::{Namespace, Value, new_namespace};


// A single lexical scope: name bindings plus the chain of enclosing scopes.
// Environments are shared (function calls, closures) so all handles are Rc
// and the store is behind a RefCell. Execution is single threaded and no
// borrow is held across evaluation, so the RefCell cannot be double-borrowed.
#[derive(Debug)]
pub struct Environment {
    store: RefCell<Namespace>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new_root() -> Rc<Self> {
        Rc::new(Environment {
            store: RefCell::new(new_namespace()),
            outer: None,
        })
    }

    pub fn new_enclosed(outer: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            store: RefCell::new(new_namespace()),
            outer: Some(Rc::clone(outer)),
        })
    }

    /// Looks up a name, walking outward through the enclosing scopes.
    pub fn find_value(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.find_value(name))
    }

    /// Binds a name in this scope, shadowing any outer binding of the
    /// same name without touching it.
    pub fn insert_value(&self, name: impl Into<String>, value: Value) {
        self.store.borrow_mut().insert(name.into(), value);
    }
}
