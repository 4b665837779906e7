use std::collections::HashMap;

use once_cell::sync::Lazy;

pub mod value;
pub mod environment;
pub mod ops;
pub mod errors;


pub use value::{Value, Function};
pub use environment::Environment;
pub use errors::{ErrorKind, RuntimeError, Unwind, ExecResult};


pub type DefaultBuildHasher = ahash::RandomState;

// All namespace maps share one hasher factory, so creating the environment
// for a function call does not re-seed ahash every time.
static NAMESPACE_HASH: Lazy<DefaultBuildHasher> = Lazy::new(DefaultBuildHasher::default);

pub type Namespace = HashMap<String, Value, DefaultBuildHasher>;

pub fn new_namespace() -> Namespace {
    Namespace::with_hasher(NAMESPACE_HASH.clone())
}
