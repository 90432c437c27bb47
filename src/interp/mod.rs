//! The evaluation core: values, the global environment, the tree reader,
//! the builtin registry, and the tree-walking evaluator.

pub mod builtins;
pub mod env;
pub mod eval;
pub mod read;
pub mod value;

pub use env::{Env, RunState};
pub use eval::eval;
pub use read::read;
pub use value::{BuiltinFn, Value};
