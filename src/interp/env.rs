//! The global binding environment
//!
//! Qex has exactly one flat scope: a single insertion-ordered table mapping
//! symbol names to values. Values cross the environment boundary by deep
//! copy in both directions, so no binding ever aliases a live expression
//! tree. Builtin names are recorded in a protected set at construction and
//! can never be rebound.

use indexmap::{IndexMap, IndexSet};

use super::builtins;
use super::value::Value;

/// Interpreter run state, stored here so the `exit` builtin can reach it.
///
/// The evaluator never inspects this flag; the driving loop owns the
/// `ConfirmExit -> Running` and `ConfirmExit -> Terminated` transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    ConfirmExit,
    Terminated,
}

/// The single global environment
pub struct Env {
    /// Bindings in insertion order
    bindings: IndexMap<String, Value>,
    /// Builtin names, fixed at construction
    protected: IndexSet<&'static str>,
    /// Process-wide run flag, see [`RunState`]
    run_state: RunState,
    /// Lines printed by builtins (`values`), mirrored for tests
    output: Vec<String>,
}

impl Env {
    /// Create an environment with every builtin installed
    pub fn new() -> Self {
        let mut env = Env {
            bindings: IndexMap::new(),
            protected: builtins::TABLE.iter().map(|(name, _)| *name).collect(),
            run_state: RunState::Running,
            output: Vec::new(),
        };
        for (name, func) in builtins::TABLE {
            env.put(name, &Value::Function(*func));
        }
        tracing::debug!(count = builtins::TABLE.len(), "installed builtins");
        env
    }

    /// Look up a name, returning a deep copy of its value or an unbound-symbol
    /// error carrying the offending name
    pub fn get(&self, name: &str) -> Value {
        match self.bindings.get(name) {
            Some(value) => value.clone(),
            None => Value::error(format!("Unbound symbol '{}'", name)),
        }
    }

    /// Bind `name` to a deep copy of `value`, replacing any prior binding.
    /// Protection checks happen at the call site (`def`), not here.
    pub fn put(&mut self, name: &str, value: &Value) {
        self.bindings.insert(name.to_string(), value.clone());
    }

    /// True if `name` is a builtin identifier and may not be redefined
    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.contains(name)
    }

    /// Bound names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// `exit` builtin entry point: Running -> ConfirmExit
    pub fn request_exit(&mut self) {
        self.run_state = RunState::ConfirmExit;
    }

    /// Driving-loop transitions out of ConfirmExit
    pub fn set_run_state(&mut self, state: RunState) {
        self.run_state = state;
    }

    /// Print a line to stdout and record it for tests
    pub fn print_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        println!("{}", line);
        self.output.push(line);
    }

    /// Drain the lines recorded by [`Env::print_line`]
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
