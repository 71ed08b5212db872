//! Variable storage for a run.
//!
//! Cruck has a single flat scope: a variable declared inside a `while` or
//! `if` body stays visible after the block ends.

use rustc_hash::FxHashMap;

use cruck_diagnostic::{ErrorKind, RunError};
use cruck_parse::VarRef;

/// Name to value table, created fresh for every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    vars: FxHashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name`, replacing any previous value.
    pub fn define(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.vars.get_mut(name) {
            *slot = value;
        } else {
            self.vars.insert(name.to_owned(), value);
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Current value of `var`, or `UndeclaredVariable` at its position.
    pub fn lookup(&self, var: &VarRef) -> Result<i64, RunError> {
        self.get(&var.name).ok_or_else(|| {
            RunError::new(
                ErrorKind::UndeclaredVariable {
                    name: var.name.clone(),
                },
                var.pos,
            )
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Bindings sorted by name.
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut vars: Vec<_> = self.vars.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        vars.sort_unstable_by(|a, b| a.0.cmp(b.0));
        vars
    }
}
