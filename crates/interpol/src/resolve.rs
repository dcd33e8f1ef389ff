//! Parameter sets and placeholder resolution.

use indexmap::IndexMap;

use crate::token::ParamKind;
use crate::value::Value;

/// One insertion-ordered collection of parameters, addressable both by name
/// and by position.
///
/// Named and pushed (anonymous) entries live in the same ordered map: the
/// position cursor slices across *all* of them, which is what makes the
/// documented cursor coupling work (see [`crate::expand`]).
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: IndexMap<ParamKey, Value>,
    next_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ParamKey {
    Name(String),
    Index(usize),
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace, keeping its slot) a named parameter.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .insert(ParamKey::Name(name.into()), value.into());
        self
    }

    /// Append an anonymous parameter.
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.entries
            .insert(ParamKey::Index(self.next_index), value.into());
        self.next_index += 1;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<&Value> {
        self.entries.get(&ParamKey::Name(name.to_owned()))
    }

    pub(crate) fn at(&self, index: usize) -> Option<&Value> {
        self.entries.get_index(index).map(|(_, v)| v)
    }
}

static NULL: Value = Value::Null;

/// Resolve one placeholder against the parameter set.
///
/// `cursor` is the count of placeholders (named *and* positional) already
/// seen in the template. Absent values resolve to null, never to an error;
/// the nullable flag decides what happens downstream.
pub(crate) fn resolve<'p>(params: &'p Params, kind: ParamKind<'_>, cursor: usize) -> &'p Value {
    let found = match kind {
        ParamKind::Named(name) => params.by_name(name),
        ParamKind::Positional => params.at(cursor),
    };
    found.unwrap_or(&NULL)
}
