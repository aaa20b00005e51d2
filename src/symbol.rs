//! Non-terminal identity.
//!
//! A `Symbol` carries an optional human-readable name used only for
//! debugging and tree labeling. Equality is by identity, never by name --
//! two distinct symbols may share a name and must compare unequal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use smol_str::SmolStr;

static NEXT_SYMBOL_ID: AtomicUsize = AtomicUsize::new(0);

struct SymbolInner {
    id: usize,
    name: Option<SmolStr>,
}

/// A non-terminal identity. Cheap to clone (an `Rc` handle); compares and
/// hashes by the id assigned at construction, not by name.
#[derive(Clone)]
pub struct Symbol(Rc<SymbolInner>);

impl Symbol {
    /// Return a fresh symbol with stable identity.
    pub fn new(name: Option<&str>) -> Self {
        let id = NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed);
        Self(Rc::new(SymbolInner {
            id,
            name: name.map(SmolStr::new),
        }))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Symbol({name}#{})", self.0.id),
            None => write!(f, "Symbol(#{})", self.0.id),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "<anon#{}>", self.0.id),
        }
    }
}
