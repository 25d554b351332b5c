//! Name-based attribute access for plain targets.
//!
//! Plain targets expose named attributes through the `Attributes` trait.
//! Each attribute is handed out as a typed `AttributeSlot`, so the caster
//! can tell integer attributes (which spells may change) from everything
//! else without any runtime reflection.
//!
//! ## AttributeSlot Kinds
//!
//! - `Int`: signed integers (health, durability) - the only castable kind
//! - `Float`: floating point values
//! - `Bool`: flags
//! - `Text`: strings
//!
//! Types usually build an `AttributeTable` once and forward to it.

use std::fmt;

use rustc_hash::FxHashMap;

use super::cast::CastReceiver;

/// Discriminant of an `AttributeSlot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Int,
    Float,
    Bool,
    Text,
}

impl AttributeKind {
    /// Whether spells can be applied to attributes of this kind.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, AttributeKind::Int)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Int => "int",
            AttributeKind::Float => "float",
            AttributeKind::Bool => "bool",
            AttributeKind::Text => "string",
        };
        f.write_str(name)
    }
}

/// Mutable, typed view of a single attribute.
#[derive(Debug)]
pub enum AttributeSlot<'a> {
    /// Signed integer (health, durability, mana).
    Int(&'a mut i64),
    /// Floating point value (speed, multipliers).
    Float(&'a mut f64),
    /// Boolean flag.
    Bool(&'a mut bool),
    /// Text value.
    Text(&'a mut String),
}

impl AttributeSlot<'_> {
    /// Kind of the underlying attribute.
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeSlot::Int(_) => AttributeKind::Int,
            AttributeSlot::Float(_) => AttributeKind::Float,
            AttributeSlot::Bool(_) => AttributeKind::Bool,
            AttributeSlot::Text(_) => AttributeKind::Text,
        }
    }

    /// Current value if this is an integer attribute.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeSlot::Int(v) => Some(**v),
            _ => None,
        }
    }
}

impl<'a> From<&'a mut i64> for AttributeSlot<'a> {
    fn from(v: &'a mut i64) -> Self {
        AttributeSlot::Int(v)
    }
}

impl<'a> From<&'a mut f64> for AttributeSlot<'a> {
    fn from(v: &'a mut f64) -> Self {
        AttributeSlot::Float(v)
    }
}

impl<'a> From<&'a mut bool> for AttributeSlot<'a> {
    fn from(v: &'a mut bool) -> Self {
        AttributeSlot::Bool(v)
    }
}

impl<'a> From<&'a mut String> for AttributeSlot<'a> {
    fn from(v: &'a mut String) -> Self {
        AttributeSlot::Text(v)
    }
}

/// Named attribute access for plain targets.
///
/// Only attributes a type chooses to expose are reachable. Anything else,
/// private state included, looks exactly like a missing attribute.
///
/// Only `i64` fields are castable. Narrower or unsigned integers must be
/// stored as `i64` to be changed by spells.
///
/// `Debug` is required so failed casts can show the target in diagnostics.
pub trait Attributes: fmt::Debug {
    /// Look up an attribute by exact, case-sensitive name.
    fn attribute(&mut self, name: &str) -> Option<AttributeSlot<'_>>;

    /// Names of all exposed attributes.
    fn attribute_names(&self) -> Vec<&'static str>;

    /// The target's own receiver, if it also implements `CastReceiver`.
    ///
    /// When this returns `Some`, casting hands the spell to the receiver
    /// and never looks at attributes.
    fn as_receiver(&mut self) -> Option<&mut dyn CastReceiver> {
        None
    }
}

/// Accessor from a target to one of its attributes.
pub type Accessor<T> = for<'a> fn(&'a mut T) -> AttributeSlot<'a>;

/// Registry of attribute accessors for one concrete type.
///
/// Built once per type, usually in a lazily initialized static.
///
/// ## Example
///
/// ```
/// use spellcast::spells::{AttributeSlot, AttributeTable};
///
/// struct Golem {
///     armor: i64,
/// }
///
/// let table = AttributeTable::<Golem>::new().with("Armor", |g| AttributeSlot::Int(&mut g.armor));
///
/// let mut golem = Golem { armor: 10 };
/// if let Some(AttributeSlot::Int(armor)) = table.slot(&mut golem, "Armor") {
///     *armor += 5;
/// }
/// assert_eq!(golem.armor, 15);
/// assert!(table.slot(&mut golem, "armor").is_none());
/// ```
pub struct AttributeTable<T> {
    accessors: FxHashMap<&'static str, Accessor<T>>,
}

impl<T> AttributeTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accessors: FxHashMap::default(),
        }
    }

    /// Add an accessor (builder style).
    ///
    /// Panics if `name` is already registered.
    #[must_use]
    pub fn with(mut self, name: &'static str, accessor: Accessor<T>) -> Self {
        self.register(name, accessor);
        self
    }

    /// Register an accessor.
    ///
    /// Panics if `name` is already registered.
    pub fn register(&mut self, name: &'static str, accessor: Accessor<T>) {
        if self.accessors.contains_key(name) {
            panic!("Attribute {:?} already registered", name);
        }
        self.accessors.insert(name, accessor);
    }

    /// Resolve `name` against `target`.
    pub fn slot<'a>(&self, target: &'a mut T, name: &str) -> Option<AttributeSlot<'a>> {
        self.accessors.get(name).map(|accessor| accessor(target))
    }

    /// Check if an attribute name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.accessors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Check if no attributes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<T> Default for AttributeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AttributeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeTable")
            .field("names", &self.names())
            .finish()
    }
}
