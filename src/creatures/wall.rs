use std::sync::LazyLock;

use crate::spells::{AttributeSlot, AttributeTable, Attributes};

static WALL_ATTRIBUTES: LazyLock<AttributeTable<Wall>> = LazyLock::new(|| {
    AttributeTable::<Wall>::new().with("Durability", |w| AttributeSlot::Int(&mut w.durability))
});

/// A wall. Has durability, not health.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wall {
    pub durability: i64,
}

impl Wall {
    /// Create a new wall.
    #[must_use]
    pub const fn new(durability: i64) -> Self {
        Self { durability }
    }
}

impl Attributes for Wall {
    fn attribute(&mut self, name: &str) -> Option<AttributeSlot<'_>> {
        WALL_ATTRIBUTES.slot(self, name)
    }

    fn attribute_names(&self) -> Vec<&'static str> {
        WALL_ATTRIBUTES.names()
    }
}
