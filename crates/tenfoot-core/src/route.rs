//! Static route table.
//!
//! Maps stable route keys (e.g. `"#/home"`) to screen ids. Populated during
//! registration and never mutated at runtime by the core.

use std::collections::HashMap;

use crate::screen::ScreenId;

/// Mapping from route key to screen id.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, ScreenId>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `screen`, replacing any previous mapping.
    pub fn insert(&mut self, key: impl Into<String>, screen: ScreenId) {
        self.routes.insert(key.into(), screen);
    }

    /// Resolve a route key. `None` for unmapped keys.
    pub fn resolve(&self, key: &str) -> Option<ScreenId> {
        self.routes.get(key).copied()
    }

    /// Number of mapped routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are mapped.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown_keys() {
        let mut table = RouteTable::new();
        table.insert("#/home", ScreenId("home"));

        assert_eq!(table.resolve("#/home"), Some(ScreenId("home")));
        assert_eq!(table.resolve("#/unknown"), None);
    }

    #[test]
    fn insert_replaces_existing_mapping() {
        let mut table = RouteTable::new();
        table.insert("#/a", ScreenId("first"));
        table.insert("#/a", ScreenId("second"));

        assert_eq!(table.resolve("#/a"), Some(ScreenId("second")));
        assert_eq!(table.len(), 1);
    }
}
