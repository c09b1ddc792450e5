//! Design description model for schematic generation.
//!
//! This crate holds the *input* side of the pipeline: the set of logical
//! components a netlist reader produced, keyed by a stable component key.
//! It is a read-only representation once built – the structures are
//! serialisable using `serde` so that they can be stored or transferred as
//! JSON.
//!
//! The central structure is [`Design`], an insertion-ordered mapping from
//! component key to [`LogicalComponent`]. Iteration order is the order the
//! components were added in, which downstream layout relies on for its
//! deterministic grid.

use serde::{Deserialize, Serialize};

/// Helper type alias – component keys are plain UTF-8 strings.
pub type ComponentKey = String;

/// One physical component of the input design.
///
/// Immutable once constructed; the design owns one instance per physical
/// component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogicalComponent {
    /// Reference designator, e.g. `"J12"`.
    pub designator: String,
    /// Package specification, a free-text field encoding a pin count,
    /// e.g. `"CONN_64"`.
    pub package: String,
    /// Human-readable component name.
    pub name: String,
}

impl LogicalComponent {
    pub fn new(
        designator: impl Into<String>,
        package: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            designator: designator.into(),
            package: package.into(),
            name: name.into(),
        }
    }
}

/// Complete design description: an ordered component map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Design {
    components: Vec<(ComponentKey, LogicalComponent)>,
}

impl Design {
    /// Create an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a new design using the fluent [`DesignBuilder`].
    pub fn builder() -> DesignBuilder {
        DesignBuilder::default()
    }

    /// Insert (or replace) a component and return a mutable reference for
    /// chaining. Replacing an existing key keeps its original position.
    pub fn add_component(
        &mut self,
        key: impl Into<ComponentKey>,
        component: LogicalComponent,
    ) -> &mut Self {
        let key = key.into();
        match self.components.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = component,
            None => self.components.push((key, component)),
        }
        self
    }

    /// Look up a component by key.
    pub fn get(&self, key: &str) -> Option<&LogicalComponent> {
        self.components
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c)
    }

    /// Iterate components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &LogicalComponent)> {
        self.components.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Serialize the design to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Fluent builder for constructing [`Design`] structures.
///
/// Example:
/// ```rust
/// use symplace_netlist::{Design, LogicalComponent};
/// let mut builder = Design::builder();
/// builder.add_component("J1", LogicalComponent::new("J1", "CONN_64", "J1"));
/// let design = builder.build();
/// assert_eq!(design.len(), 1);
/// ```
#[derive(Default)]
pub struct DesignBuilder {
    design: Design,
}

impl DesignBuilder {
    /// Create a fresh builder with an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a [`LogicalComponent`] record.
    pub fn add_component(
        &mut self,
        key: impl Into<ComponentKey>,
        component: LogicalComponent,
    ) -> &mut Self {
        self.design.add_component(key, component);
        self
    }

    /// Finish building and return the [`Design`].
    pub fn build(self) -> Design {
        self.design
    }
}

impl From<DesignBuilder> for Design {
    fn from(builder: DesignBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_iterate_in_insertion_order() {
        let mut design = Design::new();
        design.add_component("J2", LogicalComponent::new("J2", "CONN_4", "J2"));
        design.add_component("J1", LogicalComponent::new("J1", "CONN_64", "J1"));
        design.add_component("U3", LogicalComponent::new("U3", "IC_8", "U3"));

        let keys: Vec<&str> = design.components().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["J2", "J1", "U3"]);
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let mut design = Design::new();
        design.add_component("J1", LogicalComponent::new("J1", "CONN_4", "J1"));
        design.add_component("J2", LogicalComponent::new("J2", "CONN_8", "J2"));
        design.add_component("J1", LogicalComponent::new("J1", "CONN_64", "J1"));

        let keys: Vec<&str> = design.components().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["J1", "J2"]);
        assert_eq!(design.get("J1").map(|c| c.package.as_str()), Some("CONN_64"));
    }

    #[test]
    fn design_json_roundtrip() {
        let mut design = Design::new();
        design.add_component("J1", LogicalComponent::new("J1", "CONN_64", "J1"));

        let json = design.to_json().expect("serializes");
        let restored: Design = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get("J1"), design.get("J1"));
    }
}
