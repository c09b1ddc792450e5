//! Library and catalog containers with typed lookup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{CatalogError, SymbolDefinition, SymbolPin, SymbolRef, SymbolUnit};

/// Library that holds the generic one-column connector variants.
pub const CONNECTOR_LIBRARY: &str = "Connector_Generic";

/// Entry name of the generic one-column connector variant with `pins` pins.
pub fn connector_entry(pins: u32) -> String {
    format!("Conn_01x{pins}")
}

/// A symbol library: a named, ordered collection of definitions.
#[derive(Debug, Clone)]
pub struct SymbolLibrary {
    name: String,
    symbols: Vec<Arc<SymbolDefinition>>,
}

impl SymbolLibrary {
    /// Build a library from parsed definitions.
    ///
    /// Fails fast with [`CatalogError::AmbiguousDefinition`] if two
    /// definitions share an entry name, rather than silently letting one
    /// shadow the other.
    pub fn new(
        name: impl Into<String>,
        definitions: Vec<SymbolDefinition>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let mut seen = HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.reference.entry.clone()) {
                return Err(CatalogError::AmbiguousDefinition {
                    library: name,
                    entry: definition.reference.entry.clone(),
                });
            }
        }
        Ok(Self {
            name,
            symbols: definitions.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all symbols in the library.
    pub fn symbols(&self) -> &[Arc<SymbolDefinition>] {
        &self.symbols
    }

    /// Get a symbol by entry name.
    pub fn get_symbol(&self, entry: &str) -> Option<&Arc<SymbolDefinition>> {
        self.symbols.iter().find(|s| s.reference.entry == entry)
    }

    /// Get the names of all symbols in the library.
    pub fn symbol_names(&self) -> Vec<&str> {
        self.symbols
            .iter()
            .map(|s| s.reference.entry.as_str())
            .collect()
    }
}

/// Read-only mapping from library name to loaded [`SymbolLibrary`].
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    libraries: HashMap<String, SymbolLibrary>,
}

impl SymbolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a library and return a mutable reference for
    /// chaining.
    pub fn add_library(&mut self, library: SymbolLibrary) -> &mut Self {
        self.libraries.insert(library.name().to_string(), library);
        self
    }

    /// Builder-style library insertion that consumes `self`.
    pub fn with_library(mut self, library: SymbolLibrary) -> Self {
        self.add_library(library);
        self
    }

    pub fn library(&self, name: &str) -> Option<&SymbolLibrary> {
        self.libraries.get(name)
    }

    /// Look up a definition by its typed reference.
    ///
    /// Fails with [`CatalogError::SymbolNotFound`] if either the library or
    /// the entry is absent.
    pub fn get(&self, reference: &SymbolRef) -> Result<Arc<SymbolDefinition>, CatalogError> {
        self.libraries
            .get(&reference.library)
            .and_then(|lib| lib.get_symbol(&reference.entry))
            .cloned()
            .ok_or_else(|| CatalogError::SymbolNotFound(reference.clone()))
    }
}

/// Fabricate a `Connector_Generic` library holding the one-column variants
/// with the given pin counts.
///
/// Each variant is a single-unit symbol with pins numbered `1..=n`, the
/// shape an installed symbol library provides for generic connectors.
pub fn generic_connector_library(pin_counts: &[u32]) -> Result<SymbolLibrary, CatalogError> {
    let definitions = pin_counts
        .iter()
        .map(|&count| {
            let pins = (1..=count)
                .map(|number| SymbolPin::new(number, format!("Pin_{number}")))
                .collect();
            SymbolDefinition::new(
                SymbolRef::new(CONNECTOR_LIBRARY, connector_entry(count)),
                vec![SymbolUnit::new(1, pins)],
            )
        })
        .collect();
    SymbolLibrary::new(CONNECTOR_LIBRARY, definitions)
}
