//! Symbol catalog model for schematic generation.
//!
//! A [`SymbolCatalog`] is a read-only, fully loaded mapping from library
//! name to [`SymbolLibrary`]. Consumers look definitions up by a typed
//! [`SymbolRef`] (library × entry) and receive a shared
//! `Arc<SymbolDefinition>`, so the output document references definitions
//! rather than copying them.
//!
//! Loading library files from disk is a concern of the surrounding
//! application; this crate only models the already-parsed contents.

pub mod catalog;

pub use catalog::{
    connector_entry, generic_connector_library, SymbolCatalog, SymbolLibrary, CONNECTOR_LIBRARY,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors surfaced by catalog construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("symbol {0} not found in catalog")]
    SymbolNotFound(SymbolRef),

    #[error("library {library:?} declares symbol {entry:?} more than once")]
    AmbiguousDefinition { library: String, entry: String },
}

/// Typed identity of a symbol definition: library name plus entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRef {
    pub library: String,
    pub entry: String,
}

impl SymbolRef {
    pub fn new(library: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            entry: entry.into(),
        }
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.library, self.entry)
    }
}

/// One pin of a symbol unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPin {
    pub number: u32,
    pub name: String,
}

impl SymbolPin {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// One sub-part of a (possibly multi-unit) symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolUnit {
    pub index: u32,
    pub pins: Vec<SymbolPin>,
}

impl SymbolUnit {
    pub fn new(index: u32, pins: Vec<SymbolPin>) -> Self {
        Self { index, pins }
    }
}

/// A parsed symbol definition.
///
/// Pin numbers are globally unique across a definition's units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    pub reference: SymbolRef,
    pub units: Vec<SymbolUnit>,
}

impl SymbolDefinition {
    pub fn new(reference: SymbolRef, units: Vec<SymbolUnit>) -> Self {
        Self { reference, units }
    }

    pub fn units(&self) -> &[SymbolUnit] {
        &self.units
    }

    /// Highest unit index across the definition's units.
    ///
    /// Placement instantiates each declared unit directly, so this is for
    /// catalog consumers that size unit tables up front.
    pub fn max_unit_index(&self) -> u32 {
        self.units.iter().map(|u| u.index).max().unwrap_or(0)
    }

    /// Highest pin number across all of the definition's units.
    pub fn max_pin_number(&self) -> u32 {
        self.units
            .iter()
            .flat_map(|u| u.pins.iter())
            .map(|p| p.number)
            .max()
            .unwrap_or(0)
    }
}
