//! Output document model.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use symplace_eda::{SymbolDefinition, SymbolRef};
use uuid::Uuid;

/// A 2-D position with a rotation angle, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// The placed realization of one unit of one symbol definition.
///
/// Created by the placement engine and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedSymbol {
    /// Unique identifier of this instance.
    pub uuid: Uuid,
    /// Identity of the owning definition in the document's library table.
    pub symbol: SymbolRef,
    /// Unit index within the definition.
    pub unit: u32,
    pub position: Position,
    /// Include in the bill of materials.
    pub in_bom: bool,
    /// Include in board placement.
    pub on_board: bool,
    /// Unique per-instance identifier for every pin number, gap-free from
    /// 1 through the definition's highest pin number.
    pub pins: BTreeMap<u32, Uuid>,
}

/// Completed schematic document: the distinct definitions in use plus all
/// placed instances.
///
/// Every placed symbol's definition appears in `lib_symbols` no later than
/// the first instance referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchematicDocument {
    pub uuid: Uuid,
    pub lib_symbols: Vec<Arc<SymbolDefinition>>,
    pub symbols: Vec<PlacedSymbol>,
}

impl SchematicDocument {
    /// Create an empty document with a fresh identifier.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            lib_symbols: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// Whether a definition with this identity is already in the library
    /// table.
    pub fn has_lib_symbol(&self, reference: &SymbolRef) -> bool {
        self.lib_symbols.iter().any(|d| d.reference == *reference)
    }

    /// Serialize the document to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SchematicDocument {
    fn default() -> Self {
        Self::new()
    }
}
