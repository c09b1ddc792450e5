//! Symbol expansion and grid placement.
//!
//! This crate turns a [`symplace_netlist::Design`] into a
//! [`SchematicDocument`] of placed symbol instances:
//!
//! * [`expand`] maps one logical component to the symbol definitions it
//!   needs, splitting connectors that exceed the per-symbol pin capacity.
//! * [`Placer`] assigns identities, unit indices, pin identifiers and grid
//!   positions, deduplicating definitions into the document's library
//!   table.
//! * [`layout`] drives both across the whole design, one grid column per
//!   component.
//!
//! The walk is a pure, deterministic fold over the design's component
//! order; no component's placement depends on another's outcome.

pub mod document;
pub mod expand;
pub mod layout;
pub mod place;

pub use document::{PlacedSymbol, Position, SchematicDocument};
pub use expand::expand;
pub use layout::layout;
pub use place::Placer;

use symplace_eda::CatalogError;

/// Schematic grid unit in layout units.
pub const GRID_UNIT: f64 = 1.27;

/// Pitch between placed rows and between component columns.
pub const ROW_PITCH: f64 = 150.0 * GRID_UNIT;

/// Offset from the sheet origin to the first placement slot.
pub const MARGIN: f64 = 10.0 * GRID_UNIT;

/// Maximum number of pins a single connector symbol can carry.
pub const MAX_PINS_PER_SYMBOL: u32 = 60;

/// Errors that can occur while laying out a design.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("component {designator}: no pin count in package spec {package:?}")]
    MalformedPackageSpec {
        designator: String,
        package: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
