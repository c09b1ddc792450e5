//! Drives expansion and placement across a whole design.

use symplace_eda::SymbolCatalog;
use symplace_netlist::Design;

use crate::document::SchematicDocument;
use crate::expand::expand;
use crate::place::Placer;
use crate::{LayoutError, MARGIN, ROW_PITCH};

/// Lay out every component of `design` onto a fresh schematic document.
///
/// Components occupy one grid column each, in design order. The column
/// advances whether or not a component produced any symbols, so component
/// ordinal and horizontal slot stay in lockstep. The vertical cursor
/// resets to the margin for every component.
///
/// The first failure aborts the run and propagates; a malformed or missing
/// symbol is never skipped silently.
pub fn layout(design: &Design, catalog: &SymbolCatalog) -> Result<SchematicDocument, LayoutError> {
    let mut document = SchematicDocument::new();
    let mut placer = Placer::new();
    let mut x = MARGIN;

    for (key, component) in design.components() {
        log::debug!("laying out {key} ({})", component.designator);
        let definitions = expand(component, catalog)?;
        if !definitions.is_empty() {
            placer.place(&definitions, (x, MARGIN), &mut document);
        }
        x += ROW_PITCH;
    }

    log::debug!(
        "layout complete: {} definitions, {} placed symbols",
        document.lib_symbols.len(),
        document.symbols.len()
    );
    Ok(document)
}
