//! Component-to-symbol expansion.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use symplace_eda::{
    connector_entry, SymbolCatalog, SymbolDefinition, SymbolRef, CONNECTOR_LIBRARY,
};
use symplace_netlist::LogicalComponent;

use crate::{LayoutError, MAX_PINS_PER_SYMBOL};

static PIN_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Resolve one logical component to the ordered symbol definitions it
/// needs.
///
/// Connector-class components (`J` designator, `CONN` package) are split
/// across as many generic connector variants as their pin count requires:
/// full-capacity variants followed by one sized to the remainder. A pin
/// count that is an exact multiple of the capacity gets the full-capacity
/// variant for its last symbol, never a zero-pin one.
///
/// IC-class components (`U` designator) are resolved against their own
/// part libraries elsewhere and yield an empty sequence here, as does any
/// designator/package combination without an expansion rule.
pub fn expand(
    component: &LogicalComponent,
    catalog: &SymbolCatalog,
) -> Result<Vec<Arc<SymbolDefinition>>, LayoutError> {
    if component.designator.starts_with('U') {
        return Ok(Vec::new());
    }

    if !(component.designator.starts_with('J') && component.package.contains("CONN")) {
        log::debug!(
            "component {} ({}): no expansion rule",
            component.designator,
            component.package
        );
        return Ok(Vec::new());
    }

    let pin_count = parse_pin_count(component)?;
    let symbols_needed = pin_count.div_ceil(MAX_PINS_PER_SYMBOL);
    let remainder = pin_count % MAX_PINS_PER_SYMBOL;
    log::debug!(
        "component {}: {pin_count} pins across {symbols_needed} connector symbols",
        component.designator
    );

    let mut definitions = Vec::with_capacity(symbols_needed as usize);
    for ordinal in 0..symbols_needed {
        let is_last = ordinal + 1 == symbols_needed;
        let pins = if is_last && remainder != 0 {
            remainder
        } else {
            MAX_PINS_PER_SYMBOL
        };
        let reference = SymbolRef::new(CONNECTOR_LIBRARY, connector_entry(pins));
        definitions.push(catalog.get(&reference)?);
    }

    Ok(definitions)
}

/// Parse the required pin count out of the package specification: the
/// first run of decimal digits.
fn parse_pin_count(component: &LogicalComponent) -> Result<u32, LayoutError> {
    PIN_COUNT
        .find(&component.package)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| LayoutError::MalformedPackageSpec {
            designator: component.designator.clone(),
            package: component.package.clone(),
        })
}
