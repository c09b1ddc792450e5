//! Placement of expanded definitions into the output document.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use symplace_eda::{SymbolDefinition, SymbolRef};
use uuid::Uuid;

use crate::document::{PlacedSymbol, Position, SchematicDocument};
use crate::ROW_PITCH;

/// Assigns identities, unit indices, pin identifiers and grid positions to
/// expanded symbol definitions.
///
/// The placer owns the emission registry for one layout run: each distinct
/// definition is appended to the document's `lib_symbols` exactly once, no
/// matter how many components reuse it. Independent runs use independent
/// placers.
#[derive(Debug, Default)]
pub struct Placer {
    emitted: HashSet<SymbolRef>,
}

impl Placer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place every unit of every definition, in order, starting at
    /// `origin` and walking down one row pitch per unit, with one extra
    /// row of gap after each definition. Returns the final vertical
    /// cursor.
    pub fn place(
        &mut self,
        definitions: &[Arc<SymbolDefinition>],
        origin: (f64, f64),
        document: &mut SchematicDocument,
    ) -> f64 {
        let (x, mut y) = origin;

        for definition in definitions {
            if self.emitted.insert(definition.reference.clone()) {
                document.lib_symbols.push(Arc::clone(definition));
            }

            let max_pin_number = definition.max_pin_number();

            for unit in definition.units() {
                // An identifier for every number through the definition's
                // highest, not only the pins this unit carries: later net
                // assignment needs a stable target for each of them.
                let pins: BTreeMap<u32, Uuid> = (1..=max_pin_number)
                    .map(|number| (number, Uuid::new_v4()))
                    .collect();

                document.symbols.push(PlacedSymbol {
                    uuid: Uuid::new_v4(),
                    symbol: definition.reference.clone(),
                    unit: unit.index,
                    position: Position { x, y, angle: 0.0 },
                    in_bom: true,
                    on_board: true,
                    pins,
                });
                y += ROW_PITCH;
            }

            // Separating gap before the next definition.
            y += ROW_PITCH;
        }

        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symplace_eda::{SymbolPin, SymbolUnit};

    fn definition(entry: &str, units: Vec<SymbolUnit>) -> Arc<SymbolDefinition> {
        Arc::new(SymbolDefinition::new(
            SymbolRef::new("Connector_Generic", entry),
            units,
        ))
    }

    fn one_unit(pins: u32) -> Vec<SymbolUnit> {
        vec![SymbolUnit::new(
            1,
            (1..=pins)
                .map(|n| SymbolPin::new(n, format!("Pin_{n}")))
                .collect(),
        )]
    }

    #[test]
    fn shared_definition_is_emitted_once() {
        let def = definition("Conn_01x4", one_unit(4));
        let mut document = SchematicDocument::new();
        let mut placer = Placer::new();

        placer.place(&[Arc::clone(&def)], (0.0, 0.0), &mut document);
        placer.place(&[Arc::clone(&def)], (ROW_PITCH, 0.0), &mut document);

        assert_eq!(document.lib_symbols.len(), 1);
        assert_eq!(document.symbols.len(), 2);
        assert_ne!(document.symbols[0].uuid, document.symbols[1].uuid);
    }

    #[test]
    fn units_walk_down_one_row_pitch_apart() {
        let def = definition(
            "Conn_02x3",
            vec![
                SymbolUnit::new(1, vec![SymbolPin::new(1, "A"), SymbolPin::new(2, "B")]),
                SymbolUnit::new(2, vec![SymbolPin::new(3, "C")]),
            ],
        );
        let mut document = SchematicDocument::new();
        let mut placer = Placer::new();

        let cursor = placer.place(&[def], (12.7, 12.7), &mut document);

        assert_eq!(document.symbols.len(), 2);
        assert_eq!(document.symbols[0].position.y, 12.7);
        assert_eq!(document.symbols[1].position.y, 12.7 + ROW_PITCH);
        assert_eq!(document.symbols[0].unit, 1);
        assert_eq!(document.symbols[1].unit, 2);
        // Two unit rows plus the separating gap.
        assert_eq!(cursor, 12.7 + 3.0 * ROW_PITCH);
    }

    #[test]
    fn every_unit_gets_the_full_gap_free_pin_range() {
        // Pins split across units; both instances still cover 1..=3.
        let def = definition(
            "Conn_02x3",
            vec![
                SymbolUnit::new(1, vec![SymbolPin::new(1, "A"), SymbolPin::new(2, "B")]),
                SymbolUnit::new(2, vec![SymbolPin::new(3, "C")]),
            ],
        );
        let mut document = SchematicDocument::new();
        Placer::new().place(&[def], (0.0, 0.0), &mut document);

        for placed in &document.symbols {
            let numbers: Vec<u32> = placed.pins.keys().copied().collect();
            assert_eq!(numbers, vec![1, 2, 3]);

            let mut identifiers: Vec<&Uuid> = placed.pins.values().collect();
            identifiers.sort();
            identifiers.dedup();
            assert_eq!(identifiers.len(), 3, "pin identifiers must be unique");
        }
    }

    #[test]
    fn placed_instances_carry_inclusion_flags_and_zero_angle() {
        let def = definition("Conn_01x2", one_unit(2));
        let mut document = SchematicDocument::new();
        Placer::new().place(&[def], (0.0, 0.0), &mut document);

        let placed = &document.symbols[0];
        assert!(placed.in_bom);
        assert!(placed.on_board);
        assert_eq!(placed.position.angle, 0.0);
    }
}
