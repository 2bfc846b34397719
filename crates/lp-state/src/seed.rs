//! Built-in starting content for a fresh (or unreadable) workspace

use crate::config::LayoutConfig;
use crate::plates::PlateStore;
use lp_model::{HexColor, IdGenerator, PlateId, PlateSize, Reagent, ReagentId};

/// Two starter reagents
pub fn seed_reagents(ids: &mut dyn IdGenerator) -> Vec<Reagent> {
    vec![
        Reagent::new(
            ReagentId::new(ids.next_id()),
            "Compound A",
            HexColor::from_rgb(0x3b, 0x82, 0xf6),
        ),
        Reagent::new(
            ReagentId::new(ids.next_id()),
            "Compound B",
            HexColor::from_rgb(0xef, 0x44, 0x44),
        ),
    ]
}

/// One empty 96-well plate
pub fn seed_plates(ids: &mut dyn IdGenerator, config: &LayoutConfig) -> PlateStore {
    PlateStore::with_blank_plate(
        PlateId::new(ids.next_id()),
        config.plate_name(1),
        PlateSize::Wells96,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_model::SequentialIds;

    #[test]
    fn seeds_are_distinct_and_empty() {
        let mut ids = SequentialIds::new("seed");
        let reagents = seed_reagents(&mut ids);
        let plates = seed_plates(&mut ids, &LayoutConfig::default());

        assert_eq!(reagents.len(), 2);
        assert_ne!(reagents[0].id, reagents[1].id);
        assert_eq!(plates.len(), 1);
        assert_eq!(plates.first().name(), "Plate 1");
        assert_eq!(plates.first().size(), PlateSize::Wells96);
        assert!(plates.first().wells().is_empty());
    }
}
