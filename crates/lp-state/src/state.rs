//! Application state
//!
//! One owned struct holding everything the user edits. Each mutation commits
//! fully before returning and reports what it touched as a [`ChangeSet`].

use crate::change::ChangeSet;
use crate::error::StateError;
use crate::painter::{paint_well, well_appearance, FillSettings, PaintOutcome, Tool, WellAppearance};
use crate::plates::PlateStore;
use crate::reagents::{ReagentField, ReagentStore};
use lp_model::{Plate, PlateId, PlateSize, Reagent, ReagentId, WellKey};

/// Reagents, plates, active plate/tool, fill settings and theme
///
/// # Invariants
/// - `active_plate` always names a plate in `plates`
/// - `tool` is the eraser or names a reagent in `reagents`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    reagents: ReagentStore,
    plates: PlateStore,
    active_plate: PlateId,
    tool: Tool,
    fill: FillSettings,
    dark: bool,
}

impl AppState {
    /// Assemble state from loaded or seeded parts
    ///
    /// An `active_plate` that does not name a plate falls back to the first
    /// plate. The tool starts on the first reagent, or the eraser if there
    /// are none.
    #[must_use]
    pub fn new(
        reagents: ReagentStore,
        plates: PlateStore,
        active_plate: Option<PlateId>,
        dark: bool,
        fill: FillSettings,
    ) -> Self {
        let active_plate = active_plate
            .filter(|id| plates.contains(id))
            .unwrap_or_else(|| plates.first().id().clone());
        let tool = reagents
            .iter()
            .next()
            .map_or(Tool::Eraser, |r| Tool::Reagent(r.id.clone()));
        Self {
            reagents,
            plates,
            active_plate,
            tool,
            fill,
            dark,
        }
    }

    /// Reagent store
    #[inline]
    #[must_use]
    pub fn reagents(&self) -> &ReagentStore {
        &self.reagents
    }

    /// Plate store
    #[inline]
    #[must_use]
    pub fn plates(&self) -> &PlateStore {
        &self.plates
    }

    /// Id of the plate being edited
    #[inline]
    #[must_use]
    pub fn active_plate_id(&self) -> &PlateId {
        &self.active_plate
    }

    /// The plate being edited
    #[must_use]
    pub fn active_plate(&self) -> &Plate {
        self.plates
            .get(&self.active_plate)
            .unwrap_or_else(|| self.plates.first())
    }

    /// Active paint tool
    #[inline]
    #[must_use]
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Current fill settings
    #[inline]
    #[must_use]
    pub fn fill(&self) -> &FillSettings {
        &self.fill
    }

    /// Theme flag
    #[inline]
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Append a reagent and make it the active tool
    ///
    /// # Errors
    /// Returns a duplicate-id error if the reagent id is taken
    pub fn add_reagent(&mut self, reagent: Reagent) -> Result<ChangeSet, StateError> {
        let id = reagent.id.clone();
        self.reagents.push(reagent)?;
        self.tool = Tool::Reagent(id);
        Ok(ChangeSet::REAGENTS)
    }

    /// Edit a reagent's name or color (no-op for unknown ids)
    pub fn update_reagent(&mut self, id: &ReagentId, field: ReagentField) -> ChangeSet {
        ChangeSet::when(self.reagents.update(id, field), ChangeSet::REAGENTS)
    }

    /// Remove a reagent
    ///
    /// Wells referencing it keep their data. If it was the active tool, the
    /// tool falls back to the eraser.
    pub fn remove_reagent(&mut self, id: &ReagentId) -> ChangeSet {
        if self.reagents.remove(id).is_none() {
            return ChangeSet::NONE;
        }
        if self.tool.is_reagent(id) {
            self.tool = Tool::Eraser;
        }
        ChangeSet::REAGENTS
    }

    /// Append a plate and make it active
    ///
    /// # Errors
    /// Returns a duplicate-id error if the plate id is taken
    pub fn add_plate(&mut self, plate: Plate) -> Result<ChangeSet, StateError> {
        let id = plate.id().clone();
        self.plates.push(plate)?;
        self.active_plate = id;
        Ok(ChangeSet::PLATES | ChangeSet::ACTIVE_PLATE)
    }

    /// Rename a plate and apply a layout
    ///
    /// A different `size` clears the plate's wells; the same size leaves
    /// them untouched.
    ///
    /// # Errors
    /// Returns [`StateError::UnknownPlate`] if the id is absent
    pub fn edit_plate(
        &mut self,
        id: &PlateId,
        name: impl Into<String>,
        size: PlateSize,
    ) -> Result<ChangeSet, StateError> {
        let plate = self
            .plates
            .get_mut(id)
            .ok_or_else(|| StateError::UnknownPlate(id.clone()))?;
        let name = name.into();
        let renamed = plate.name() != name;
        plate.rename(name);
        let cleared = plate.resize(size);
        Ok(ChangeSet::when(renamed || cleared, ChangeSet::PLATES))
    }

    /// Remove a plate; the first remaining plate becomes active
    ///
    /// # Errors
    /// - [`StateError::LastPlate`] when it is the only plate (nothing changes)
    /// - [`StateError::UnknownPlate`] if the id is absent
    pub fn remove_plate(&mut self, id: &PlateId) -> Result<ChangeSet, StateError> {
        self.plates.remove(id)?;
        let first = self.plates.first().id().clone();
        let moved = first != self.active_plate;
        self.active_plate = first;
        Ok(ChangeSet::PLATES | ChangeSet::when(moved, ChangeSet::ACTIVE_PLATE))
    }

    /// Apply the active tool to one well of the active plate
    ///
    /// # Errors
    /// Returns an out-of-bounds error if `key` does not fit the active plate
    pub fn paint(&mut self, key: WellKey) -> Result<(PaintOutcome, ChangeSet), StateError> {
        let plate = self
            .plates
            .get_mut(&self.active_plate)
            .ok_or_else(|| StateError::UnknownPlate(self.active_plate.clone()))?;
        let outcome = paint_well(plate, key, &self.tool, &self.fill)?;
        let changes = ChangeSet::when(outcome.changed(), ChangeSet::PLATES);
        Ok((outcome, changes))
    }

    /// Switch tool; a reagent tool must name an existing reagent
    ///
    /// Returns `false` (and keeps the current tool) otherwise.
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        if let Tool::Reagent(id) = &tool {
            if !self.reagents.contains(id) {
                return false;
            }
        }
        self.tool = tool;
        true
    }

    /// Replace fill settings
    pub fn set_fill(&mut self, fill: FillSettings) {
        self.fill = fill;
    }

    /// Make another plate active (no-op for unknown ids)
    pub fn select_plate(&mut self, id: &PlateId) -> ChangeSet {
        if !self.plates.contains(id) || &self.active_plate == id {
            return ChangeSet::NONE;
        }
        self.active_plate = id.clone();
        ChangeSet::ACTIVE_PLATE
    }

    /// Set the theme flag
    pub fn set_dark(&mut self, dark: bool) -> ChangeSet {
        let changed = self.dark != dark;
        self.dark = dark;
        ChangeSet::when(changed, ChangeSet::DARK)
    }

    /// Appearance of one well of the active plate
    #[must_use]
    pub fn well_appearance(&self, key: WellKey) -> WellAppearance<'_> {
        well_appearance(self.active_plate().well(key), &self.reagents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_model::{HexColor, WellData};
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let reagents = ReagentStore::new(vec![
            Reagent::new(ReagentId::new("a"), "Compound A", HexColor::from_rgb(0x3b, 0x82, 0xf6)),
            Reagent::new(ReagentId::new("b"), "Compound B", HexColor::from_rgb(0xef, 0x44, 0x44)),
        ])
        .unwrap();
        let plates = PlateStore::new(vec![
            Plate::new(PlateId::new("p1"), "Plate 1", PlateSize::Wells96),
            Plate::new(PlateId::new("p2"), "Plate 2", PlateSize::Wells24),
        ])
        .unwrap();
        AppState::new(reagents, plates, Some(PlateId::new("p2")), false, FillSettings::default())
    }

    #[test]
    fn dangling_active_plate_falls_back_to_first() {
        let s = state();
        let rebuilt = AppState::new(
            s.reagents().clone(),
            s.plates().clone(),
            Some(PlateId::new("missing")),
            false,
            FillSettings::default(),
        );
        assert_eq!(rebuilt.active_plate_id(), &PlateId::new("p1"));
        assert_eq!(rebuilt.tool(), &Tool::Reagent(ReagentId::new("a")));
    }

    #[test]
    fn paint_touches_only_active_plate() {
        let mut s = state();
        let before = s.plates().get(&PlateId::new("p1")).unwrap().clone();

        let (_, changes) = s.paint(WellKey::new(0, 0)).unwrap();
        assert_eq!(changes, ChangeSet::PLATES);

        assert_eq!(s.plates().get(&PlateId::new("p1")).unwrap(), &before);
        assert_eq!(
            s.active_plate().well(WellKey::new(0, 0)),
            Some(&WellData::new(ReagentId::new("a"), None))
        );
    }

    #[test]
    fn removing_active_reagent_resets_tool_but_not_wells() {
        let mut s = state();
        assert!(s.select_tool(Tool::Reagent(ReagentId::new("b"))));
        s.set_fill(FillSettings::enabled("50", "µM"));
        s.paint(WellKey::new(1, 1)).unwrap();
        let before = s.active_plate().well(WellKey::new(1, 1)).cloned();

        assert_eq!(s.remove_reagent(&ReagentId::new("b")), ChangeSet::REAGENTS);
        assert_eq!(s.tool(), &Tool::Eraser);
        assert_eq!(s.active_plate().well(WellKey::new(1, 1)).cloned(), before);
        assert_eq!(
            before,
            Some(WellData::new(
                ReagentId::new("b"),
                Some(lp_model::Concentration::new("50", "µM"))
            ))
        );
        assert!(s.well_appearance(WellKey::new(1, 1)).is_empty());
    }

    #[test]
    fn removing_other_reagent_keeps_tool() {
        let mut s = state();
        let _ = s.remove_reagent(&ReagentId::new("b"));
        assert_eq!(s.tool(), &Tool::Reagent(ReagentId::new("a")));
        assert_eq!(s.remove_reagent(&ReagentId::new("b")), ChangeSet::NONE);
    }

    #[test]
    fn select_tool_rejects_unknown_reagent() {
        let mut s = state();
        assert!(!s.select_tool(Tool::Reagent(ReagentId::new("nope"))));
        assert!(s.select_tool(Tool::Eraser));
        assert!(s.tool().is_eraser());
    }

    #[test]
    fn remove_plate_activates_first_remaining() {
        let mut s = state();
        let changes = s.remove_plate(&PlateId::new("p1")).unwrap();
        assert!(changes.plates && !changes.active_plate);
        assert_eq!(s.active_plate_id(), &PlateId::new("p2"));

        assert_eq!(
            s.remove_plate(&PlateId::new("p2")),
            Err(StateError::LastPlate(PlateId::new("p2")))
        );
        assert_eq!(s.plates().len(), 1);
    }

    #[test]
    fn edit_plate_same_size_keeps_wells() {
        let mut s = state();
        s.paint(WellKey::new(0, 0)).unwrap();
        let changes = s.edit_plate(&PlateId::new("p2"), "Renamed", PlateSize::Wells24).unwrap();
        assert_eq!(changes, ChangeSet::PLATES);
        assert_eq!(s.active_plate().name(), "Renamed");
        assert_eq!(s.active_plate().filled_count(), 1);

        let changes = s.edit_plate(&PlateId::new("p2"), "Renamed", PlateSize::Wells48).unwrap();
        assert_eq!(changes, ChangeSet::PLATES);
        assert_eq!(s.active_plate().filled_count(), 0);
    }

    #[test]
    fn theme_and_selection_report_changes() {
        let mut s = state();
        assert_eq!(s.set_dark(true), ChangeSet::DARK);
        assert_eq!(s.set_dark(true), ChangeSet::NONE);
        assert_eq!(s.select_plate(&PlateId::new("p1")), ChangeSet::ACTIVE_PLATE);
        assert_eq!(s.select_plate(&PlateId::new("p1")), ChangeSet::NONE);
        assert_eq!(s.select_plate(&PlateId::new("zz")), ChangeSet::NONE);
    }
}
