//! Editing session
//!
//! Orchestrates user-level operations over [`AppState`]:
//! - immediate edits commit and write through at once
//! - destructive edits (layout change, plate delete, reagent delete) park a
//!   [`PendingAction`] in the confirmation gate and run only when the
//!   returned token is confirmed

use crate::config::SessionConfig;
use crate::error::SessionError;
use lp_model::{IdGenerator, Plate, PlateId, PlateSize, Reagent, ReagentId, UuidGenerator, WellKey};
use lp_persist::{KeyValueStore, Persistence};
use lp_state::{
    seed_plates, seed_reagents, AppState, ChangeSet, ConfirmationGate, ConfirmationToken, Decision,
    FillSettings, LayoutConfig, PaintOutcome, PendingConfirmation, ReagentField, ReagentStore,
    Tool, WellAppearance,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const RESIZE_TITLE: &str = "Change Plate Layout";
const RESIZE_MESSAGE: &str =
    "Changing the plate layout will clear all wells on this plate. This cannot be undone.";
const DELETE_PLATE_TITLE: &str = "Delete Plate";
const DELETE_REAGENT_TITLE: &str = "Remove Reagent";
const DELETE_REAGENT_MESSAGE: &str =
    "Remove this reagent? Wells filled with it will remain colored but unlinked.";

/// Destructive edit waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Rename + change layout (clears wells)
    ResizePlate {
        /// Plate to edit
        plate_id: PlateId,
        /// New name
        name: String,
        /// New layout
        size: PlateSize,
    },
    /// Remove a plate
    DeletePlate {
        /// Plate to remove
        plate_id: PlateId,
    },
    /// Remove a reagent (wells keep their references)
    DeleteReagent {
        /// Reagent to remove
        reagent_id: ReagentId,
    },
}

/// Result of [`Session::edit_plate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Same layout: the rename was applied immediately
    Applied,
    /// Layout change parked in the gate
    NeedsConfirmation(ConfirmationToken),
    /// No plate with that id
    UnknownPlate,
}

/// Result of [`Session::delete_plate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deletion parked in the gate
    NeedsConfirmation(ConfirmationToken),
    /// It is the only plate; nothing happens
    Refused,
    /// No plate with that id
    UnknownPlate,
}

/// Result of resolving a confirmation token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Confirmed and executed
    Applied(ChangeSet),
    /// Confirmed, but no longer applicable (e.g. plate became the last one)
    Refused,
    /// Cancelled; nothing changed
    Cancelled,
    /// Token was superseded or already resolved
    Stale,
}

/// One user's editing session over a key-value store
pub struct Session<S: KeyValueStore> {
    state: AppState,
    gate: ConfirmationGate<PendingAction>,
    persistence: Persistence<S>,
    layout: LayoutConfig,
    ids: Box<dyn IdGenerator>,
    rng: StdRng,
}

impl<S: KeyValueStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("pending", &self.gate.pending())
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Load state from `store` with random ids and palette picks
    #[must_use]
    pub fn open(store: S, config: SessionConfig) -> Self {
        Self::open_with(store, config, Box::new(UuidGenerator::new()), StdRng::from_os_rng())
    }

    /// Load state from `store` with explicit id and color sources
    ///
    /// Each key falls back to its default independently (seed reagents, one
    /// 96-well seed plate, light theme, first plate active). Keys that fell
    /// back or were corrected are written back so storage matches memory.
    #[must_use]
    pub fn open_with(
        store: S,
        config: SessionConfig,
        mut ids: Box<dyn IdGenerator>,
        rng: StdRng,
    ) -> Self {
        let SessionConfig { layout, keys } = config;
        let persistence = Persistence::new(store, keys);
        let loaded = persistence.load();

        let mut repaired = ChangeSet::NONE;
        let reagents = loaded.reagents.unwrap_or_else(|| {
            repaired |= ChangeSet::REAGENTS;
            seeded_reagents(ids.as_mut())
        });
        let plates = loaded.plates.unwrap_or_else(|| {
            repaired |= ChangeSet::PLATES;
            seed_plates(ids.as_mut(), &layout)
        });
        let dark = loaded.dark.unwrap_or_else(|| {
            repaired |= ChangeSet::DARK;
            false
        });

        let fill = FillSettings::disabled(layout.default_fill_unit.clone());
        let state = AppState::new(reagents, plates, loaded.active_plate.clone(), dark, fill);
        if loaded.active_plate.as_ref() != Some(state.active_plate_id()) {
            repaired |= ChangeSet::ACTIVE_PLATE;
        }

        tracing::info!(
            reagents = state.reagents().len(),
            plates = state.plates().len(),
            active_plate = %state.active_plate_id(),
            "session opened"
        );

        let mut session = Self {
            state,
            gate: ConfirmationGate::new(),
            persistence,
            layout,
            ids,
            rng,
        };
        session.commit(repaired);
        session
    }

    /// Current application state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Open confirmation, if any
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<&PendingConfirmation<PendingAction>> {
        self.gate.pending()
    }

    /// Persistence adapter (for inspecting the backing store)
    #[inline]
    #[must_use]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Close the session, releasing the backing store
    #[inline]
    #[must_use]
    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }

    /// Layout configuration in use
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    // ---------------------------------------------------------------
    // Reagents
    // ---------------------------------------------------------------

    /// Add a placeholder reagent with a random palette color and make it the
    /// active tool
    ///
    /// # Errors
    /// Returns an error only if the id generator repeats an id
    pub fn add_reagent(&mut self) -> Result<ReagentId, SessionError> {
        let id = ReagentId::new(self.ids.next_id());
        let color = self.layout.pick_color(&mut self.rng);
        let reagent = Reagent::new(id.clone(), self.layout.reagent_placeholder.clone(), color);

        let changes = self.state.add_reagent(reagent)?;
        tracing::info!(reagent = %id, %color, "reagent added");
        self.commit(changes);
        Ok(id)
    }

    /// Edit a reagent's name or color; `false` if the id is unknown
    pub fn update_reagent(&mut self, id: &ReagentId, field: ReagentField) -> bool {
        let changes = self.state.update_reagent(id, field);
        self.commit(changes);
        !changes.is_empty()
    }

    /// Ask to remove a reagent; `None` if the id is unknown
    pub fn delete_reagent(&mut self, id: &ReagentId) -> Option<ConfirmationToken> {
        if !self.state.reagents().contains(id) {
            return None;
        }
        let action = PendingAction::DeleteReagent {
            reagent_id: id.clone(),
        };
        Some(self.gate.propose(DELETE_REAGENT_TITLE, DELETE_REAGENT_MESSAGE, action))
    }

    // ---------------------------------------------------------------
    // Plates
    // ---------------------------------------------------------------

    /// Create an empty plate and make it active
    ///
    /// A blank `name` becomes `"Plate {n+1}"`.
    ///
    /// # Errors
    /// Returns an error only if the id generator repeats an id
    pub fn create_plate(&mut self, name: &str, size: PlateSize) -> Result<PlateId, SessionError> {
        let name = match name.trim() {
            "" => self.layout.plate_name(self.state.plates().len() + 1),
            given => given.to_string(),
        };
        let id = PlateId::new(self.ids.next_id());
        let plate = Plate::new(id.clone(), name, size);

        let changes = self.state.add_plate(plate)?;
        tracing::info!(plate = %id, %size, "plate created");
        self.commit(changes);
        Ok(id)
    }

    /// Create a plate with the configured default size and a generated name
    ///
    /// # Errors
    /// Returns an error only if the id generator repeats an id
    pub fn create_default_plate(&mut self) -> Result<PlateId, SessionError> {
        let size = self.layout.default_plate_size;
        self.create_plate("", size)
    }

    /// Rename a plate and/or change its layout
    ///
    /// Keeping the size applies the rename at once. A different size would
    /// clear every well, so it is parked for confirmation instead. A blank
    /// `name` keeps the current name.
    ///
    /// # Errors
    /// Currently infallible; kept fallible for parity with other plate edits
    pub fn edit_plate(
        &mut self,
        id: &PlateId,
        name: &str,
        size: PlateSize,
    ) -> Result<EditOutcome, SessionError> {
        let Some(plate) = self.state.plates().get(id) else {
            return Ok(EditOutcome::UnknownPlate);
        };
        let name = match name.trim() {
            "" => plate.name().to_string(),
            given => given.to_string(),
        };

        if size == plate.size() {
            let changes = self.state.edit_plate(id, name, size)?;
            self.commit(changes);
            return Ok(EditOutcome::Applied);
        }

        let action = PendingAction::ResizePlate {
            plate_id: id.clone(),
            name,
            size,
        };
        let token = self.gate.propose(RESIZE_TITLE, RESIZE_MESSAGE, action);
        Ok(EditOutcome::NeedsConfirmation(token))
    }

    /// Ask to delete a plate
    ///
    /// The only remaining plate can never be deleted.
    pub fn delete_plate(&mut self, id: &PlateId) -> DeleteOutcome {
        let Some(plate) = self.state.plates().get(id) else {
            return DeleteOutcome::UnknownPlate;
        };
        if self.state.plates().len() == 1 {
            tracing::debug!(plate = %id, "refusing to delete the last plate");
            return DeleteOutcome::Refused;
        }
        let message = format!(
            "Delete \"{}\"? All well data on this plate will be lost.",
            plate.name()
        );
        let action = PendingAction::DeletePlate {
            plate_id: id.clone(),
        };
        DeleteOutcome::NeedsConfirmation(self.gate.propose(DELETE_PLATE_TITLE, message, action))
    }

    /// Make another plate active; `false` if the id is unknown
    pub fn select_plate(&mut self, id: &PlateId) -> bool {
        let changes = self.state.select_plate(id);
        self.commit(changes);
        self.state.active_plate_id() == id
    }

    // ---------------------------------------------------------------
    // Confirmation
    // ---------------------------------------------------------------

    /// Confirm or cancel a pending destructive edit
    pub fn resolve(&mut self, token: ConfirmationToken, accepted: bool) -> Resolution {
        match self.gate.resolve(token, accepted) {
            Decision::Execute(action) => self.execute(action),
            Decision::Cancelled(action) => {
                tracing::info!(%token, ?action, "confirmation cancelled");
                Resolution::Cancelled
            }
            Decision::Stale => {
                tracing::debug!(%token, "stale confirmation token");
                Resolution::Stale
            }
        }
    }

    /// Shorthand for `resolve(token, true)`
    #[inline]
    pub fn confirm(&mut self, token: ConfirmationToken) -> Resolution {
        self.resolve(token, true)
    }

    /// Shorthand for `resolve(token, false)`
    #[inline]
    pub fn cancel(&mut self, token: ConfirmationToken) -> Resolution {
        self.resolve(token, false)
    }

    fn execute(&mut self, action: PendingAction) -> Resolution {
        let result = match &action {
            PendingAction::ResizePlate {
                plate_id,
                name,
                size,
            } => self.state.edit_plate(plate_id, name.clone(), *size),
            PendingAction::DeletePlate { plate_id } => self.state.remove_plate(plate_id),
            PendingAction::DeleteReagent { reagent_id } => {
                match self.state.remove_reagent(reagent_id) {
                    changes if changes.is_empty() => {
                        tracing::info!(reagent = %reagent_id, "reagent already removed");
                        return Resolution::Refused;
                    }
                    changes => Ok(changes),
                }
            }
        };

        match result {
            Ok(changes) => {
                tracing::info!(?action, "confirmed edit applied");
                self.commit(changes);
                Resolution::Applied(changes)
            }
            Err(e) => {
                tracing::info!(?action, reason = %e, "confirmed edit no longer applicable");
                Resolution::Refused
            }
        }
    }

    // ---------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------

    /// Apply the active tool to well `(row, col)` of the active plate
    ///
    /// # Errors
    /// Returns an error if the coordinates fall outside the active plate
    pub fn paint(&mut self, row: u16, col: u16) -> Result<PaintOutcome, SessionError> {
        let key = WellKey::new(row, col);
        let (outcome, changes) = self.state.paint(key)?;
        tracing::debug!(
            plate = %self.state.active_plate_id(),
            well = %key.label(),
            tool = %self.state.tool(),
            changed = outcome.changed(),
            "paint"
        );
        self.commit(changes);
        Ok(outcome)
    }

    /// Switch tool; `false` if it names an unknown reagent
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        let selected = self.state.select_tool(tool);
        tracing::debug!(tool = %self.state.tool(), selected, "tool selected");
        selected
    }

    /// Replace fill settings (not persisted)
    pub fn set_fill(&mut self, fill: FillSettings) {
        tracing::debug!(enabled = fill.enabled, value = %fill.value, unit = %fill.unit, "fill settings");
        self.state.set_fill(fill);
    }

    /// Appearance of well `(row, col)` on the active plate
    #[must_use]
    pub fn well_appearance(&self, row: u16, col: u16) -> WellAppearance<'_> {
        self.state.well_appearance(WellKey::new(row, col))
    }

    // ---------------------------------------------------------------
    // Theme
    // ---------------------------------------------------------------

    /// Set the theme flag
    pub fn set_dark(&mut self, dark: bool) {
        let changes = self.state.set_dark(dark);
        self.commit(changes);
    }

    /// Flip the theme flag, returning the new value
    pub fn toggle_theme(&mut self) -> bool {
        let dark = !self.state.is_dark();
        self.set_dark(dark);
        dark
    }

    /// Write through whatever `changes` names
    fn commit(&mut self, changes: ChangeSet) {
        if changes.is_empty() {
            return;
        }
        let failures = self.persistence.write_through(&self.state, changes);
        if !failures.is_empty() {
            tracing::warn!(failed = failures.len(), "some keys were not persisted");
        }
    }
}

fn seeded_reagents(ids: &mut dyn IdGenerator) -> ReagentStore {
    match ReagentStore::new(seed_reagents(ids)) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "seed reagents rejected; starting without reagents");
            ReagentStore::default()
        }
    }
}
