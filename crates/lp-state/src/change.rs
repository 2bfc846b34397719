//! Change tracking for write-through persistence

use std::ops::{BitOr, BitOrAssign};

/// Persisted slices touched by a committed mutation
///
/// An empty set means nothing observable changed and no write is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct ChangeSet {
    /// Reagent list changed
    pub reagents: bool,
    /// Plate list (or any plate's wells) changed
    pub plates: bool,
    /// Theme flag changed
    pub dark: bool,
    /// Active plate id changed
    pub active_plate: bool,
}

impl ChangeSet {
    /// Nothing changed
    pub const NONE: Self = Self {
        reagents: false,
        plates: false,
        dark: false,
        active_plate: false,
    };

    /// Only the reagent list changed
    pub const REAGENTS: Self = Self { reagents: true, ..Self::NONE };

    /// Only the plate list changed
    pub const PLATES: Self = Self { plates: true, ..Self::NONE };

    /// Only the theme flag changed
    pub const DARK: Self = Self { dark: true, ..Self::NONE };

    /// Only the active plate id changed
    pub const ACTIVE_PLATE: Self = Self { active_plate: true, ..Self::NONE };

    /// Check whether nothing changed
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.reagents || self.plates || self.dark || self.active_plate)
    }

    /// `set` if `cond`, otherwise nothing
    #[inline]
    pub const fn when(cond: bool, set: Self) -> Self {
        if cond {
            set
        } else {
            Self::NONE
        }
    }
}

impl BitOr for ChangeSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            reagents: self.reagents || rhs.reagents,
            plates: self.plates || rhs.plates,
            dark: self.dark || rhs.dark,
            active_plate: self.active_plate || rhs.active_plate,
        }
    }
}

impl BitOrAssign for ChangeSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
