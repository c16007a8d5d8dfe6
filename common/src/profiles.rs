//! Environment profiles.
//!
//! A profile is a fixed set of climate targets (VPD, temperature band, base
//! humidity). The node ships five of them, `P1` to `P5`, and exactly one is
//! active at a time. The catalog is built from `(id, settings)` pairs and
//! checked on construction, so the table can be reordered freely without
//! breaking lookups.

use core::fmt;

use heapless::String;

// =============================================================================
// Profile Identifiers
// =============================================================================

/// Profile identifier, ordered `P1 < P2 < ... < P5`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileId {
    #[default]
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl ProfileId {
    /// Number of profiles.
    pub const COUNT: usize = 5;

    /// All profiles in declaration order (also the on-screen pill order).
    pub const ALL: [Self; Self::COUNT] = [Self::P1, Self::P2, Self::P3, Self::P4, Self::P5];

    /// Zero-based ordinal.
    pub const fn index(self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
            Self::P3 => 2,
            Self::P4 => 3,
            Self::P5 => 4,
        }
    }

    /// Profile for a zero-based ordinal, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Short label, `"P"` followed by the one-based ordinal.
    ///
    /// The ordinal is written as a single ASCII digit, so labels are only
    /// meaningful while there are at most nine profiles.
    pub fn label(self) -> String<2> {
        let mut label = String::new();
        label.push('P').ok();
        label.push(char::from(b'1' + self.index() as u8)).ok();
        label
    }
}

// =============================================================================
// Profile Settings
// =============================================================================

/// Climate targets for one profile.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileSettings {
    /// Target vapor-pressure deficit in kPa.
    pub target_vpd_kpa: f32,
    /// Lower bound of the temperature band in °C.
    pub min_temp_c: f32,
    /// Upper bound of the temperature band in °C.
    pub max_temp_c: f32,
    /// Baseline relative humidity in %.
    pub base_humidity_percent: f32,
}

impl ProfileSettings {
    pub const fn new(
        target_vpd_kpa: f32,
        min_temp_c: f32,
        max_temp_c: f32,
        base_humidity_percent: f32,
    ) -> Self {
        Self {
            target_vpd_kpa,
            min_temp_c,
            max_temp_c,
            base_humidity_percent,
        }
    }

    const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Built-in profile table.
///
/// P1 is the gentle starting climate; P2 to P5 share a 22-26 °C band and step
/// VPD up while lowering humidity.
pub const BUILTIN_PROFILES: [(ProfileId, ProfileSettings); ProfileId::COUNT] = [
    (ProfileId::P1, ProfileSettings::new(0.8, 20.0, 24.0, 70.0)),
    (ProfileId::P2, ProfileSettings::new(1.0, 22.0, 26.0, 65.0)),
    (ProfileId::P3, ProfileSettings::new(1.2, 22.0, 26.0, 60.0)),
    (ProfileId::P4, ProfileSettings::new(1.3, 22.0, 26.0, 55.0)),
    (ProfileId::P5, ProfileSettings::new(1.5, 22.0, 26.0, 50.0)),
];

// =============================================================================
// Catalog
// =============================================================================

/// Reasons a profile table is rejected.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// The same profile appears more than once.
    Duplicate(ProfileId),
    /// A profile has no entry.
    Missing(ProfileId),
    /// More entries than there are profiles.
    TooManyEntries,
}

impl fmt::Display for CatalogError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Duplicate(id) => write!(f, "profile {id:?} listed more than once"),
            Self::Missing(id) => write!(f, "profile {id:?} has no settings"),
            Self::TooManyEntries => write!(f, "more than {} profile entries", ProfileId::COUNT),
        }
    }
}

impl core::error::Error for CatalogError {}

/// Profile table plus the active selection.
///
/// Lookups are total: every [`ProfileId`] is guaranteed to have settings once
/// the catalog exists. The active profile starts at [`ProfileId::P1`] and only
/// changes through [`set_current`](Self::set_current).
#[derive(Clone, PartialEq, Debug)]
pub struct ProfileCatalog {
    entries: [ProfileSettings; ProfileId::COUNT],
    active: ProfileId,
}

const BUILTIN: ProfileCatalog = match ProfileCatalog::new(&BUILTIN_PROFILES) {
    Ok(catalog) => catalog,
    Err(_) => panic!("built-in profile table must list every profile exactly once"),
};

impl ProfileCatalog {
    /// Build a catalog from `(id, settings)` pairs in any order.
    ///
    /// Every profile must appear exactly once.
    pub const fn new(pairs: &[(ProfileId, ProfileSettings)]) -> Result<Self, CatalogError> {
        if pairs.len() > ProfileId::COUNT {
            return Err(CatalogError::TooManyEntries);
        }

        let mut slots: [Option<ProfileSettings>; ProfileId::COUNT] = [None; ProfileId::COUNT];
        let mut i = 0;
        while i < pairs.len() {
            let (id, settings) = pairs[i];
            if slots[id.index()].is_some() {
                return Err(CatalogError::Duplicate(id));
            }
            slots[id.index()] = Some(settings);
            i += 1;
        }

        let mut entries = [ProfileSettings::ZERO; ProfileId::COUNT];
        let mut slot = 0;
        while slot < ProfileId::COUNT {
            match slots[slot] {
                Some(settings) => entries[slot] = settings,
                None => return Err(CatalogError::Missing(ProfileId::ALL[slot])),
            }
            slot += 1;
        }

        Ok(Self {
            entries,
            active: ProfileId::P1,
        })
    }

    /// The built-in table (validated at compile time) with `P1` active.
    pub const fn builtin() -> Self { BUILTIN }

    /// Settings for `id`.
    #[inline]
    pub const fn settings_for(
        &self,
        id: ProfileId,
    ) -> ProfileSettings {
        self.entries[id.index()]
    }

    /// Currently active profile.
    #[inline]
    pub const fn current(&self) -> ProfileId { self.active }

    /// Select the active profile.
    ///
    /// Does not redraw anything; callers that need the screen to reflect the
    /// change must request a page refresh themselves.
    pub fn set_current(
        &mut self,
        id: ProfileId,
    ) {
        if id != self.active {
            info!("Profile: {:?} -> {:?}", self.active, id);
        }
        self.active = id;
    }

    /// All profiles with their settings, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileId, ProfileSettings)> + '_ {
        ProfileId::ALL.into_iter().map(|id| (id, self.settings_for(id)))
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self { Self::builtin() }
}

// =============================================================================
// Unit Tests
// =============================================================================
