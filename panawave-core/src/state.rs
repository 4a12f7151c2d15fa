use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::composition::OrbitMethod;
use crate::geometry::Polygon;
use crate::ring::RingId;

pub const DEFAULT_MASTER_ORBIT_SPEED: f64 = 1.5;

/// Configuration persisted with saved documents. Only this and the ring
/// collection are written to file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    /// Master scaler for animations; each ring's per-tick rotation is
    /// `master_orbit_speed × radial_speed` degrees.
    pub master_orbit_speed: f64,
    /// Rings whose sticker count is unlocked from scaler-pattern multiples.
    /// Absence means locked; the engine tracks this for the input-control
    /// layer but does not enforce it.
    pub unlocked_rings: BTreeSet<RingId>,
    /// Composition-level default base sticker, inherited by rings whose own
    /// `base_sticker` is `None`.
    pub base_sticker: Option<Polygon>,
}

impl Default for PersistentState {
    fn default() -> Self {
        PersistentState {
            master_orbit_speed: DEFAULT_MASTER_ORBIT_SPEED,
            unlocked_rings: BTreeSet::new(),
            base_sticker: None,
        }
    }
}

/// Runtime flags that never reach disk; `animating` resets to false on
/// every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EphemeralState {
    pub animating: bool,
    pub anim_method: Option<OrbitMethod>,
}
