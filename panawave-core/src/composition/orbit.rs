//! Orbit animation: assigns each ring a radial speed in [0, 1] and
//! advances all rings by `master_orbit_speed × radial_speed` degrees per
//! tick. Explicit Idle/Animating state machine; re-entrant `orbit` calls
//! reassign speeds in place instead of stacking timers, and cancellation is
//! cooperative via the `animating` flag.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use log::{debug, trace};
use rand::Rng;

use super::Composition;

/// Driver cadence. A policy choice, not a correctness requirement; it just
/// has to stay bounded and consistent for the animation to look smooth.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrbitMethod {
    /// Independent uniform draw per ring.
    Random,
    /// Ring at insertion-order index k of N gets speed k/N.
    Linear,
    /// Ring at insertion-order index k of N gets speed (N-k)/N.
    ReverseLinear,
}

impl Display for OrbitMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrbitMethod::Random => write!(f, "random"),
            OrbitMethod::Linear => write!(f, "linear"),
            OrbitMethod::ReverseLinear => write!(f, "reverse-linear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown orbit method: {0:?}")]
pub struct ParseOrbitMethodError(String);

impl FromStr for OrbitMethod {
    type Err = ParseOrbitMethodError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(OrbitMethod::Random),
            "linear" => Ok(OrbitMethod::Linear),
            // "inverse-linear" is the historical spelling
            "reverse-linear" | "inverse-linear" => Ok(OrbitMethod::ReverseLinear),
            other => Err(ParseOrbitMethodError(other.to_string())),
        }
    }
}

impl Composition {
    /// Assign every ring a radial speed per `method` and enter the
    /// Animating state. On an empty composition this is a silent no-op
    /// (nothing to spin, and linear assignment would divide by zero).
    /// Re-entrant while already animating: speeds are reassigned in place
    /// and no second "started" notification fires.
    pub fn orbit(&mut self, method: OrbitMethod) {
        if self.rings.is_empty() {
            debug!("orbit({method}): no rings, ignoring");
            return;
        }
        let n = self.rings.len() as f64;
        match method {
            OrbitMethod::Random => {
                let mut rng = rand::thread_rng();
                for ring in &mut self.rings {
                    ring.radial_speed = rng.gen();
                }
            }
            OrbitMethod::Linear => {
                for (k, ring) in self.rings.iter_mut().enumerate() {
                    ring.radial_speed = k as f64 / n;
                }
            }
            OrbitMethod::ReverseLinear => {
                let count = self.rings.len();
                for (k, ring) in self.rings.iter_mut().enumerate() {
                    ring.radial_speed = (count - k) as f64 / n;
                }
            }
        }
        let was_animating = self.ephemeral_state.animating;
        self.ephemeral_state.animating = true;
        self.ephemeral_state.anim_method = Some(method);
        debug!("orbit({method}): {} rings, restarted={was_animating}", self.rings.len());
        if !was_animating {
            self.observer.animation_changed(true, Some(method));
        }
    }

    /// String-boundary variant for UI wiring: an unrecognized method name
    /// returns without changing any state.
    pub fn orbit_named(&mut self, method: &str) {
        match method.parse() {
            Ok(method) => self.orbit(method),
            Err(err) => debug!("{err}, ignoring"),
        }
    }

    /// Animating → Idle. Cooperative: a driver observes the cleared flag on
    /// its next scheduled tick and stops rescheduling itself.
    pub fn stop_animation(&mut self) {
        if !self.ephemeral_state.animating {
            return;
        }
        self.ephemeral_state.animating = false;
        let method = self.ephemeral_state.anim_method;
        self.observer.animation_changed(false, method);
    }

    pub fn animating(&self) -> bool {
        self.ephemeral_state.animating
    }

    /// One animation frame: rotate every ring by its scaled speed, then
    /// hand each ring to the renderer. A straggler tick after
    /// `stop_animation` is a no-op.
    pub fn tick(&mut self) {
        if !self.ephemeral_state.animating {
            return;
        }
        let master = self.persistent_state.master_orbit_speed;
        for ring in &mut self.rings {
            let increment = master * ring.radial_speed;
            trace!("ring {} at {:.3}°, rotating by {increment:.3}°", ring.id(), ring.offset_degrees());
            ring.rotate(increment);
        }
        for ring in &self.rings {
            self.observer.redraw(ring);
        }
    }
}
