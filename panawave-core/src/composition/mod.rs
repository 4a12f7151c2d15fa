mod doc;
mod orbit;

pub use orbit::{OrbitMethod, ParseOrbitMethodError, TICK_INTERVAL};

use log::debug;
use rand::Rng;

use crate::error::{InvalidGeometryError, UnknownRingError};
use crate::events::{CompositionObserver, NoopObserver};
use crate::geometry::Polygon;
use crate::ring::{RingId, StickerRing};
use crate::state::{EphemeralState, PersistentState};

/// The full document: an insertion-ordered collection of sticker rings
/// keyed by identity, plus persistent and ephemeral state.
///
/// Selection lives on the rings themselves; this collection is the single
/// source of truth and the UI reads it rather than keeping its own list.
pub struct Composition {
    rings: Vec<StickerRing>,
    pub persistent_state: PersistentState,
    ephemeral_state: EphemeralState,
    observer: Box<dyn CompositionObserver>,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition {
    pub fn new() -> Self {
        Composition {
            rings: Vec::new(),
            persistent_state: PersistentState::default(),
            ephemeral_state: EphemeralState::default(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Register the collaborator that receives redraw/selection/animation/
    /// lock notifications.
    pub fn set_observer(&mut self, observer: Box<dyn CompositionObserver>) {
        self.observer = observer;
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Ring ids in insertion order.
    pub fn ids(&self) -> Vec<RingId> {
        self.rings.iter().map(|r| r.id()).collect()
    }

    /// Rings in insertion order.
    pub fn rings(&self) -> impl Iterator<Item = &StickerRing> {
        self.rings.iter()
    }

    pub fn ring(&self, id: RingId) -> Result<&StickerRing, UnknownRingError> {
        self.rings
            .iter()
            .find(|r| r.id() == id)
            .ok_or(UnknownRingError(id))
    }

    fn ring_mut(&mut self, id: RingId) -> Result<&mut StickerRing, UnknownRingError> {
        self.rings
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(UnknownRingError(id))
    }

    /// Fresh 5-digit id, re-drawn on the (rare) collision.
    fn allocate_id(&self) -> RingId {
        let mut rng = rand::thread_rng();
        loop {
            let id = RingId(rng.gen_range(10_000..=99_999));
            if self.rings.iter().all(|r| r.id() != id) {
                return id;
            }
        }
    }

    /// Construct a new ring and insert it. `geometry` of `None` inherits
    /// the composition's base sticker.
    pub fn add_ring(
        &mut self,
        radius: f64,
        count: u32,
        offset_degrees: f64,
        scaler_list: Vec<u32>,
        geometry: Option<Polygon>,
    ) -> Result<RingId, InvalidGeometryError> {
        let id = self.allocate_id();
        let mut ring = StickerRing::new(id, radius, count, offset_degrees, scaler_list, geometry)?;
        if ring.base_sticker().is_none() && self.persistent_state.base_sticker.is_some() {
            ring.inherited_base = self.persistent_state.base_sticker.clone();
            ring.regenerate();
        }
        debug!("added ring {id}: {ring}");
        self.observer.redraw(&ring);
        self.rings.push(ring);
        Ok(id)
    }

    /// Uniform-spacing convenience: `scaler_list == [1]`.
    pub fn add_uniform_ring(
        &mut self,
        radius: f64,
        count: u32,
        offset_degrees: f64,
    ) -> Result<RingId, InvalidGeometryError> {
        self.add_ring(radius, count, offset_degrees, vec![1], None)
    }

    /// Delete a ring, pruning its id from `unlocked_rings` so the
    /// persistent state never references a ring that no longer exists.
    pub fn remove_ring(&mut self, id: RingId) -> Result<StickerRing, UnknownRingError> {
        let idx = self
            .rings
            .iter()
            .position(|r| r.id() == id)
            .ok_or(UnknownRingError(id))?;
        self.persistent_state.unlocked_rings.remove(&id);
        debug!("removed ring {id}");
        Ok(self.rings.remove(idx))
    }

    // Selection: bulk mutators over the `selected` flag.

    pub fn clear_selection(&mut self) {
        for ring in &mut self.rings {
            if ring.set_selected(false) {
                self.observer.selection_changed(ring.id(), false);
            }
        }
    }

    /// Select exactly the given ids, deselecting all others. Fails without
    /// touching any flag if an id is unknown.
    pub fn set_selection(&mut self, ids: &[RingId]) -> Result<(), UnknownRingError> {
        for &id in ids {
            self.ring(id)?;
        }
        for ring in &mut self.rings {
            let selected = ids.contains(&ring.id());
            if ring.set_selected(selected) {
                self.observer.selection_changed(ring.id(), selected);
            }
        }
        Ok(())
    }

    pub fn toggle_ring_selected(&mut self, id: RingId) -> Result<bool, UnknownRingError> {
        let ring = self.ring_mut(id)?;
        let selected = ring.toggle_selected_state();
        self.observer.selection_changed(id, selected);
        Ok(selected)
    }

    /// Currently selected ring ids, insertion order.
    pub fn selected_ids(&self) -> Vec<RingId> {
        self.rings
            .iter()
            .filter(|r| r.selected())
            .map(|r| r.id())
            .collect()
    }

    // Count-to-scaler locking. Declared state only; the engine does not
    // constrain count edits itself, the input-control layer does.

    pub fn lock_ring_count_to_scaler(&mut self, id: RingId) -> Result<(), UnknownRingError> {
        self.ring(id)?;
        if self.persistent_state.unlocked_rings.remove(&id) {
            self.observer.lock_changed(id, true);
        }
        Ok(())
    }

    pub fn unlock_ring_count_from_scaler(&mut self, id: RingId) -> Result<(), UnknownRingError> {
        self.ring(id)?;
        if self.persistent_state.unlocked_rings.insert(id) {
            self.observer.lock_changed(id, false);
        }
        Ok(())
    }

    pub fn is_count_locked_for_ring(&self, id: RingId) -> Result<bool, UnknownRingError> {
        self.ring(id)?;
        Ok(!self.persistent_state.unlocked_rings.contains(&id))
    }

    // Per-ring geometry edits, forwarded so the collaborator gets a redraw
    // for the edited ring.

    fn edit_ring<F>(&mut self, id: RingId, edit: F) -> Result<(), RingEditError>
    where
        F: FnOnce(&mut StickerRing) -> Result<(), InvalidGeometryError>,
    {
        let idx = self
            .rings
            .iter()
            .position(|r| r.id() == id)
            .ok_or(UnknownRingError(id))?;
        edit(&mut self.rings[idx])?;
        self.observer.redraw(&self.rings[idx]);
        Ok(())
    }

    pub fn set_ring_radius(&mut self, id: RingId, radius: f64) -> Result<(), RingEditError> {
        self.edit_ring(id, |r| r.set_radius(radius))
    }

    pub fn set_ring_count(&mut self, id: RingId, count: u32) -> Result<(), RingEditError> {
        self.edit_ring(id, |r| r.set_count(count))
    }

    pub fn set_ring_offset(&mut self, id: RingId, offset_degrees: f64) -> Result<(), RingEditError> {
        self.edit_ring(id, |r| {
            r.set_offset(offset_degrees);
            Ok(())
        })
    }

    pub fn set_ring_scaler_list(
        &mut self,
        id: RingId,
        scaler_list: Vec<u32>,
    ) -> Result<(), RingEditError> {
        self.edit_ring(id, |r| r.set_scaler_list(scaler_list))
    }

    pub fn set_ring_base_sticker(
        &mut self,
        id: RingId,
        base_sticker: Option<Polygon>,
    ) -> Result<(), RingEditError> {
        self.edit_ring(id, |r| {
            r.set_base_sticker(base_sticker);
            Ok(())
        })
    }

    /// Set the composition-level default base sticker and regenerate every
    /// ring that inherits it.
    pub fn set_base_sticker(&mut self, base_sticker: Option<Polygon>) {
        self.persistent_state.base_sticker = base_sticker.clone();
        for ring in &mut self.rings {
            if ring.base_sticker().is_none() {
                ring.inherited_base = base_sticker.clone();
                ring.regenerate();
                self.observer.redraw(ring);
            }
        }
    }

    pub fn set_master_orbit_speed(&mut self, speed: f64) {
        self.persistent_state.master_orbit_speed = speed;
    }

    pub fn ephemeral_state(&self) -> &EphemeralState {
        &self.ephemeral_state
    }

    /// Fan every ring out to the collaborator's renderer.
    pub fn draw(&mut self) {
        for ring in &self.rings {
            self.observer.redraw(ring);
        }
    }

    pub(crate) fn commit_loaded(
        &mut self,
        rings: Vec<StickerRing>,
        persistent_state: PersistentState,
    ) {
        self.rings = rings;
        self.persistent_state = persistent_state;
        self.ephemeral_state = EphemeralState::default();
    }
}

/// A per-ring edit can fail either way: the ring may not exist, or the new
/// value may be geometrically invalid.
#[derive(Debug, thiserror::Error)]
pub enum RingEditError {
    #[error(transparent)]
    UnknownRing(#[from] UnknownRingError),
    #[error(transparent)]
    InvalidGeometry(#[from] InvalidGeometryError),
}

#[cfg(test)]
mod tests;
