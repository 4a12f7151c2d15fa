use crate::composition::OrbitMethod;
use crate::ring::{RingId, StickerRing};

/// Callbacks the engine fans out to so an input-control layer (selection
/// list, sliders, renderer) can stay synchronized without polling.
///
/// All methods default to no-ops; a collaborator overrides the ones it
/// cares about. The engine never renders pixels itself: `redraw` hands the
/// renderer a ring whose materialized sticker polygons are current.
pub trait CompositionObserver {
    fn redraw(&mut self, _ring: &StickerRing) {}
    fn selection_changed(&mut self, _id: RingId, _selected: bool) {}
    fn animation_changed(&mut self, _animating: bool, _method: Option<OrbitMethod>) {}
    fn lock_changed(&mut self, _id: RingId, _locked: bool) {}
}

/// Observer used until a collaborator registers one.
pub struct NoopObserver;

impl CompositionObserver for NoopObserver {}
