mod rings;

use std::cell::RefCell;
use std::rc::Rc;

use crate::composition::OrbitMethod;
use crate::events::CompositionObserver;
use crate::ring::{RingId, StickerRing};

/// Observer that records every notification for assertions.
#[derive(Default)]
pub(super) struct Recorder {
    pub redraws: usize,
    pub selections: Vec<(RingId, bool)>,
    pub animations: Vec<(bool, Option<OrbitMethod>)>,
    pub locks: Vec<(RingId, bool)>,
}

pub(super) struct SharedRecorder(pub Rc<RefCell<Recorder>>);

impl CompositionObserver for SharedRecorder {
    fn redraw(&mut self, _ring: &StickerRing) {
        self.0.borrow_mut().redraws += 1;
    }
    fn selection_changed(&mut self, id: RingId, selected: bool) {
        self.0.borrow_mut().selections.push((id, selected));
    }
    fn animation_changed(&mut self, animating: bool, method: Option<OrbitMethod>) {
        self.0.borrow_mut().animations.push((animating, method));
    }
    fn lock_changed(&mut self, id: RingId, locked: bool) {
        self.0.borrow_mut().locks.push((id, locked));
    }
}

pub(super) fn recorder() -> (Rc<RefCell<Recorder>>, Box<SharedRecorder>) {
    let shared = Rc::new(RefCell::new(Recorder::default()));
    (shared.clone(), Box::new(SharedRecorder(shared)))
}
