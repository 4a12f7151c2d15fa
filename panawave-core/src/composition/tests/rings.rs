use crate::composition::Composition;
use crate::error::UnknownRingError;
use crate::geometry::{Point, Polygon};
use crate::ring::RingId;

use super::recorder;

#[test]
fn test_add_ring_allocates_five_digit_id() {
    let mut c = Composition::new();
    let id = c.add_uniform_ring(100., 4, 0.).unwrap();
    assert!((10_000..=99_999).contains(&id.0));
    assert_eq!(c.len(), 1);
    assert_eq!(c.ring(id).unwrap().count(), 4);
}

#[test]
fn test_add_ring_rejects_invalid_geometry() {
    let mut c = Composition::new();
    assert!(c.add_ring(100., 0, 0., vec![1], None).is_err());
    assert!(c.add_ring(100., 4, 0., vec![], None).is_err());
    assert!(c.add_ring(100., 4, 0., vec![1, 0], None).is_err());
    assert!(c.is_empty());
}

#[test]
fn test_unknown_ring_operations() {
    let mut c = Composition::new();
    let bogus = RingId(12345);
    assert_eq!(c.ring(bogus).unwrap_err(), UnknownRingError(bogus));
    assert!(c.remove_ring(bogus).is_err());
    assert!(c.toggle_ring_selected(bogus).is_err());
    assert!(c.lock_ring_count_to_scaler(bogus).is_err());
    assert!(c.unlock_ring_count_from_scaler(bogus).is_err());
    assert!(c.is_count_locked_for_ring(bogus).is_err());
    assert!(c.set_ring_radius(bogus, 10.).is_err());
}

#[test]
fn test_remove_ring_prunes_unlocked() {
    let mut c = Composition::new();
    let id = c.add_uniform_ring(100., 4, 0.).unwrap();
    c.unlock_ring_count_from_scaler(id).unwrap();
    assert!(c.persistent_state.unlocked_rings.contains(&id));
    c.remove_ring(id).unwrap();
    assert!(c.persistent_state.unlocked_rings.is_empty());
    assert!(c.is_empty());
}

#[test]
fn test_lock_state_defaults_to_locked() {
    let mut c = Composition::new();
    let id = c.add_uniform_ring(100., 4, 0.).unwrap();
    assert!(c.is_count_locked_for_ring(id).unwrap());
    c.unlock_ring_count_from_scaler(id).unwrap();
    assert!(!c.is_count_locked_for_ring(id).unwrap());
    c.lock_ring_count_to_scaler(id).unwrap();
    assert!(c.is_count_locked_for_ring(id).unwrap());
}

#[test]
fn test_lock_notifications_only_on_change() {
    let (events, observer) = recorder();
    let mut c = Composition::new();
    c.set_observer(observer);
    let id = c.add_uniform_ring(100., 4, 0.).unwrap();
    c.lock_ring_count_to_scaler(id).unwrap(); // already locked, no event
    c.unlock_ring_count_from_scaler(id).unwrap();
    c.unlock_ring_count_from_scaler(id).unwrap(); // already unlocked
    c.lock_ring_count_to_scaler(id).unwrap();
    assert_eq!(events.borrow().locks, vec![(id, false), (id, true)]);
}

#[test]
fn test_set_selection() {
    let mut c = Composition::new();
    let a = c.add_uniform_ring(100., 4, 0.).unwrap();
    let b = c.add_uniform_ring(200., 6, 0.).unwrap();
    let d = c.add_uniform_ring(300., 8, 0.).unwrap();

    c.set_selection(&[a, d]).unwrap();
    assert_eq!(c.selected_ids(), vec![a, d]);
    assert!(!c.ring(b).unwrap().selected());

    // Re-selecting replaces, not extends.
    c.set_selection(&[b]).unwrap();
    assert_eq!(c.selected_ids(), vec![b]);

    c.clear_selection();
    assert!(c.selected_ids().is_empty());
}

#[test]
fn test_set_selection_unknown_id_has_no_effect() {
    let mut c = Composition::new();
    let a = c.add_uniform_ring(100., 4, 0.).unwrap();
    c.set_selection(&[a]).unwrap();
    assert!(c.set_selection(&[a, RingId(11)]).is_err());
    // The failed call must not have touched any flag.
    assert_eq!(c.selected_ids(), vec![a]);
}

#[test]
fn test_selection_notifications() {
    let (events, observer) = recorder();
    let mut c = Composition::new();
    c.set_observer(observer);
    let a = c.add_uniform_ring(100., 4, 0.).unwrap();
    let b = c.add_uniform_ring(200., 6, 0.).unwrap();

    c.set_selection(&[a]).unwrap();
    c.toggle_ring_selected(b).unwrap();
    c.clear_selection();

    let selections = events.borrow().selections.clone();
    assert_eq!(
        selections,
        vec![(a, true), (b, true), (a, false), (b, false)]
    );
}

#[test]
fn test_ring_edits_forwarded_with_redraw() {
    let (events, observer) = recorder();
    let mut c = Composition::new();
    c.set_observer(observer);
    let id = c.add_uniform_ring(100., 4, 0.).unwrap();
    let after_add = events.borrow().redraws;

    c.set_ring_count(id, 6).unwrap();
    c.set_ring_scaler_list(id, vec![1, 2]).unwrap();
    c.set_ring_offset(id, 15.).unwrap();
    assert_eq!(events.borrow().redraws, after_add + 3);

    let ring = c.ring(id).unwrap();
    assert_eq!(ring.count(), 6);
    assert_eq!(ring.scaler_list(), &[1, 2]);
    assert_relative_eq!(ring.increment(), 40., epsilon = 1e-12);
}

#[test]
fn test_composition_base_sticker_inherited() {
    let triangle = Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(4., 0.),
        Point::new(2., 3.),
    ]);
    let mut c = Composition::new();
    let inheriting = c.add_uniform_ring(100., 4, 0.).unwrap();
    c.set_base_sticker(Some(triangle.clone()));
    let own = c
        .add_ring(
            200.,
            3,
            0.,
            vec![1],
            Some(Polygon::new(vec![
                Point::new(0., 0.),
                Point::new(0., 5.),
                Point::new(5., 5.),
                Point::new(5., 0.),
                Point::new(2.5, -2.),
            ])),
        )
        .unwrap();

    for s in c.ring(inheriting).unwrap().stickers() {
        assert_eq!(s.num_points(), 3);
    }
    // A ring with its own base keeps it.
    for s in c.ring(own).unwrap().stickers() {
        assert_eq!(s.num_points(), 5);
    }
}

#[test]
fn test_ids_are_unique() {
    let mut c = Composition::new();
    for _ in 0..50 {
        c.add_uniform_ring(100., 3, 0.).unwrap();
    }
    let mut ids = c.ids();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}
