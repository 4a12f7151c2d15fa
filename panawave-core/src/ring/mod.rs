mod spacing;

use std::fmt::{self, Formatter};

use derive_more::{Display, From};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::InvalidGeometryError;
use crate::geometry::{Point, Polygon};

/// Opaque per-ring identity; stable across edits, used as the join key to
/// external selection/UI state and as the `ring_array` key on disk.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
    From, Display, Serialize, Deserialize,
)]
pub struct RingId(pub u32);

/// The sticker shape used when neither the ring nor the composition
/// supplies one: a 20×20 square.
pub fn default_base_sticker() -> Polygon {
    Polygon::new(vec![
        Point::new(0., 0.),
        Point::new(0., 20.),
        Point::new(20., 20.),
        Point::new(20., 0.),
    ])
}

/// A ring of repeated sticker shapes at a fixed radius.
///
/// There's less math if we throw the materialized polygons out and build a
/// new set whenever a base characteristic changes, so that's what every
/// setter does; ring counts are tens, not thousands.
#[derive(Debug, Clone)]
pub struct StickerRing {
    id: RingId,
    radius: f64,
    count: u32,
    offset_degrees: f64,
    scaler_list: Vec<u32>,
    /// None = inherit the composition's base sticker.
    base_sticker: Option<Polygon>,
    /// Composition-level default, cached here so ring-level setters can
    /// regenerate without reaching back up. Refreshed by the Composition.
    pub(crate) inherited_base: Option<Polygon>,
    pub(crate) radial_speed: f64,
    selected: bool,
    increment: f64,
    sticker_list: Vec<Polygon>,
}

impl StickerRing {
    pub fn new(
        id: RingId,
        radius: f64,
        count: u32,
        offset_degrees: f64,
        scaler_list: Vec<u32>,
        base_sticker: Option<Polygon>,
    ) -> Result<Self, InvalidGeometryError> {
        spacing::validate(radius, count, &scaler_list)?;
        let mut ring = StickerRing {
            id,
            radius,
            count,
            offset_degrees: offset_degrees.rem_euclid(360.),
            scaler_list,
            base_sticker,
            inherited_base: None,
            radial_speed: 0.,
            selected: false,
            increment: 0.,
            sticker_list: Vec::new(),
        };
        ring.regenerate();
        Ok(ring)
    }

    pub fn id(&self) -> RingId {
        self.id
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn offset_degrees(&self) -> f64 {
        self.offset_degrees
    }
    pub fn scaler_list(&self) -> &[u32] {
        &self.scaler_list
    }
    pub fn base_sticker(&self) -> Option<&Polygon> {
        self.base_sticker.as_ref()
    }
    pub fn selected(&self) -> bool {
        self.selected
    }
    pub fn radial_speed(&self) -> f64 {
        self.radial_speed
    }

    /// Base angular step; the gap before sticker i is
    /// `increment × scaler_list[i mod L]`.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// The materialized sticker polygons, one per `count`, positioned
    /// around the ring. Regenerated wholesale by every setter.
    pub fn stickers(&self) -> &[Polygon] {
        &self.sticker_list
    }

    /// Cumulative placement angle of each sticker, degrees.
    pub fn angles(&self) -> Vec<f64> {
        spacing::angles(
            self.count,
            &self.scaler_list,
            self.offset_degrees,
            self.increment,
        )
        .collect()
    }

    /// Setter for radius; re-initializes the sticker list.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), InvalidGeometryError> {
        spacing::validate(radius, self.count, &self.scaler_list)?;
        self.radius = radius;
        self.regenerate();
        Ok(())
    }

    /// Setter for count; re-initializes the sticker list.
    pub fn set_count(&mut self, count: u32) -> Result<(), InvalidGeometryError> {
        spacing::validate(self.radius, count, &self.scaler_list)?;
        self.count = count;
        self.regenerate();
        Ok(())
    }

    /// Setter for the whole-ring rotation; re-initializes the sticker list.
    pub fn set_offset(&mut self, offset_degrees: f64) {
        self.offset_degrees = offset_degrees.rem_euclid(360.);
        self.regenerate();
    }

    /// Setter for the spacing pattern; re-initializes the sticker list.
    pub fn set_scaler_list(&mut self, scaler_list: Vec<u32>) -> Result<(), InvalidGeometryError> {
        spacing::validate(self.radius, self.count, &scaler_list)?;
        self.scaler_list = scaler_list;
        self.regenerate();
        Ok(())
    }

    /// Setter for the per-ring base shape; `None` reverts the ring to the
    /// inherited composition default.
    pub fn set_base_sticker(&mut self, base_sticker: Option<Polygon>) {
        self.base_sticker = base_sticker;
        self.regenerate();
    }

    /// Rotate the whole ring in place. Use this instead of `set_offset`
    /// during animation: it spins the existing polygons about the origin
    /// and accumulates the offset without regenerating.
    pub fn rotate(&mut self, angle_degrees: f64) {
        for sticker in &mut self.sticker_list {
            sticker.rotate_about_origin(angle_degrees);
        }
        self.offset_degrees = (self.offset_degrees + angle_degrees).rem_euclid(360.);
    }

    /// Flip the selection flag; no geometric effect, pass-through state for
    /// a renderer to highlight. Returns the new state.
    pub fn toggle_selected_state(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    fn effective_base(&self) -> Polygon {
        self.base_sticker
            .as_ref()
            .or(self.inherited_base.as_ref())
            .cloned()
            .unwrap_or_else(default_base_sticker)
    }

    /// Throw the old polygons out and place `count` fresh copies of the
    /// base sticker: centroid to origin, out to `radius` along +Y, then
    /// rotated into position about the origin.
    pub(crate) fn regenerate(&mut self) {
        debug!("ring {}: regenerating {} stickers", self.id, self.count);
        let base = self.effective_base();
        self.increment = spacing::increment(self.count, &self.scaler_list);
        self.sticker_list =
            spacing::angles(self.count, &self.scaler_list, self.offset_degrees, self.increment)
                .map(|angle| {
                    let mut sticker = base.clone();
                    let c = sticker.centroid;
                    sticker.translate(-c.x, -c.y);
                    sticker.translate(0., self.radius);
                    sticker.rotate_about_origin(angle);
                    sticker
                })
                .collect();
    }
}

/// Tabular row for list display: radius, count, offset, pattern.
impl fmt::Display for StickerRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<11.5}{:<11}{:<11.5}{}",
            self.radius,
            self.count,
            self.offset_degrees,
            self.scaler_list.iter().join(" "),
        )
    }
}
