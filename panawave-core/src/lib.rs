#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod composition;
pub mod error;
pub mod events;
pub mod geometry;
pub mod ring;
pub mod state;

// Re-export key types for external use
pub use composition::{Composition, OrbitMethod, ParseOrbitMethodError, RingEditError, TICK_INTERVAL};
pub use error::{CorruptDocumentError, InvalidGeometryError, UnknownRingError, WriteDocumentError};
pub use events::CompositionObserver;
pub use geometry::point::Point;
pub use geometry::polygon::Polygon;
pub use ring::{RingId, StickerRing};
pub use state::{EphemeralState, PersistentState};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
