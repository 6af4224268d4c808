//! Assertion helpers for tests.

use fbcolormap::services::{ColormapSession, InMemoryPaletteDevice};
use palette_index::ReverseIndex;
use pretty_assertions::assert_eq;

use super::fixtures::CHANNEL_EPSILON;

/// Assert a channel read back within one 16-bit step of `expected`
pub fn assert_channel_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= CHANNEL_EPSILON,
        "Expected channel {expected}, got {actual} (difference {})",
        (actual - expected).abs()
    );
}

/// Assert the device holds exactly the session's in-memory palette
pub fn assert_device_in_sync(session: &ColormapSession<InMemoryPaletteDevice>) {
    assert_eq!(
        session.device().palette(),
        session.palette(),
        "Device palette differs from the in-memory palette"
    );
}

/// Assert the session's reverse index matches a from-scratch build
pub fn assert_index_exact(session: &ColormapSession<InMemoryPaletteDevice>) {
    let index = session
        .reverse_index()
        .expect("session should have a reverse index in indexed mode");
    let fresh = ReverseIndex::build(session.palette(), session.resolution());
    assert!(
        index == &fresh,
        "Reverse index differs from a full rebuild in {} cells",
        index
            .cells()
            .iter()
            .zip(fresh.cells())
            .filter(|(a, b)| a != b)
            .count()
    );
}
