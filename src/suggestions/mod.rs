//! Rotating suggestion pool
//!
//! A sliding window over a fixed cyclic catalog of example ticket texts.
//! Every tick the oldest visible entry is dropped and the next catalog
//! entry is appended, so the window walks the catalog in order forever.

use std::time::Duration;

/// Fixed catalog of example ticket texts. Order matters: the window
/// traverses it cyclically, so reordering changes what users see.
pub const CATALOG: [&str; 12] = [
    "Payment failed after submitting card details",
    "Can't log into my account, password reset not working",
    "Mobile app crashes when uploading attachments",
    "Order shows as paid but not delivered",
    "Unable to integrate API - 401 unauthorized error",
    "Feature request: export reports in CSV",
    "Delay in email notifications from system",
    "Incorrect billing amount on invoice",
    "Request to change account subscription plan",
    "Data sync error between services overnight",
    "Refund not processed after approval",
    "Two-factor authentication codes not received",
];

/// How often the visible window rotates by one entry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(4000);

/// Viewport width (in logical units) below which only two slots are shown.
pub const NARROW_BREAKPOINT: u16 = 640;

/// Logical units per terminal cell, so an 80-column terminal sits exactly
/// on the narrow breakpoint.
pub const UNITS_PER_CELL: u16 = 8;

/// Number of suggestion slots for a given viewport width.
///
/// Evaluated once at startup. A later terminal resize does not reshape an
/// already-initialized window.
pub fn slot_count_for_viewport(width_units: u16) -> usize {
    if width_units < NARROW_BREAKPOINT { 2 } else { 4 }
}

/// Convert a terminal column count to logical viewport units.
pub fn viewport_units(columns: u16) -> u16 {
    columns.saturating_mul(UNITS_PER_CELL)
}

/// Sliding window over the suggestion catalog.
///
/// Invariant: after construction the window always holds exactly the
/// requested number of slots, each a catalog entry. Entries may repeat when
/// the slot count exceeds the catalog length modulo wraparound.
pub struct SuggestionPool {
    catalog: &'static [&'static str],
    /// Next catalog index to append; private, advanced one per tick.
    cursor: usize,
    window: Vec<&'static str>,
}

impl SuggestionPool {
    /// Create a pool over [`CATALOG`] with the given number of visible slots.
    ///
    /// Fills the window with the first `slot_count` catalog entries in
    /// catalog order and leaves the cursor at `slot_count % catalog.len()`.
    /// This is the only privileged initial fill; nothing ever resets the
    /// cursor back to zero.
    pub fn new(slot_count: usize) -> Self {
        Self::with_catalog(&CATALOG, slot_count)
    }

    /// Create a pool over an arbitrary catalog (test seam). An empty
    /// catalog yields an empty window that every `tick` leaves untouched.
    pub fn with_catalog(catalog: &'static [&'static str], slot_count: usize) -> Self {
        if catalog.is_empty() {
            return Self {
                catalog,
                cursor: 0,
                window: Vec::new(),
            };
        }
        let window = (0..slot_count).map(|i| catalog[i % catalog.len()]).collect();
        Self {
            catalog,
            cursor: slot_count % catalog.len(),
            window,
        }
    }

    /// Rotate the window by one: drop the oldest entry, append the catalog
    /// entry at the cursor, advance the cursor modulo catalog length.
    ///
    /// A no-op on an empty window; that cannot happen after construction
    /// but keeps the rotation total.
    pub fn tick(&mut self) {
        if self.window.is_empty() {
            return;
        }
        self.window.remove(0);
        self.window.push(self.catalog[self.cursor]);
        self.cursor = (self.cursor + 1) % self.catalog.len();
    }

    /// The currently visible suggestions, oldest first.
    pub fn window(&self) -> &[&'static str] {
        &self.window
    }

    /// The suggestion in the given slot, if that slot exists.
    pub fn get(&self, slot: usize) -> Option<&'static str> {
        self.window.get(slot).copied()
    }

    /// Number of visible slots.
    pub fn slot_count(&self) -> usize {
        self.window.len()
    }
}
