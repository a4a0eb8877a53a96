/*
 * Copyright 2025 AvatarMeet Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Supersession tracking for in-flight asset loads.
//!
//! Every `set_asset` call takes a ticket; an async load may only attach
//! its result while its ticket is still the newest one issued. Teardown
//! invalidates without issuing, so any outstanding load goes stale.

use std::cell::Cell;

/// Monotonic counter deciding whether an async completion may attach.
///
/// Interior mutability so the owner and the completions can share one
/// counter behind an `Rc` on a single-threaded event loop.
#[derive(Debug, Default)]
pub struct AssetGeneration(Cell<u64>);

impl AssetGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new load, superseding every earlier one.
    pub fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    /// Supersede all outstanding tickets without issuing a new one.
    /// Called on teardown.
    pub fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Whether a completion holding `ticket` is still the newest load.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_ticket_is_current() {
        let generation = AssetGeneration::new();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }

    #[test]
    fn a_newer_load_supersedes_an_outstanding_one() {
        // Two loads race; only the second may attach, regardless of
        // which download finishes first.
        let generation = AssetGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn teardown_stales_every_outstanding_ticket() {
        let generation = AssetGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(
            !generation.is_current(ticket),
            "a load resolving after teardown must not attach"
        );
    }

    #[test]
    fn invalidate_is_safe_with_nothing_outstanding() {
        let generation = AssetGeneration::new();
        generation.invalidate();
        generation.invalidate();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }
}
