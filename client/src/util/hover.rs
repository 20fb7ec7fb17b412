//! Hover-open menu with a delayed close.
//!
//! Each `leave` hands out a close generation; the timer only closes the menu
//! if no `enter` (or later `leave`) happened in between. State lives in the
//! component that owns the menu, so an unmounted menu simply drops it.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Delay before a hovered-out menu closes.
pub const HOVER_CLOSE_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverMenu {
    pub open: bool,
    close_seq: u64,
}

impl HoverMenu {
    /// Pointer entered: open now and cancel any pending close.
    pub fn enter(&mut self) {
        self.open = true;
        self.close_seq += 1;
    }

    /// Pointer left: returns the generation a delayed close must present.
    pub fn leave(&mut self) -> u64 {
        self.close_seq += 1;
        self.close_seq
    }

    /// Close if `seq` is still the latest generation. Returns whether it closed.
    pub fn close_if_current(&mut self, seq: u64) -> bool {
        if seq != self.close_seq || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.close_seq += 1;
    }
}
