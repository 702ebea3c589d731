//! Per-tick command latch.
//!
//! Terminal input arrives as an event stream, but the simulation consumes at
//! most one directional command per tick. The latch keeps only the most
//! recent command between ticks; held keys stay in motion because terminal
//! auto-repeat keeps refilling it.

use crate::types::Command;

/// Latches the most recent directional command until the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler {
    pending: Option<Command>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command; a newer one replaces an unconsumed older one.
    ///
    /// Non-directional commands are not latched; the loop handles those
    /// immediately.
    pub fn record(&mut self, command: Command) {
        if command.is_directional() {
            self.pending = Some(command);
        }
    }

    /// Take the latched command for this tick, leaving the latch empty.
    pub fn take(&mut self) -> Option<Command> {
        self.pending.take()
    }
}
