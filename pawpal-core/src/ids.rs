//! Identifier issuance: independent monotonically increasing counters per
//! entity kind. Callers own the generator and pass it where ids are minted.

use crate::error::{PawPalError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Owner,
    Pet,
    Task,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    // Last issued id per kind; 0 means none issued yet.
    issued: [u32; 3],
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id for `kind`. The first id of every kind is 1; once
    /// `u32::MAX` has been issued the kind is exhausted until `reset`.
    pub fn next_id(&mut self, kind: EntityKind) -> Result<u32> {
        let slot = &mut self.issued[kind_index(kind)];
        *slot = slot.checked_add(1).ok_or(PawPalError::IdsExhausted(kind))?;
        Ok(*slot)
    }

    /// The id `next_id` would return, without consuming it.
    pub fn peek(&self, kind: EntityKind) -> Option<u32> {
        self.issued[kind_index(kind)].checked_add(1)
    }

    pub fn reset(&mut self) {
        self.issued = [0; 3];
    }
}

fn kind_index(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Owner => 0,
        EntityKind::Pet => 1,
        EntityKind::Task => 2,
    }
}
