//! Health domain: the ledger and world hazard/interaction components.

use bevy::prelude::*;

/// Result of one ledger mutation, used by callers to emit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerChange {
    pub changed: bool,
    /// True on the alive -> dead edge only, never while already dead
    pub died: bool,
}

/// Health ledger. `current` stays within `[0, max]` after every mutation;
/// the death edge fires exactly once per life. Healing never revives,
/// only `reset` does.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    pub alive: bool,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            alive: true,
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> LedgerChange {
        // A negative amount is a magnitude error upstream, never a heal
        let amount = amount.max(0.0);
        let before = self.current;
        self.current = (self.current - amount).max(0.0);

        let mut change = LedgerChange {
            changed: self.current != before,
            died: false,
        };
        if self.alive && self.current <= 0.0 {
            self.alive = false;
            change.died = true;
        }
        change
    }

    pub fn heal(&mut self, amount: f32) -> LedgerChange {
        let amount = amount.max(0.0);
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        LedgerChange {
            changed: self.current != before,
            died: false,
        }
    }

    /// Hazard path: force current to zero. A no-op when already dead.
    pub fn kill_instantly(&mut self) -> LedgerChange {
        if !self.alive {
            return LedgerChange::default();
        }
        self.current = 0.0;
        self.alive = false;
        LedgerChange {
            changed: true,
            died: true,
        }
    }

    /// Explicit full revive, used only by respawn.
    pub fn reset(&mut self) {
        self.current = self.max;
        self.alive = true;
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Where a character respawns. Set by external spawn collaborators;
/// setting the same point twice is a no-op.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SpawnPoint(pub Vec2);

impl SpawnPoint {
    pub fn set(&mut self, point: Vec2) {
        self.0 = point;
    }
}

/// Axis-aligned kill region (pits, crushers). Arms after a short delay so a
/// freshly loaded level cannot kill characters mid-placement.
#[derive(Component, Debug, Clone)]
pub struct InstantDeathZone {
    pub half_extents: Vec2,
    pub arm_delay: f32,
    pub armed: bool,
    pub timer: f32,
}

impl InstantDeathZone {
    pub fn new(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            arm_delay: 1.0,
            armed: false,
            timer: 0.0,
        }
    }

    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        (point.x - center.x).abs() <= self.half_extents.x
            && (point.y - center.y).abs() <= self.half_extents.y
    }
}

/// Which puzzle channel an interact press drives. Light and Night
/// characters press different channels on the same interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractChannel {
    Platform,
    Vine,
}

/// World object the interact command can press. The core only publishes the
/// press; puzzle logic lives in external collaborators.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub half_extents: Vec2,
}

impl Interactable {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        (point.x - center.x).abs() <= self.half_extents.x
            && (point.y - center.y).abs() <= self.half_extents.y
    }
}
