//! Per-cube hover state and the rise animation.
//!
//! A hovered cube climbs by [`RISE_STEP`] every tick until it reaches
//! [`MAX_OFFSET`]. Un-hovering stops the climb but leaves the cube where it
//! is; nothing ever lowers it again.

use std::fmt;

use crate::geometry::Mesh;

pub const RISE_STEP: f32 = 0.01;
pub const MAX_OFFSET: f32 = 1.8;
/// Ticks needed to climb from 0 to `MAX_OFFSET`
pub const MAX_RISE_TICKS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// Never risen, not hovered
    Resting,
    /// Hovered and still climbing
    Rising,
    /// Hovered at the clamp
    Held,
    /// Not hovered, left at a non-zero offset
    Raised,
}

/// Hover flag and rise progress of one cube
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
    rise_ticks: u32,
}

impl HoverState {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Vertical offset; exactly `MAX_OFFSET` once the clamp is reached
    pub fn offset(&self) -> f32 {
        if self.rise_ticks >= MAX_RISE_TICKS {
            MAX_OFFSET
        } else {
            self.rise_ticks as f32 * RISE_STEP
        }
    }

    pub fn phase(&self) -> HoverPhase {
        match (self.hovered, self.rise_ticks) {
            (true, t) if t >= MAX_RISE_TICKS => HoverPhase::Held,
            (true, _) => HoverPhase::Rising,
            (false, 0) => HoverPhase::Resting,
            (false, _) => HoverPhase::Raised,
        }
    }

    fn advance(&mut self) {
        if self.hovered && self.rise_ticks < MAX_RISE_TICKS {
            self.rise_ticks += 1;
        }
    }
}

/// Hover transition emitted by pointer movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    Entered { cube: usize, name: String },
    Left { cube: usize, name: String },
}

impl fmt::Display for HoverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverEvent::Entered { name, .. } => write!(f, "Hovered over cube: {name}"),
            HoverEvent::Left { name, .. } => write!(f, "Left cube: {name}"),
        }
    }
}

/// One `HoverState` per cube, fixed in length at construction
#[derive(Debug, Clone)]
pub struct HoverAnimator {
    states: Vec<HoverState>,
}

impl HoverAnimator {
    pub fn new(cube_count: usize) -> Self {
        Self {
            states: vec![HoverState::default(); cube_count],
        }
    }

    pub fn states(&self) -> &[HoverState] {
        &self.states
    }

    pub fn state(&self, cube: usize) -> Option<&HoverState> {
        self.states.get(cube)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.states.iter().position(HoverState::is_hovered)
    }

    /// Apply the nearest pointer hit. At most one cube stays hovered: a
    /// previously hovered cube that is no longer the nearest hit is released
    /// before the new one is marked.
    pub fn apply_hit(&mut self, nearest: Option<usize>, cubes: &[Mesh]) -> Vec<HoverEvent> {
        let name = |cube: usize| cubes.get(cube).map(|m| m.name.clone()).unwrap_or_default();
        let mut events = Vec::new();

        for (cube, state) in self.states.iter_mut().enumerate() {
            if state.hovered && nearest != Some(cube) {
                state.hovered = false;
                events.push(HoverEvent::Left { cube, name: name(cube) });
            }
        }

        if let Some(cube) = nearest {
            if let Some(state) = self.states.get_mut(cube) {
                if !state.hovered {
                    state.hovered = true;
                    events.push(HoverEvent::Entered { cube, name: name(cube) });
                }
            }
        }

        events
    }

    /// Per-frame update: climb hovered cubes, then pin every cube's Y to its offset
    pub fn tick(&mut self, cubes: &mut [Mesh]) {
        for (state, cube) in self.states.iter_mut().zip(cubes.iter_mut()) {
            state.advance();
            cube.position.y = state.offset();
        }
    }
}
