//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State in, state out (`tick` never mutates its input)
//! - No clocks, rendering, audio or platform dependencies
//! - Elapsed time and pointer motion arrive through `TickInput`

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, crossed_plane, deviation, out_of_bounds, paddle_contact, wall_bounce};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GameState, Phase, Side};
pub use tick::{TickInput, TickOutcome, tick};
