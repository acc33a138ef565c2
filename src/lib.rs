#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod sound;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{BitGrid, GridError};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use session::{Session, SessionOptions, SessionOutcome};
#[cfg(feature = "std")]
pub use sound::{Bell, Cue, Muted, Sound, SoundError};
