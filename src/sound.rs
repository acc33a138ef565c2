#![cfg(feature = "std")]

//! Audio cues for game events.

use std::fmt;
use std::io::{self, Write};

/// Sounds the game asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Background theme, looped for the whole game.
    Theme,
    /// A ship was hit.
    Explosion,
    /// A shot landed in the water.
    WaterDrop,
}

impl Cue {
    pub fn volume(self) -> f32 {
        match self {
            Cue::Theme => 0.2,
            Cue::Explosion | Cue::WaterDrop => 1.0,
        }
    }

    pub fn looped(self) -> bool {
        matches!(self, Cue::Theme)
    }
}

#[derive(Debug)]
pub enum SoundError {
    Io(io::Error),
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::Io(e) => write!(f, "audio output failed: {}", e),
        }
    }
}

impl std::error::Error for SoundError {}

impl From<io::Error> for SoundError {
    fn from(err: io::Error) -> Self {
        SoundError::Io(err)
    }
}

/// Something that can play a [`Cue`].
pub trait Sound {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError>;
}

/// Rings the terminal bell for one-shot cues. Looped cues are skipped.
pub struct Bell<W: Write> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sound for Bell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError> {
        if cue.looped() {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl Sound for Muted {
    fn play(&mut self, _cue: Cue) -> Result<(), SoundError> {
        Ok(())
    }
}

impl<S: Sound + ?Sized> Sound for Box<S> {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError> {
        (**self).play(cue)
    }
}
