use crate::{
    common::{BoardError, ShotOutcome},
    game::{GameEngine, GameStatus},
};
use rand::{seq::IteratorRandom, Rng};

/// Interface implemented by automated players.
pub trait Player {
    /// Choose the next cell to fire at, or `None` if there is nothing left to try.
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        engine: &GameEngine,
    ) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}

/// Fires at a uniformly chosen cell it has not fired at before.
#[derive(Debug, Default)]
pub struct RandomPlayer {
    hits: usize,
    misses: usize,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl Player for RandomPlayer {
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        engine: &GameEngine,
    ) -> Option<(usize, usize)> {
        engine.board().shots().iter_clear_bits().choose(rng)
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.hits += 1,
            ShotOutcome::Miss => self.misses += 1,
        }
    }
}

/// Let `player` fire until the game ends or it runs out of targets.
pub fn play_out<P, R>(
    engine: &mut GameEngine,
    player: &mut P,
    rng: &mut R,
) -> Result<GameStatus, BoardError>
where
    P: Player,
    R: Rng + ?Sized,
{
    while engine.status() == GameStatus::InProgress {
        let Some(coord) = player.select_target(rng, engine) else {
            break;
        };
        let outcome = engine.fire(coord.0, coord.1)?;
        player.handle_shot_result(coord, outcome);
    }
    log::info!(
        "game finished {:?} after {} shots",
        engine.status(),
        engine.shots_fired()
    );
    Ok(engine.status())
}
