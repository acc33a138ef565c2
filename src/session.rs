#![cfg(feature = "std")]

//! Interactive game loop: player input and the end-of-game poll share one
//! `tokio::select!`.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::time::MissedTickBehavior;

use crate::{
    common::{BoardError, ShotOutcome},
    config::{Difficulty, DEFAULT_POLL_MS},
    game::{GameEngine, GameStatus},
    render::{coord_to_string, parse_coord, write_board, write_help, write_menu},
    sound::{Cue, Sound},
};

/// Knobs for a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// How often the loop checks whether the game has ended.
    pub poll_interval: Duration,
    /// Show every ship on the final board.
    pub reveal_on_end: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            reveal_on_end: true,
        }
    }
}

/// How a played session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// `InProgress` when the player quit or input ran out.
    pub status: GameStatus,
    pub shots: usize,
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Fire(usize, usize),
    Board,
    Help,
    Quit,
    Empty,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Some(Command::Empty),
            "quit" | "q" | "exit" => Some(Command::Quit),
            "help" | "h" | "?" => Some(Command::Help),
            "board" | "b" | "show" => Some(Command::Board),
            _ => parse_coord(line).map(|(r, c)| Command::Fire(r, c)),
        }
    }
}

enum Event {
    Tick,
    Line(Option<String>),
}

/// Drives a game from line-based input, writing the view to `out`.
pub struct Session<R, W, S> {
    input: Lines<R>,
    out: W,
    sound: S,
    options: SessionOptions,
}

impl<R, W, S> Session<R, W, S>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Sound,
{
    pub fn new(input: R, out: W, sound: S, options: SessionOptions) -> Self {
        Self {
            input: input.lines(),
            out,
            sound,
            options,
        }
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Show the difficulty menu until a preset is chosen. `None` on quit or EOF.
    pub async fn choose_difficulty(&mut self) -> anyhow::Result<Option<Difficulty>> {
        loop {
            write_menu(&mut self.out)?;
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.input.next_line().await? else {
                return Ok(None);
            };
            if matches!(Command::parse(&line), Some(Command::Quit)) {
                return Ok(None);
            }
            match line.parse::<Difficulty>() {
                Ok(d) => {
                    log::info!("difficulty selected: {}", d);
                    return Ok(Some(d));
                }
                Err(e) => writeln!(self.out, "Invalid selection: {}", e)?,
            }
        }
    }

    /// Play `engine` until a poll sees the game over, the player quits, or
    /// input ends.
    pub async fn play(&mut self, engine: &mut GameEngine) -> anyhow::Result<SessionOutcome> {
        self.cue(Cue::Theme);
        write_board(&mut self.out, engine, false)?;
        self.prompt()?;

        let mut ticker = tokio::time::interval(self.options.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let event = tokio::select! {
                _ = ticker.tick() => Event::Tick,
                line = self.input.next_line() => Event::Line(line?),
            };
            match event {
                Event::Tick => {
                    if engine.status() != GameStatus::InProgress {
                        break;
                    }
                }
                Event::Line(None) => {
                    log::debug!("input closed");
                    break;
                }
                Event::Line(Some(line)) => match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Empty) => self.prompt()?,
                    Some(Command::Help) => {
                        write_help(&mut self.out)?;
                        self.prompt()?;
                    }
                    Some(Command::Board) => {
                        write_board(&mut self.out, engine, false)?;
                        self.prompt()?;
                    }
                    Some(Command::Fire(r, c)) => {
                        self.fire(engine, r, c)?;
                        self.prompt()?;
                    }
                    None => {
                        writeln!(self.out, "Invalid command \"{}\". Type help for commands.", line.trim())?;
                        self.prompt()?;
                    }
                },
            }
        }

        let status = engine.status();
        self.finish(engine, status)?;
        Ok(SessionOutcome {
            status,
            shots: engine.shots_fired(),
        })
    }

    fn fire(&mut self, engine: &mut GameEngine, r: usize, c: usize) -> anyhow::Result<()> {
        let name = coord_to_string(r, c);
        match engine.fire(r, c) {
            Ok(ShotOutcome::Hit) => {
                self.cue(Cue::Explosion);
                writeln!(self.out, "{}: hit! Ship sunk.", name)?;
                write_board(&mut self.out, engine, false)?;
            }
            Ok(ShotOutcome::Miss) => {
                self.cue(Cue::WaterDrop);
                writeln!(self.out, "{}: water.", name)?;
                write_board(&mut self.out, engine, false)?;
            }
            Err(BoardError::GridError(_)) => {
                writeln!(self.out, "{} is off the board.", name)?;
            }
            Err(e) => writeln!(self.out, "{}: {}", name, e)?,
        }
        Ok(())
    }

    fn finish(&mut self, engine: &GameEngine, status: GameStatus) -> anyhow::Result<()> {
        match status {
            GameStatus::Won => writeln!(self.out, "\nEnd game: All ships sunk!")?,
            GameStatus::Lost => writeln!(self.out, "\nEnd game: 0 attempts left!")?,
            GameStatus::InProgress => writeln!(self.out, "\nGame abandoned.")?,
        }
        if self.options.reveal_on_end {
            write_board(&mut self.out, engine, true)?;
        }
        self.out.flush()?;
        log::info!(
            "session ended {:?} after {} shots",
            status,
            engine.shots_fired()
        );
        Ok(())
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn cue(&mut self, cue: Cue) {
        if let Err(e) = self.sound.play(cue) {
            log::warn!("could not play {:?}: {}", cue, e);
        }
    }
}
