use std::time::Duration;

use sinkfloat::{
    Board, Cue, Difficulty, GameConfig, GameEngine, GameStatus, Muted, Session, SessionOptions,
    Sound, SoundError,
};

fn options() -> SessionOptions {
    SessionOptions {
        poll_interval: Duration::from_millis(5),
        reveal_on_end: true,
    }
}

/// Ships at A1 and C3 on a 3x3 board.
fn engine(attempts: u32) -> GameEngine {
    let mut board = Board::new(3, 3).unwrap();
    board.place_ship(0, 0).unwrap();
    board.place_ship(2, 2).unwrap();
    GameEngine::with_board(GameConfig::new(3, 3, 2, attempts), board).unwrap()
}

/// Records cues, optionally failing every one of them.
#[derive(Default)]
struct Recorder {
    cues: Vec<Cue>,
    fail: bool,
}

impl Sound for &mut Recorder {
    fn play(&mut self, cue: Cue) -> Result<(), SoundError> {
        self.cues.push(cue);
        if self.fail {
            Err(SoundError::Io(std::io::Error::other("no audio device")))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_sinking_all_ships_wins() {
    let mut engine = engine(5);
    let mut sound = Recorder::default();
    let input: &[u8] = b"A1\nb2\nc3\n";
    let mut session = Session::new(input, Vec::new(), &mut sound, options());

    let outcome = session.play(&mut engine).await.unwrap();
    assert_eq!(
        outcome,
        sinkfloat::SessionOutcome {
            status: GameStatus::Won,
            shots: 3
        }
    );
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("A1: hit! Ship sunk."));
    assert!(out.contains("B2: water."));
    assert!(out.contains("Ships left: 0   Attempts left: 4"));
    assert!(out.contains("End game: All ships sunk!"));
    assert_eq!(sound.cues, vec![Cue::Theme, Cue::Explosion, Cue::WaterDrop, Cue::Explosion]);
}

#[tokio::test]
async fn test_running_out_of_attempts_loses() {
    let mut engine = engine(2);
    let input: &[u8] = b"B1\nB1\nA1\n";
    let mut session = Session::new(input, Vec::new(), Muted, options());

    let outcome = session.play(&mut engine).await.unwrap();
    assert_eq!(outcome.status, GameStatus::Lost);
    assert_eq!(outcome.shots, 2);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("End game: 0 attempts left!"));
    // final board reveals the ships that were never found
    assert!(out.contains(" 1  S o ."));
    assert!(out.contains(" 3  . . S"));
}

#[tokio::test]
async fn test_bad_input_keeps_playing() {
    let mut engine = engine(5);
    let input: &[u8] = b"fire!\nZ9\nA1\nA1\nhelp\n\nquit\nC3\n";
    let mut session = Session::new(input, Vec::new(), Muted, options());

    let outcome = session.play(&mut engine).await.unwrap();
    assert_eq!(outcome.status, GameStatus::InProgress);
    assert_eq!(outcome.shots, 1);
    assert_eq!(engine.ships_left(), 1);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Invalid command \"fire!\""));
    assert!(out.contains("Z9 is off the board."));
    assert!(out.contains("A1: That ship is already sunk"));
    assert!(out.contains("Commands:"));
    assert!(out.contains("Game abandoned."));
}

#[tokio::test]
async fn test_sound_failure_is_not_fatal() {
    let mut engine = engine(5);
    let mut sound = Recorder {
        fail: true,
        ..Recorder::default()
    };
    let input: &[u8] = b"A1\nC3\n";
    let mut session = Session::new(input, Vec::new(), &mut sound, options());

    let outcome = session.play(&mut engine).await.unwrap();
    assert_eq!(outcome.status, GameStatus::Won);
    drop(session);
    assert_eq!(sound.cues.len(), 3);
}

#[tokio::test]
async fn test_choose_difficulty() {
    let input: &[u8] = b"7\nhard\n";
    let mut session = Session::new(input, Vec::new(), Muted, options());
    assert_eq!(session.choose_difficulty().await.unwrap(), Some(Difficulty::Hard));
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("1) Easy (5x5) - 5 boats - 15 attempts"));
    assert!(out.contains("Invalid selection"));

    let input: &[u8] = b"q\n";
    let mut session = Session::new(input, Vec::new(), Muted, options());
    assert_eq!(session.choose_difficulty().await.unwrap(), None);

    let input: &[u8] = b"";
    let mut session = Session::new(input, Vec::new(), Muted, options());
    assert_eq!(session.choose_difficulty().await.unwrap(), None);
}

#[tokio::test]
async fn test_poll_ends_game_while_input_is_idle() {
    let mut engine = engine(5);
    let (mut writer, reader) = tokio::io::duplex(64);
    use tokio::io::AsyncWriteExt;
    writer.write_all(b"A1\nC3\n").await.unwrap();
    // keep the writer open: only the poll can end the game
    let mut session = Session::new(
        tokio::io::BufReader::new(reader),
        Vec::new(),
        Muted,
        options(),
    );
    let outcome = tokio::time::timeout(Duration::from_secs(5), session.play(&mut engine))
        .await
        .expect("poll should end the game")
        .unwrap();
    assert_eq!(outcome.status, GameStatus::Won);
    drop(writer);
}
