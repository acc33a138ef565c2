use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

fn run(args: &[&str], stdin: &[u8]) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sinkfloat"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start game binary");
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn quit_from_preset_game() {
    let out = run(&["--difficulty", "easy", "--seed", "1", "--mute", "--poll-ms", "5"], b"quit\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("5 ships hidden on a 5x5 board, 15 attempts"));
    assert!(stdout.contains("Game abandoned."));
}

#[test]
fn menu_then_quit() {
    let out = run(&["--mute"], b"2\nq\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Difficulty"));
    assert!(stdout.contains("10 ships hidden on a 10x10 board"));
}

#[test]
fn partial_custom_board_is_rejected() {
    let out = run(&["--rows", "4"], b"");
    assert!(!out.status.success());
}

#[test]
fn invalid_custom_board_is_rejected() {
    let out = run(
        &["--rows", "2", "--cols", "2", "--boats", "9", "--attempts", "3", "--mute"],
        b"",
    );
    assert!(!out.status.success());
}

#[test]
fn output_error_exits_while_stdin_stays_open() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sinkfloat"))
        .args(["--difficulty", "easy", "--seed", "1", "--mute", "--poll-ms", "5"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start game binary");

    // wait for the first prompt, then stop listening
    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !seen.ends_with(b"> ") {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "game closed stdout before prompting");
        seen.extend_from_slice(&buf[..n]);
    }
    drop(stdout);

    // the shot's output hits a closed pipe; stdin is never closed
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"B2\n").unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("game did not exit after an output error");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    drop(stdin);
    assert_eq!(status.code(), Some(1));
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    assert!(stderr.contains("Error:"));
}
