#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{
    board::Cell,
    config::Difficulty,
    game::GameEngine,
};

/// Format a (row, col) pair as `B3`: lettered column, 1-based row.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `B3` (case-insensitive) into (row, col). Bounds are not checked here.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Unknown => '.',
        Cell::Water => 'o',
        Cell::Sunk => 'X',
        Cell::Ship => 'S',
    }
}

/// Draw the grid followed by the ship and attempt counters.
pub fn write_board<W: Write>(out: &mut W, engine: &GameEngine, reveal: bool) -> io::Result<()> {
    let board = engine.board();
    write!(out, "   ")?;
    for c in 0..board.cols() {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..board.rows() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..board.cols() {
            let cell = board.cell(r, c, reveal).unwrap_or(Cell::Unknown);
            write!(out, " {}", cell_char(cell))?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "Ships left: {}   Attempts left: {}",
        engine.ships_left(),
        engine.attempts_left()
    )
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Difficulty")?;
    for (i, d) in Difficulty::ALL.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, d.label())?;
    }
    Ok(())
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands:
    <cell>   fire at a cell, e.g. B3
    board    redraw the board
    help, ?  show this help
    quit, q  leave the game"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameConfig};

    #[test]
    fn coord_roundtrip() {
        assert_eq!(parse_coord("a1"), Some((0, 0)));
        assert_eq!(parse_coord("C12"), Some((11, 2)));
        assert_eq!(coord_to_string(11, 2), "C12");
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("11"), None);
        assert_eq!(parse_coord("B"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn board_hides_ships_until_revealed() {
        let mut board = Board::new(2, 3).unwrap();
        board.place_ship(0, 0).unwrap();
        board.place_ship(1, 2).unwrap();
        let mut engine = GameEngine::with_board(GameConfig::new(2, 3, 2, 5), board).unwrap();
        engine.fire(0, 0).unwrap();
        engine.fire(0, 1).unwrap();

        let mut hidden = Vec::new();
        write_board(&mut hidden, &engine, false).unwrap();
        let hidden = String::from_utf8(hidden).unwrap();
        assert_eq!(
            hidden,
            "    A B C\n 1  X o .\n 2  . . .\nShips left: 1   Attempts left: 4\n"
        );

        let mut shown = Vec::new();
        write_board(&mut shown, &engine, true).unwrap();
        assert!(String::from_utf8(shown).unwrap().contains(" 2  . . S"));
    }

    #[test]
    fn menu_lists_presets() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("1) Easy (5x5) - 5 boats - 15 attempts"));
        assert!(out.contains("2) Normal (10x10) - 10 boats - 50 attempts"));
        assert!(out.contains("3) Hard (15x15) - 15 boats - 100 attempts"));
    }
}
