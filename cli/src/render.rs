use std::fmt;

use mineclear_core::{CellView, Coord, Game, Snapshot};

fn glyph(view: CellView, triggered: bool) -> char {
    match view {
        _ if triggered => 'X',
        CellView {
            mine: Some(true), ..
        } => '*',
        CellView {
            adjacent_mines: Some(0),
            ..
        } => '.',
        CellView {
            adjacent_mines: Some(count),
            ..
        } => char::from(b'0' + count),
        CellView { flagged: true, .. } => 'F',
        _ => '#',
    }
}

fn digits(n: Coord) -> usize {
    n.to_string().len()
}

/// Text form of a game: columns left to right, rows top to bottom, followed
/// by a status line.
pub struct TextBoard {
    snapshot: Snapshot,
    mines_left: isize,
}

impl TextBoard {
    pub fn new<G>(game: &Game<G>) -> Self {
        Self {
            snapshot: Snapshot::from_game(game),
            mines_left: game.mines_left(),
        }
    }
}

impl fmt::Display for TextBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.snapshot.summary;
        let cell_width = digits(summary.cols);
        let label_width = digits(summary.rows);

        write!(f, "{:label_width$}", "")?;
        for x in 1..=summary.cols {
            write!(f, " {x:>cell_width$}")?;
        }
        writeln!(f)?;

        for y in 1..=summary.rows {
            write!(f, "{y:>label_width$}")?;
            for x in 1..=summary.cols {
                let view = self.snapshot.cell((x, y)).unwrap_or_default();
                let triggered = summary.triggered_mine == Some((x, y));
                write!(f, " {:>cell_width$}", glyph(view, triggered))?;
            }
            writeln!(f)?;
        }

        if summary.won {
            writeln!(f, "GameClear")
        } else if summary.game_over {
            writeln!(f, "GameOver")
        } else {
            writeln!(f, "Mines left: {}", self.mines_left)
        }
    }
}
