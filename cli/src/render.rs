use std::fmt;

use sweeper_core::{CellContent, CellView, PlayEngine};

pub const HIDDEN: char = '.';
pub const FLAGGED: char = '*';
pub const EXPLORED: char = '/';
pub const MINE: char = 'X';

pub fn cell_symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => HIDDEN,
        CellView::Flagged => FLAGGED,
        CellView::Revealed(CellContent::Empty) => EXPLORED,
        CellView::Revealed(CellContent::Mine) => MINE,
        CellView::Revealed(CellContent::Hint(count)) => char::from(b'0' + count),
    }
}

/// Player board framed by a column ruler and row numbers.
///
/// Rulers show the last digit of each 1-indexed column.
pub struct BoardView<'a>(pub &'a PlayEngine);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.0;
        let (rows, columns) = engine.size();
        let label_width = rows.to_string().len();
        let ruler: String = (1..=u32::from(columns))
            .filter_map(|column| char::from_digit(column % 10, 10))
            .collect();
        let border = "—".repeat(usize::from(columns));
        let corner = "—".repeat(label_width);

        writeln!(f, "{:label_width$}│{ruler}│", "")?;
        writeln!(f, "{corner}│{border}│")?;
        for row in 0..rows {
            let line: String = (0..columns)
                .map(|column| cell_symbol(engine.cell_at((row, column))))
                .collect();
            writeln!(f, "{:>label_width$}│{line}│", u16::from(row) + 1)?;
        }
        writeln!(f, "{corner}│{border}│")
    }
}

pub fn render_board(engine: &PlayEngine) -> String {
    BoardView(engine).to_string()
}

/// Counter line shown under the board while playing.
pub fn render_status(engine: &PlayEngine) -> String {
    format!(
        "Mines left: {}, revealed {}/{}",
        engine.mines_left(),
        engine.revealed_count(),
        engine.config().safe_cell_count()
    )
}
