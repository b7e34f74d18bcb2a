//! Tabular rendering of a position probability matrix.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::linear::Matrix;

/// Ordinal label for a one-based position: `1st`, `2nd`, `3rd`, `11th`, `21st` and so on.
pub fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}

/// Lays out the matrix one participant per row, one draft position per column, probabilities
/// as percentages.
pub fn tabulate(matrix: &Matrix<f64>) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(12)).with(HAlign::Left),
            )];
            for _ in 0..matrix.cols() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(7)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["Participant".into()];
            for position in 0..matrix.cols() {
                header_cells.push(ordinal(position + 1).into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        });

    for participant in 0..matrix.rows() {
        let mut row_cells = vec![format!("#{}", participant + 1).into()];
        for position in 0..matrix.cols() {
            row_cells.push(format!("{:.1}%", matrix[(participant, position)] * 100.0).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    #[test]
    fn ordinals() {
        assert_eq!("1st", ordinal(1));
        assert_eq!("2nd", ordinal(2));
        assert_eq!("3rd", ordinal(3));
        assert_eq!("4th", ordinal(4));
        assert_eq!("11th", ordinal(11));
        assert_eq!("12th", ordinal(12));
        assert_eq!("13th", ordinal(13));
        assert_eq!("21st", ordinal(21));
        assert_eq!("101st", ordinal(101));
        assert_eq!("111th", ordinal(111));
    }

    #[test]
    fn tabulate_renders_every_cell() {
        let mut matrix = Matrix::allocate(2, 2);
        matrix[(0, 0)] = 0.75;
        matrix[(0, 1)] = 0.25;
        matrix[(1, 0)] = 0.25;
        matrix[(1, 1)] = 0.75;
        let rendered = format!("{}", Console::default().render(&tabulate(&matrix)));
        assert!(rendered.contains("1st"));
        assert!(rendered.contains("2nd"));
        assert!(rendered.contains("75.0%"));
        assert!(rendered.contains("25.0%"));
        assert!(rendered.contains("#1"));
        assert!(rendered.contains("#2"));
    }
}
