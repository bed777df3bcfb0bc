//! Game history
//!
//! The table is an append-only list of scored guesses in the order they were
//! played. Every row has the table's column count.

use super::{Color, Error, Guess, Score};

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    guess: Guess,
    score: Score,
}

impl ScoredRow {
    #[must_use]
    pub const fn new(guess: Guess, score: Score) -> Self {
        Self { guess, score }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn full(&self) -> usize {
        self.score.full
    }

    #[inline]
    #[must_use]
    pub const fn partial(&self) -> usize {
        self.score.partial
    }
}

/// Append-only history of scored rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    nr_columns: usize,
    rows: Vec<ScoredRow>,
}

impl Table {
    #[must_use]
    pub const fn new(nr_columns: usize) -> Self {
        Self {
            nr_columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the guess does not have `nr_columns` colors
    /// - `Error::InvariantViolation` if `full + partial` exceeds `nr_columns`
    pub fn add_row(&mut self, row: ScoredRow) -> Result<(), Error> {
        if row.guess.len() != self.nr_columns {
            return Err(Error::InvalidInput(format!(
                "row has {} colors, table has {} columns",
                row.guess.len(),
                self.nr_columns
            )));
        }
        if row.score.pegs() > self.nr_columns {
            return Err(Error::InvariantViolation {
                full: row.score.full,
                partial: row.score.partial,
                columns: self.nr_columns,
            });
        }

        log::debug!("row {}: {:?} scored {}", self.rows.len(), row.guess, row.score);
        self.rows.push(row);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn nr_of_columns(&self) -> usize {
        self.nr_columns
    }

    #[inline]
    #[must_use]
    pub fn nr_of_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Row at `row`
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` past the last row.
    pub fn row(&self, row: usize) -> Result<&ScoredRow, Error> {
        self.rows.get(row).ok_or(Error::IndexOutOfBounds {
            what: "row",
            index: row,
            len: self.rows.len(),
        })
    }

    /// Color at (`row`, `column`)
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfBounds` for either coordinate.
    pub fn color(&self, row: usize, column: usize) -> Result<Color, Error> {
        self.row(row)?
            .guess
            .color(column)
            .ok_or(Error::IndexOutOfBounds {
                what: "column",
                index: column,
                len: self.nr_columns,
            })
    }

    /// # Errors
    /// Returns `Error::IndexOutOfBounds` past the last row.
    pub fn full(&self, row: usize) -> Result<usize, Error> {
        self.row(row).map(ScoredRow::full)
    }

    /// # Errors
    /// Returns `Error::IndexOutOfBounds` past the last row.
    pub fn partial(&self, row: usize) -> Result<usize, Error> {
        self.row(row).map(ScoredRow::partial)
    }

    /// Whether some row found the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.score.is_perfect(self.nr_columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;

    fn row(palette: &Palette, code: &str, full: usize, partial: usize) -> ScoredRow {
        ScoredRow::new(palette.decode_guess(code).unwrap(), Score::new(full, partial))
    }

    #[test]
    fn rows_keep_insertion_order() {
        let palette = Palette::lettered(6).unwrap();
        let mut table = Table::new(4);
        table.add_row(row(&palette, "AABB", 1, 1)).unwrap();
        table.add_row(row(&palette, "CCDD", 0, 2)).unwrap();

        assert_eq!(table.nr_of_rows(), 2);
        assert_eq!(table.full(0), Ok(1));
        assert_eq!(table.partial(1), Ok(2));
        assert_eq!(table.color(1, 2).map(|c| palette.encode(c)), Ok('D'));
        assert_eq!(palette.encode_guess(table.rows()[0].guess()), "AABB");
    }

    #[test]
    fn out_of_range_access() {
        let palette = Palette::lettered(6).unwrap();
        let mut table = Table::new(4);
        table.add_row(row(&palette, "ABCD", 0, 0)).unwrap();

        assert_eq!(
            table.full(1),
            Err(Error::IndexOutOfBounds {
                what: "row",
                index: 1,
                len: 1
            })
        );
        assert_eq!(
            table.color(0, 4),
            Err(Error::IndexOutOfBounds {
                what: "column",
                index: 4,
                len: 4
            })
        );
        assert!(table.partial(7).is_err());
    }

    #[test]
    fn too_many_pegs_is_an_invariant_violation() {
        let palette = Palette::lettered(6).unwrap();
        let mut table = Table::new(4);
        let result = table.add_row(row(&palette, "ABCD", 3, 2));

        assert_eq!(
            result,
            Err(Error::InvariantViolation {
                full: 3,
                partial: 2,
                columns: 4
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn wrong_width_is_invalid_input() {
        let palette = Palette::lettered(6).unwrap();
        let mut table = Table::new(4);
        assert!(matches!(
            table.add_row(row(&palette, "ABC", 0, 0)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn solved_once_a_row_is_all_full() {
        let palette = Palette::lettered(6).unwrap();
        let mut table = Table::new(4);
        assert!(!table.is_solved());

        table.add_row(row(&palette, "ABCD", 2, 2)).unwrap();
        assert!(!table.is_solved());

        table.add_row(row(&palette, "ABDC", 4, 0)).unwrap();
        assert!(table.is_solved());
    }
}
