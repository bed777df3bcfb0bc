//! Key/value history encoding
//!
//! A game's table travels between requests as flat pairs:
//!
//! ```text
//! guess<row><col>=<symbol>   one per cell
//! full<row>=<n>
//! partial<row>=<n>
//! ```
//!
//! Rows are read from 0 upward until `guess<row>0` is missing.

use crate::core::{Error, Guess, Palette, Table};
use crate::game::Game;
use rustc_hash::FxHashMap;

#[must_use]
pub fn guess_key(row: usize, column: usize) -> String {
    format!("guess{row}{column}")
}

#[must_use]
pub fn full_key(row: usize) -> String {
    format!("full{row}")
}

#[must_use]
pub fn partial_key(row: usize) -> String {
    format!("partial{row}")
}

/// Split a form body or query string into pairs
///
/// No percent-decoding is done; the codec only ever emits plain symbols and
/// digits. A leading `?` is ignored.
///
/// # Errors
/// Returns `Error::InvalidInput` for a non-empty segment without `=`.
///
/// # Examples
/// ```
/// use mastermind_solver::params::parse_query;
///
/// let pairs = parse_query("?guess00=A&full0=1").unwrap();
/// assert_eq!(pairs[0], ("guess00".to_string(), "A".to_string()));
/// assert_eq!(pairs.len(), 2);
/// ```
pub fn parse_query(query: &str) -> Result<Vec<(String, String)>, Error> {
    query
        .trim()
        .trim_start_matches('?')
        .split('&')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| Error::InvalidInput(format!("parameter {segment:?} has no value")))
        })
        .collect()
}

/// Join pairs back into a query string
#[must_use]
pub fn to_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Replay every row found in `pairs` into `game` as recorded history
///
/// Returns the number of rows replayed.
///
/// # Errors
/// - `Error::InvalidInput` for a missing cell, a missing or non-numeric
///   `full`/`partial`, or any row the game refuses
/// - `Error::InvalidColor` for an unknown symbol
/// - `Error::InvariantViolation` for a score with too many pegs
pub fn decode_history<K, V>(
    pairs: impl IntoIterator<Item = (K, V)>,
    game: &mut Game,
) -> Result<usize, Error>
where
    K: Into<String>,
    V: Into<String>,
{
    let params: FxHashMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let nr_columns = game.nr_of_columns();

    let mut row = 0;
    while nr_columns > 0 && params.contains_key(&guess_key(row, 0)) {
        let guess = decode_row(&params, game.palette(), row, nr_columns)?;
        let full = count(&params, &full_key(row))?;
        let partial = count(&params, &partial_key(row))?;

        log::debug!("replaying row {row}");
        game.replay_guess(guess, full, partial)?;
        row += 1;
    }
    Ok(row)
}

fn decode_row(
    params: &FxHashMap<String, String>,
    palette: &Palette,
    row: usize,
    nr_columns: usize,
) -> Result<Guess, Error> {
    (0..nr_columns)
        .map(|column| {
            let key = guess_key(row, column);
            let symbol = params
                .get(&key)
                .ok_or_else(|| Error::InvalidInput(format!("missing {key}")))?;
            palette.decode(symbol)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Guess::new)
}

fn count(params: &FxHashMap<String, String>, key: &str) -> Result<usize, Error> {
    let value = params
        .get(key)
        .ok_or_else(|| Error::InvalidInput(format!("missing {key}")))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{key}={value:?} is not a peg count")))
}

/// Write `table` as pairs, row by row
#[must_use]
pub fn encode_history(table: &Table, palette: &Palette) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(table.nr_of_rows() * (table.nr_of_columns() + 2));

    for (row, scored) in table.rows().iter().enumerate() {
        for (column, &color) in scored.guess().colors().iter().enumerate() {
            pairs.push((guess_key(row, column), palette.encode(color).to_string()));
        }
        pairs.push((full_key(row), scored.full().to_string()));
        pairs.push((partial_key(row), scored.partial().to_string()));
    }
    pairs
}
