//! Plate shapes and well addressing.
//!
//! A plate is a grid of `n_rows × n_columns` wells. Wells are numbered
//! row-major (`index = row * n_columns + column`) and named by a row label
//! followed by a 1-based column number: `A1`, `B7`, `H12`.
//!
//! Row labels run `A..Z` and then continue spreadsheet-style (`AA`, `AB`, …)
//! so that plates with more than 26 rows, such as 1536-well plates, keep a
//! one-to-one mapping between indices and names.
//!
//! # Examples
//!
//! ```
//! # use platemap_core::well::{PlateShape, WellName};
//! let plate = PlateShape::default(); // 8 x 12
//! assert_eq!(plate.n_wells(), 96);
//!
//! let well: WellName = "h12".parse().unwrap();
//! assert_eq!(well.to_string(), "H12");
//! assert_eq!(plate.name_to_index(&well), Some(95));
//! assert_eq!(plate.index_to_name(0).map(|w| w.to_string()), Some("A1".to_string()));
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors raised while constructing plates or parsing well names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WellError {
    #[error(
        "invalid well name `{0}`, expected row letters followed by a column number (e.g. `A1`, `h12`, `B07`)"
    )]
    InvalidName(String),

    #[error("plate must have at least one row and one column, got {n_rows}x{n_columns}")]
    EmptyPlate { n_rows: usize, n_columns: usize },
}

/// Returns the label of the zero-based `row`: `A`, `B`, … `Z`, `AA`, `AB`, …
///
/// # Examples
///
/// ```
/// # use platemap_core::well::row_label;
/// assert_eq!(row_label(0), "A");
/// assert_eq!(row_label(7), "H");
/// assert_eq!(row_label(26), "AA");
/// assert_eq!(row_label(31), "AF");
/// ```
pub fn row_label(row: usize) -> String {
    let mut letters = Vec::new();
    let mut n = row + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Parses a row label (case-insensitive) back into a zero-based row.
fn parse_row_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut acc: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    Some(acc - 1)
}

/// The name of a single well: a zero-based row and a one-based column.
///
/// Parsing is case-insensitive on the row letters and accepts zero-padded
/// columns, so `"a1"`, `"A01"` and `"A001"` all name the same well. The
/// canonical form produced by [`Display`](fmt::Display) is uppercase and
/// unpadded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WellName {
    row: usize,
    column: usize,
}

impl WellName {
    /// Creates a well name from a zero-based row and a one-based column.
    ///
    /// Returns `None` for column `0`.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (column > 0).then_some(Self { row, column })
    }

    /// Returns the zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the one-based column number.
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns the row label, e.g. `"H"`.
    pub fn row_label(self) -> String {
        row_label(self.row)
    }
}

impl fmt::Display for WellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.column)
    }
}

impl FromStr for WellName {
    type Err = WellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WellError::InvalidName(s.to_string());

        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (letters, digits) = trimmed.split_at(split);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let row = parse_row_label(letters).ok_or_else(invalid)?;
        let column: usize = digits.parse().map_err(|_| invalid())?;

        WellName::new(row, column).ok_or_else(invalid)
    }
}

/// The grid shape of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateShape {
    n_rows: usize,
    n_columns: usize,
}

impl PlateShape {
    /// Creates a plate shape.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::EmptyPlate`] if either dimension is zero.
    pub fn new(n_rows: usize, n_columns: usize) -> Result<Self, WellError> {
        if n_rows == 0 || n_columns == 0 {
            return Err(WellError::EmptyPlate { n_rows, n_columns });
        }
        Ok(Self { n_rows, n_columns })
    }

    pub fn n_rows(self) -> usize {
        self.n_rows
    }

    pub fn n_columns(self) -> usize {
        self.n_columns
    }

    /// Total number of wells.
    pub fn n_wells(self) -> usize {
        self.n_rows * self.n_columns
    }

    /// The larger of the two dimensions, which drives default sizing.
    pub fn max_dimension(self) -> usize {
        self.n_rows.max(self.n_columns)
    }

    /// Row labels from top to bottom.
    pub fn row_labels(self) -> impl Iterator<Item = String> {
        (0..self.n_rows).map(row_label)
    }

    /// Returns `true` if the well lies within this plate.
    pub fn contains(self, well: &WellName) -> bool {
        well.row < self.n_rows && well.column <= self.n_columns
    }

    /// Converts a row-major index into a well name.
    ///
    /// Returns `None` if `index` is outside the plate.
    pub fn index_to_name(self, index: usize) -> Option<WellName> {
        (index < self.n_wells()).then(|| WellName {
            row: index / self.n_columns,
            column: index % self.n_columns + 1,
        })
    }

    /// Converts a well name into its row-major index.
    ///
    /// Returns `None` if the well lies outside the plate.
    pub fn name_to_index(self, well: &WellName) -> Option<usize> {
        self.contains(well)
            .then(|| well.row * self.n_columns + (well.column - 1))
    }

    /// Iterates over all wells in index order.
    pub fn wells(self) -> impl Iterator<Item = WellName> {
        (0..self.n_wells()).filter_map(move |index| self.index_to_name(index))
    }
}

impl Default for PlateShape {
    /// The standard 96-well plate: 8 rows by 12 columns.
    fn default() -> Self {
        Self {
            n_rows: 8,
            n_columns: 12,
        }
    }
}

impl fmt::Display for PlateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.n_rows, self.n_columns)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn shape_strategy() -> impl Strategy<Value = PlateShape> {
        (1usize..64, 1usize..64).prop_map(|(r, c)| PlateShape { n_rows: r, n_columns: c })
    }

    /// Every index maps to a name that maps back to the same index.
    fn check_index_name_roundtrip(shape: PlateShape, seed: usize) -> Result<(), TestCaseError> {
        let index = seed % shape.n_wells();
        let name = shape.index_to_name(index);
        prop_assert!(name.is_some());
        let name = name.unwrap();
        prop_assert_eq!(shape.name_to_index(&name), Some(index));

        let reparsed: WellName = name.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, name);
        Ok(())
    }

    /// Row labels decode back to the row they were produced from.
    fn check_row_label_roundtrip(row: usize) -> Result<(), TestCaseError> {
        prop_assert_eq!(parse_row_label(&row_label(row)), Some(row));
        prop_assert_eq!(parse_row_label(&row_label(row).to_lowercase()), Some(row));
        Ok(())
    }

    proptest! {
        #[test]
        fn index_name_roundtrip(shape in shape_strategy(), seed in any::<usize>()) {
            check_index_name_roundtrip(shape, seed)?;
        }

        #[test]
        fn row_label_roundtrip(row in 0usize..20_000) {
            check_row_label_roundtrip(row)?;
        }
    }
}
