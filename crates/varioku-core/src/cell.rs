//! Board cells and pencil-mark notes.

use serde::{Deserialize, Serialize};

/// Pencil-mark digits for a single cell, stored as a bitset.
///
/// Notes are a scratchpad for the player: they are never consulted when
/// entries are validated and they are not part of the persisted state.
///
/// # Examples
///
/// ```
/// use varioku_core::NoteSet;
///
/// let mut notes = NoteSet::EMPTY;
/// notes.toggle(3);
/// notes.toggle(7);
/// assert!(notes.contains(3));
///
/// notes.toggle(3);
/// assert!(!notes.contains(3));
/// assert_eq!(notes.iter().collect::<Vec<_>>(), vec![7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoteSet(u16);

impl NoteSet {
    /// The set with no notes.
    pub const EMPTY: Self = Self(0);

    fn bit(digit: u8) -> u16 {
        assert!(
            (1..=9).contains(&digit),
            "note digit must be between 1 and 9, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Adds a digit to the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn insert(&mut self, digit: u8) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn remove(&mut self, digit: u8) {
        self.0 &= !Self::bit(digit);
    }

    /// Adds the digit if absent, removes it if present.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn toggle(&mut self, digit: u8) {
        self.0 ^= Self::bit(digit);
    }

    /// Returns true if the digit is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of noted digits.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no digit is noted.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the noted digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&digit| self.contains(digit))
    }
}

impl FromIterator<u8> for NoteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// A single board cell.
///
/// `value` is 0 for an empty cell, otherwise a digit in `1..=N` for the
/// board's size. Fixed cells are the puzzle givens: they are set when a
/// puzzle is carved and never change for the session. The error flag marks
/// the cell's current value as duplicating a peer; it is recomputed each
/// time the cell itself is (re)entered and only then.
///
/// The serialized form is exactly the persisted trio `v`, `f`, `e`, so
/// saved games written by earlier releases load unchanged. Notes are
/// transient and skipped.
///
/// # Examples
///
/// ```
/// use varioku_core::Cell;
///
/// let given = Cell::given(5);
/// assert_eq!(given.value(), 5);
/// assert!(given.is_fixed());
///
/// assert_eq!(
///     serde_json::to_string(&given).unwrap(),
///     r#"{"v":5,"f":true,"e":false}"#
/// );
///
/// let empty = Cell::EMPTY;
/// assert!(empty.is_empty());
/// assert!(!empty.is_fixed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "v")]
    value: u8,
    #[serde(rename = "f")]
    fixed: bool,
    #[serde(rename = "e")]
    error: bool,
    #[serde(skip)]
    notes: NoteSet,
}

impl Cell {
    /// An empty, unfixed, unflagged cell.
    pub const EMPTY: Self = Self {
        value: 0,
        fixed: false,
        error: false,
        notes: NoteSet::EMPTY,
    };

    /// Creates a fixed given cell holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0; a given always shows a digit.
    #[must_use]
    pub const fn given(value: u8) -> Self {
        assert!(value != 0, "a given cell must hold a digit");
        Self {
            value,
            fixed: true,
            error: false,
            notes: NoteSet::EMPTY,
        }
    }

    /// Returns the cell's digit, or 0 if empty.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns true if the cell holds no digit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns true if the cell is a puzzle given.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns true if the cell's value is flagged as conflicting.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error
    }

    /// Returns the cell's pencil-mark notes.
    #[must_use]
    pub const fn notes(&self) -> NoteSet {
        self.notes
    }

    /// Replaces the cell's value, leaving the error flag untouched.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Sets or clears the conflict flag.
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Empties the cell and clears its conflict flag. Notes are kept.
    pub fn clear(&mut self) {
        self.value = 0;
        self.error = false;
    }

    /// Toggles a pencil-mark note.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn toggle_note(&mut self, digit: u8) {
        self.notes.toggle(digit);
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_set_operations() {
        let mut set = NoteSet::EMPTY;
        assert!(set.is_empty());

        set.insert(1);
        set.insert(9);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(5));

        set.remove(1);
        assert!(!set.contains(1));

        set.toggle(5);
        assert!(set.contains(5));
        set.toggle(5);
        assert!(!set.contains(5));
    }

    #[test]
    fn test_note_set_iterates_in_order() {
        let set: NoteSet = [9, 1, 5, 3].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    #[should_panic(expected = "note digit must be")]
    fn test_note_set_rejects_zero() {
        let mut set = NoteSet::EMPTY;
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "note digit must be")]
    fn test_note_set_rejects_ten() {
        let mut set = NoteSet::EMPTY;
        set.insert(10);
    }

    #[test]
    fn test_cell_construction() {
        let cell = Cell::EMPTY;
        assert!(cell.is_empty());
        assert!(!cell.is_fixed());
        assert!(!cell.is_error());
        assert!(cell.notes().is_empty());

        let given = Cell::given(7);
        assert_eq!(given.value(), 7);
        assert!(given.is_fixed());
        assert!(!given.is_error());
    }

    #[test]
    #[should_panic(expected = "a given cell must hold a digit")]
    fn test_empty_given_panics() {
        let _ = Cell::given(0);
    }

    #[test]
    fn test_cell_mutation() {
        let mut cell = Cell::EMPTY;
        cell.set_value(4);
        cell.set_error(true);
        assert_eq!(cell.value(), 4);
        assert!(cell.is_error());

        cell.toggle_note(2);
        cell.clear();
        assert!(cell.is_empty());
        assert!(!cell.is_error());
        // Clearing the value leaves the scratchpad alone
        assert!(cell.notes().contains(2));
    }

    #[test]
    fn test_serde_shape() {
        let mut cell = Cell::EMPTY;
        cell.set_value(3);
        cell.set_error(true);
        cell.toggle_note(1);

        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"v":3,"f":false,"e":true}"#);

        let restored: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.value(), 3);
        assert!(restored.is_error());
        assert!(!restored.is_fixed());
        // Notes never round-trip
        assert!(restored.notes().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_malformed_cells() {
        assert!(serde_json::from_str::<Cell>(r#"{"v":3}"#).is_err());
        assert!(serde_json::from_str::<Cell>(r#"{"v":"three","f":false,"e":false}"#).is_err());
        assert!(serde_json::from_str::<Cell>("[]").is_err());
    }
}
