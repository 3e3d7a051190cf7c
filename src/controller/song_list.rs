//! Ordered list of song input rows. Never empty.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// One editable (name, year) row as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRow {
    pub id: RowId,
    pub name: String,
    pub year: String,
    pub name_invalid: bool,
    pub year_invalid: bool,
}

impl SongRow {
    fn empty(id: RowId) -> Self {
        Self {
            id,
            name: String::new(),
            year: String::new(),
            name_invalid: false,
            year_invalid: false,
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.year.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SongList {
    rows: Vec<SongRow>,
    next_id: u64,
}

impl Default for SongList {
    fn default() -> Self {
        let mut list = Self {
            rows: Vec::new(),
            next_id: 0,
        };
        list.add_row();
        list
    }
}

impl SongList {
    pub fn rows(&self) -> &[SongRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [SongRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(SongRow::empty(id));
        id
    }

    /// Deletes the row, or clears it when it is the last one left.
    /// Returns `true` only when a row was actually deleted.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.id == id) else {
            return false;
        };
        if self.rows.len() > 1 {
            self.rows.remove(index);
            true
        } else {
            self.rows[index].clear();
            false
        }
    }

    /// Drops every row and starts over with a single empty one.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.add_row();
    }

    pub fn set_name(&mut self, id: RowId, name: String) {
        if let Some(row) = self.row_mut(id) {
            row.name = name;
        }
    }

    pub fn set_year(&mut self, id: RowId, year: String) {
        if let Some(row) = self.row_mut(id) {
            row.year = year;
        }
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut SongRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}
