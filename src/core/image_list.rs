//! Ordered list of image paths addressed by stable row identifiers.
//!
//! The list is owned by the application window. Viewers never hold on to
//! entries directly: they keep a [`RowId`] and resolve it through a
//! [`RowProvider`] each time they need the path, so removing a row is
//! observed as [`ViewerError::NotFound`] instead of a dangling reference.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};

/// Opaque handle to a row. Identifiers are never reused within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lookup capability a viewer needs from the list that owns the rows.
pub trait RowProvider {
    fn previous_row(&self, row: RowId) -> Option<RowId>;
    fn next_row(&self, row: RowId) -> Option<RowId>;
    fn path_for_row(&self, row: RowId) -> Result<PathBuf>;
}

#[derive(Debug, Default)]
pub struct ImageList {
    rows: Vec<(RowId, PathBuf)>,
    next_id: u64,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut list = Self::new();
        for path in paths {
            list.push(path);
        }
        list
    }

    pub fn push(&mut self, path: PathBuf) -> RowId {
        let row = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push((row, path));
        row
    }

    pub fn remove(&mut self, row: RowId) -> Option<PathBuf> {
        let index = self.index_of(row)?;
        Some(self.rows.remove(index).1)
    }

    /// Drops the row of an image that failed to decode, so stepping in the
    /// same direction moves past it. Other errors leave the list alone.
    pub fn forget_undecodable(&mut self, error: &ViewerError) -> Option<RowId> {
        let ViewerError::Decode { path, .. } = error else {
            return None;
        };
        let row = self.find_row(path)?;
        self.remove(row);
        Some(row)
    }

    pub fn find_row(&self, path: &Path) -> Option<RowId> {
        self.rows.iter().find(|(_, p)| p == path).map(|(row, _)| *row)
    }

    pub fn first_row(&self) -> Option<RowId> {
        self.rows.first().map(|(row, _)| *row)
    }

    /// Zero-based position of `row`, if it is still in the list.
    pub fn index_of(&self, row: RowId) -> Option<usize> {
        self.rows.iter().position(|(r, _)| *r == row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowProvider for ImageList {
    fn previous_row(&self, row: RowId) -> Option<RowId> {
        let index = self.index_of(row)?;
        index
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|(r, _)| *r)
    }

    fn next_row(&self, row: RowId) -> Option<RowId> {
        let index = self.index_of(row)?;
        self.rows.get(index + 1).map(|(r, _)| *r)
    }

    fn path_for_row(&self, row: RowId) -> Result<PathBuf> {
        self.rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, path)| path.clone())
            .ok_or(ViewerError::NotFound(row))
    }
}
