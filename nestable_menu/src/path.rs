//! Navigation path through a grouped option tree.

use std::ops::Deref;

/// Coordinates of one chosen option within a grouped menu level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Group index; 0 for flat lists.
    pub group_index: usize,
    pub item_index: usize,
}

impl Location {
    pub fn new(group_index: usize, item_index: usize) -> Self {
        Self {
            group_index,
            item_index,
        }
    }
}

/// Sequence of drill-down choices; its length is the nesting depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationPath {
    locations: Vec<Location>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.locations.len()
    }

    pub fn is_root(&self) -> bool {
        self.locations.is_empty()
    }

    pub(crate) fn push(&mut self, location: Location) {
        self.locations.push(location);
    }

    pub(crate) fn pop(&mut self) -> Option<Location> {
        self.locations.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.locations.clear();
    }
}

impl Deref for NavigationPath {
    type Target = [Location];

    fn deref(&self) -> &[Location] {
        &self.locations
    }
}
