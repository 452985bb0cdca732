use serde::{Deserialize, Serialize};

/// Last-in first-out frontier used by iterative DFS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifoStack<T> {
    items: Vec<T>,
}

impl<T> Default for LifoStack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> LifoStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: PartialEq> LifoStack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}
