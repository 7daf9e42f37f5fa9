use std::collections::TryReserveError;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

pub struct Key<T>(u32, PhantomData<fn() -> T>);

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl<T> std::hash::Hash for Key<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Key<T> {}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> Key<T> {
    pub(crate) fn new(index: u32) -> Self {
        Self(index, PhantomData)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

/// Append-only storage handing out typed indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Arena<T> {
    items: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn try_alloc(&mut self, value: T) -> Result<Key<T>, TryReserveError> {
        self.items.try_reserve(1)?;
        let idx = self.items.len() as u32;
        self.items.push(value);
        Ok(Key::new(idx))
    }

    pub(crate) fn iter_enumerated(&self) -> impl Iterator<Item = (Key<T>, &T)> {
        self.items.iter().enumerate().map(|(i, item)| (Key::new(i as u32), item))
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Index<Key<T>> for Arena<T> {
    type Output = T;
    fn index(&self, index: Key<T>) -> &Self::Output {
        &self.items[index.index() as usize]
    }
}

impl<T> IndexMut<Key<T>> for Arena<T> {
    fn index_mut(&mut self, index: Key<T>) -> &mut Self::Output {
        &mut self.items[index.index() as usize]
    }
}
