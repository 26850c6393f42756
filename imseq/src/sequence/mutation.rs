use crate::error::{self, Mutation};

use super::sequence_core::Sequence;
use super::view::View;

/// Structural changes for list-like containers.
///
/// Generic code that edits "some list" goes through this trait. Growable
/// containers such as `Vec` apply the change; immutable sequences refuse
/// every call with [`UnsupportedMutation`](error::Error::UnsupportedMutation)
/// and are left exactly as they were.
pub trait MutableList<T> {
    /// Insert `item` before position `index` (`index == len` appends)
    fn try_insert(&mut self, index: usize, item: T) -> error::Result<()>;

    /// Remove and return the item at `index`
    fn try_remove(&mut self, index: usize) -> error::Result<T>;

    /// Replace the item at `index`, returning the old one
    fn try_set(&mut self, index: usize, item: T) -> error::Result<T>;

    fn try_push(&mut self, item: T) -> error::Result<()>;

    fn try_extend<I>(&mut self, items: I) -> error::Result<()>
    where
        I: IntoIterator<Item = T>;

    fn try_clear(&mut self) -> error::Result<()>;
}

impl<T> MutableList<T> for Vec<T> {
    fn try_insert(&mut self, index: usize, item: T) -> error::Result<()> {
        if index > self.len() {
            return Err(error::Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.insert(index, item);
        Ok(())
    }

    fn try_remove(&mut self, index: usize) -> error::Result<T> {
        if index >= self.len() {
            return Err(error::Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.remove(index))
    }

    fn try_set(&mut self, index: usize, item: T) -> error::Result<T> {
        let len = self.len();
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(error::Error::IndexOutOfRange { index, len }),
        }
    }

    fn try_push(&mut self, item: T) -> error::Result<()> {
        self.push(item);
        Ok(())
    }

    fn try_extend<I>(&mut self, items: I) -> error::Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
        Ok(())
    }

    fn try_clear(&mut self) -> error::Result<()> {
        self.clear();
        Ok(())
    }
}

// Sequences never change after construction, whatever is asked of them.
macro_rules! impl_read_only {
    ($name:ident) => {
        impl<T> MutableList<T> for $name<T> {
            fn try_insert(&mut self, _index: usize, _item: T) -> error::Result<()> {
                Err(error::Error::UnsupportedMutation(Mutation::Insert))
            }

            fn try_remove(&mut self, _index: usize) -> error::Result<T> {
                Err(error::Error::UnsupportedMutation(Mutation::Remove))
            }

            fn try_set(&mut self, _index: usize, _item: T) -> error::Result<T> {
                Err(error::Error::UnsupportedMutation(Mutation::Set))
            }

            fn try_push(&mut self, _item: T) -> error::Result<()> {
                Err(error::Error::UnsupportedMutation(Mutation::Push))
            }

            fn try_extend<I>(&mut self, _items: I) -> error::Result<()>
            where
                I: IntoIterator<Item = T>,
            {
                Err(error::Error::UnsupportedMutation(Mutation::Extend))
            }

            fn try_clear(&mut self) -> error::Result<()> {
                Err(error::Error::UnsupportedMutation(Mutation::Clear))
            }
        }
    };
}

impl_read_only!(Sequence);
impl_read_only!(View);
