#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value that bumps a shared counter when dropped, for checking that tables release the entries
/// they remove or own.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of clones sharing this counter that have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
