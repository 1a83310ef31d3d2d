use std::fmt::{self, Debug, Formatter};

/// Implements `Debug` by calling the wrapped closure, for rendering ad hoc layouts (such as a
/// table's slots) inside `debug_struct` and `debug_list` without building intermediate strings.
pub struct DebugFn<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
