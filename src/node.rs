/// A single addressable cell holding one value.
///
/// A `Node` never interprets or validates its value; it is a plain holder.  All per-pixel logic
/// lives in the [`Command`](crate::Command) applied by the [`Visitor`](crate::Visitor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the current value.  No side effects.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value unconditionally.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}
