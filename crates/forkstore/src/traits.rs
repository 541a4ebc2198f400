//! Store trait: the abstract read/write capability over a single value.
//!
//! Both [`BaseStore`](crate::BaseStore) and [`ForkedStore`](crate::ForkedStore)
//! implement this trait, which is what lets forks chain off any store
//! uniformly without knowing its concrete shape.

use crate::error::Result;

/// The Store trait: read/write over one value slot, with optional fallback.
///
/// # Design Notes
///
/// - **Writes are local**: `write` only ever touches the implementor's own
///   cell. A fork never mutates its parent.
/// - **Reads may fall back**: `read` on a fork consults the parent chain
///   when the local cell is unset, and fails with `UnsetValue` only when
///   the whole chain is unset. No default value is substituted.
/// - **Object safety**: the trait is object-safe so forks can hold
///   `Arc<dyn Store<V>>` parents of either variant.
pub trait Store<V>: Send + Sync {
    /// Resolve the current value, falling back along the parent chain.
    fn read(&self) -> Result<V>;

    /// Set the local cell to `value`. Never touches a parent, never fails.
    fn write(&self, value: V);

    /// Resolve the current value, then write `value` locally.
    ///
    /// Returns the pre-write value. Fail-fast: if the read fails, the write
    /// is not performed and the error propagates.
    ///
    /// Implementors hold their local write lock across both steps, so no
    /// write to the same instance can interleave between the read and the
    /// write.
    fn read_then_write(&self, value: V) -> Result<V> {
        let previous = self.read()?;
        self.write(value);
        Ok(previous)
    }
}
