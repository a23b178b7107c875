//! Serialised access to the table: one transition runs at a time and
//! callers arriving meanwhile wait their turn.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

pub struct Serial<T>(Inner<T>);

impl<T> Serial<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::<T>::new(value))
    }

    /// Runs `f` with exclusive access to the value.
    ///
    /// Poisoning is ignored.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut guard = self.0.lock();

        f(&mut *guard)
    }
}
