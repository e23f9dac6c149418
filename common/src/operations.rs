//! Abstract data source operations.

use std::{fmt, marker::PhantomData};

/// Operation reading a value out of a data source.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Selector of a `W`hat by a `B`y key.
///
/// The `W` type only disambiguates which value is selected, so the same key
/// (e.g. `()`) may select different values of a single data source.
pub struct By<W, B> {
    /// Type of the selected value.
    _what: PhantomData<fn() -> W>,

    /// Key to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] selector with the provided key.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] selector, returning its key.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}

impl<W, B: Clone> Clone for By<W, B> {
    fn clone(&self) -> Self {
        Self::new(self.by.clone())
    }
}

impl<W, B: Copy> Copy for By<W, B> {}

impl<W, B: fmt::Debug> fmt::Debug for By<W, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("By")
            .field(&std::any::type_name::<W>())
            .field(&self.by)
            .finish()
    }
}

#[cfg(test)]
mod spec {
    use super::By;

    #[test]
    fn key_is_kept() {
        let by = By::<String, _>::new(42_u64);
        let copy = by;

        assert_eq!(by.into_inner(), 42);
        assert_eq!(copy.into_inner(), 42);
    }

    #[test]
    fn debug_names_selected_type() {
        let by = By::<Vec<u8>, _>::new("key");

        let debug = format!("{by:?}");
        assert!(debug.starts_with("By(\""));
        assert!(debug.ends_with("Vec<u8>\", \"key\")"));
    }
}
