//! The key contract every stored record satisfies.

/// A record that exposes a totally ordered key.
///
/// The tree never compares records directly: every ordering decision goes
/// through [`Keyed::key`]. Two records with equal keys are the same entry, so
/// inserting the second one replaces the first.
///
/// The key is returned by value because it is usually a small scalar derived
/// from the record (a price, an id, a timestamp). Records keyed by something
/// expensive to clone should use a cheap surrogate key instead.
///
/// # Example
/// ```
/// use ordtree::{Keyed, RbTree};
///
/// struct Car {
///     brand: &'static str,
///     price_cents: u64,
/// }
///
/// impl Keyed for Car {
///     type Key = u64;
///
///     fn key(&self) -> u64 {
///         self.price_cents
///     }
/// }
///
/// let mut tree = RbTree::new();
/// tree.insert(Car { brand: "Ford", price_cents: 100 });
/// tree.insert(Car { brand: "Audi", price_cents: 400 });
///
/// assert_eq!(tree.minimum().unwrap().brand, "Ford");
/// ```
pub trait Keyed {
    /// The ordered projection.
    type Key: Ord;

    /// Extract the key this record is stored under.
    fn key(&self) -> Self::Key;
}

macro_rules! impl_keyed_for_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                #[inline]
                fn key(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_keyed_for_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

/// Pairs are keyed by their first component, which turns the tree into a map.
impl<K: Ord + Clone, V> Keyed for (K, V) {
    type Key = K;

    #[inline]
    fn key(&self) -> K {
        self.0.clone()
    }
}
