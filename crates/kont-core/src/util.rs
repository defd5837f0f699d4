//! Leaf function combinators.

/// Return the argument unchanged.
///
/// Used as the default continuation when an observable is compared or
/// evaluated.
///
/// ```
/// use kont_core::identity;
///
/// assert_eq!(identity(7), 7);
/// assert_eq!(identity("cps"), "cps");
/// ```
#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/// Compose two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// `g` runs first. This is the order `map` relies on when it fuses a
/// transform into a downstream continuation.
///
/// ```
/// use kont_core::compose;
///
/// let inc_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(inc_then_double(3), 8);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}
