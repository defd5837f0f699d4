//! Capability traits for functorial and monadic types.
//!
//! Rust has no higher-kinded types, so [`Functor::Mapped`] is a generic
//! associated type naming "the same container holding `U`". For
//! `Observable<T, R>` that is `Observable<U, R>`: the answer type stays
//! fixed while the value type changes.
//!
//! These traits carry no behavior of their own. Implementors must uphold
//! the laws below; the property tests in each crate check them.
//!
//! # Laws
//!
//! Functor:
//! 1. `m.map(identity) ≡ m`
//! 2. `m.map(f).map(g) ≡ m.map(compose(g, f))`
//!
//! Monad:
//! 1. `unit(x).bind(f) ≡ f(x)`
//! 2. `m.bind(unit) ≡ m`
//! 3. `m.bind(f).bind(g) ≡ m.bind(|x| f(x).bind(g))`

/// A type whose wrapped value can be transformed without changing its shape.
pub trait Functor {
    /// The wrapped value type.
    type Item;

    /// The same type constructor applied to `U`.
    type Mapped<U>;

    /// Apply `f` to the wrapped value.
    fn map<U, F>(&self, f: F) -> Self::Mapped<U>
    where
        U: 'static,
        F: Fn(Self::Item) -> U + 'static;
}

/// A [`Functor`] that can lift plain values and sequence dependent steps.
pub trait Monad: Functor + Sized {
    /// Lift a plain value.
    fn unit(value: Self::Item) -> Self;

    /// Feed the wrapped value into `f` and flatten the result.
    fn bind<U, F>(&self, f: F) -> Self::Mapped<U>
    where
        U: 'static,
        F: Fn(Self::Item) -> Self::Mapped<U> + 'static;
}

/// The identity monad: a value with no effect attached.
///
/// Useful as a reference model when checking another monad's laws, since
/// every computation in `Identity` is just the value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    /// Unwrap the held value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Clone> Functor for Identity<T> {
    type Item = T;
    type Mapped<U> = Identity<U>;

    fn map<U, F>(&self, f: F) -> Identity<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Identity(f(self.0.clone()))
    }
}

impl<T: Clone> Monad for Identity<T> {
    fn unit(value: T) -> Self {
        Identity(value)
    }

    fn bind<U, F>(&self, f: F) -> Identity<U>
    where
        U: 'static,
        F: Fn(T) -> Identity<U> + 'static,
    {
        f(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{compose, identity};

    fn double_via<M>(m: &M) -> M::Mapped<i32>
    where
        M: Functor<Item = i32>,
    {
        m.map(|x| x * 2)
    }

    fn lift_and_render<M>(x: i32) -> M::Mapped<String>
    where
        M: Monad<Item = i32>,
    {
        M::unit(x).map(|n| n.to_string())
    }

    #[test]
    fn identity_functor_maps_value() {
        assert_eq!(Identity(3).map(|x| x + 1), Identity(4));
    }

    #[test]
    fn generic_functor_call_site() {
        assert_eq!(double_via(&Identity(21)), Identity(42));
    }

    #[test]
    fn functor_identity_law() {
        let m = Identity("abc".to_string());
        assert_eq!(m.map(identity), m);
    }

    #[test]
    fn functor_composition_law() {
        let f = |x: i32| x + 3;
        let g = |x: i32| x * 7;
        let m = Identity(5);
        assert_eq!(m.map(f).map(g), m.map(compose(g, f)));
    }

    #[test]
    fn monad_left_identity() {
        let f = |x: i32| Identity(x * x);
        assert_eq!(Identity::unit(9).bind(f), f(9));
    }

    #[test]
    fn monad_right_identity() {
        let m = Identity(vec![1, 2]);
        assert_eq!(m.bind(Identity::unit), m);
    }

    #[test]
    fn monad_associativity() {
        let f = |x: i32| Identity(x + 1);
        let g = |x: i32| Identity(x * 10);
        let m = Identity(4);
        assert_eq!(m.bind(f).bind(g), m.bind(move |x| f(x).bind(g)));
    }

    #[test]
    fn generic_monad_call_site() {
        assert_eq!(lift_and_render::<Identity<i32>>(12), Identity("12".to_string()));
    }

    #[test]
    fn into_inner_unwraps() {
        assert_eq!(Identity('z').into_inner(), 'z');
    }
}
