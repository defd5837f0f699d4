#![forbid(unsafe_code)]

//! Suspended computations in continuation-passing style.
//!
//! # Design
//!
//! [`Observable<T, R>`] holds one computation: a function that receives a
//! [`Continuation<T, R>`] and produces the answer `R`, usually by calling
//! the continuation with a `T`. Every combinator wraps the source handle in
//! a fresh closure and returns a new observable; nothing runs until
//! [`Observable::subscribe`].
//!
//! The computation lives behind an `Rc`, so cloning a handle is O(1) and
//! shares the same immutable closure. Continuations are `Rc<dyn Fn>` so a
//! computation can hand the same continuation to nested observables and so
//! [`Escape`] can own the continuation captured by [`Observable::call_cc`].
//!
//! # Answer type
//!
//! `R` is whatever the final continuation returns. It defaults to `()`.
//! Pick `Option<_>` or `Result<_, _>` to get a value back out of
//! `subscribe`, or `R = T` to compare and evaluate observables with
//! [`identity`].
//!
//! # Failure Modes
//!
//! - **Panicking callbacks**: a panic inside a mapper, binder, predicate, or
//!   continuation unwinds straight out of `subscribe`. Nothing is caught.
//! - **Deep chains**: each `map`/`bind` adds stack frames when subscribed.
//!   Chains tens of thousands deep can overflow the stack.
//! - **Equality on suppressed values**: comparing observables whose filter
//!   rejects the value compares `R::default()` answers, not values.

use std::fmt;
use std::rc::Rc;

use kont_core::{Functor, Monad, compose, identity};

#[cfg(feature = "tracing")]
use kont_core::trace;

/// A shared callback receiving a computation's value.
pub type Continuation<T, R = ()> = Rc<dyn Fn(T) -> R>;

type Computation<T, R> = Rc<dyn Fn(Continuation<T, R>) -> R>;

/// A lazily evaluated computation that delivers a `T` to its continuation.
///
/// # Invariants
///
/// 1. Construction never runs the computation or any supplied function.
/// 2. Each `subscribe` runs the computation exactly once.
/// 3. `map`, `bind`, and `call_cc` call the downstream continuation at most
///    once per delivered value; `filter` may call it zero times.
/// 4. An observable is never mutated after construction.
pub struct Observable<T, R = ()> {
    computation: Computation<T, R>,
}

// Manual Clone: shares the same Rc without requiring `T: Clone`.
impl<T, R> Clone for Observable<T, R> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

impl<T, R> fmt::Debug for Observable<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &std::any::type_name::<T>())
            .field("answer", &std::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static, R: 'static> Observable<T, R> {
    /// Wrap a raw computation.
    ///
    /// The computation is stored, not run.
    #[must_use]
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Continuation<T, R>) -> R + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Lift a value: the computation calls its continuation with `value`.
    #[must_use]
    pub fn unit(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |on_next| on_next(value.clone()))
    }

    /// Alias for [`Observable::unit`].
    #[must_use]
    pub fn just(value: T) -> Self
    where
        T: Clone,
    {
        Self::unit(value)
    }

    /// A computation that ignores its continuation and answers `answer`.
    ///
    /// With `R = Result<_, E>`, `abort(Err(e))` short-circuits everything
    /// chained after it.
    #[must_use]
    pub fn abort(answer: R) -> Self
    where
        R: Clone,
    {
        Self::new(move |_| answer.clone())
    }

    /// Transform the delivered value with `mapper`.
    ///
    /// The downstream continuation is fused with `mapper` via [`compose`],
    /// so `mapper` runs first.
    #[must_use]
    pub fn map<U, F>(&self, mapper: F) -> Observable<U, R>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let source = self.clone();
        let mapper = Rc::new(mapper);
        Observable::new(move |on_next: Continuation<U, R>| {
            let mapper = Rc::clone(&mapper);
            source.run(Rc::new(compose(
                move |u: U| on_next(u),
                move |t: T| mapper(t),
            )))
        })
    }

    /// Chain a dependent computation.
    ///
    /// On subscribe, the source's value is fed to `binder` and the returned
    /// observable is subscribed with the downstream continuation.
    #[must_use]
    pub fn bind<U, F>(&self, binder: F) -> Observable<U, R>
    where
        U: 'static,
        F: Fn(T) -> Observable<U, R> + 'static,
    {
        let source = self.clone();
        let binder = Rc::new(binder);
        Observable::new(move |on_next: Continuation<U, R>| {
            let binder = Rc::clone(&binder);
            source.run(Rc::new(move |a: T| binder(a).run(Rc::clone(&on_next))))
        })
    }

    /// Alias for [`Observable::bind`].
    #[must_use]
    pub fn flat_map<U, F>(&self, binder: F) -> Observable<U, R>
    where
        U: 'static,
        F: Fn(T) -> Observable<U, R> + 'static,
    {
        self.bind(binder)
    }

    /// Run `self`, discard its value, then continue with `next`.
    #[must_use]
    pub fn then<U: 'static>(&self, next: &Observable<U, R>) -> Observable<U, R> {
        let next = next.clone();
        self.bind(move |_| next.clone())
    }

    /// Only deliver values for which `predicate` holds.
    ///
    /// A rejected value never reaches the downstream continuation; the
    /// suppressed branch answers `R::default()`.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        R: Default,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Observable::new(move |on_next: Continuation<T, R>| {
            let predicate = Rc::clone(&predicate);
            source.run(Rc::new(move |x: T| {
                if predicate(&x) {
                    on_next(x)
                } else {
                    #[cfg(feature = "tracing")]
                    trace!(
                        value_type = std::any::type_name::<T>(),
                        "observable: filter suppressed value"
                    );
                    R::default()
                }
            }))
        })
    }

    /// Call with current continuation.
    ///
    /// `body` receives an [`Escape`] bound to the continuation this
    /// observable is subscribed with. Subscribing any observable produced by
    /// [`Escape::jump`] delivers its value straight to that continuation and
    /// skips everything `body` chained after the jump.
    ///
    /// ```
    /// use kont_observable::Observable;
    ///
    /// let found: Observable<i32, Option<i32>> = Observable::call_cc(|escape| {
    ///     Observable::unit(1)
    ///         .bind(move |_| escape.jump::<i32>(42))
    ///         .bind(|_| Observable::unit(99))
    /// });
    /// assert_eq!(found.subscribe(Some), Some(42));
    /// ```
    #[must_use]
    pub fn call_cc<F>(body: F) -> Self
    where
        F: Fn(Escape<T, R>) -> Observable<T, R> + 'static,
    {
        Observable::new(move |on_next: Continuation<T, R>| {
            let escape = Escape {
                on_next: Rc::clone(&on_next),
            };
            body(escape).run(on_next)
        })
    }

    /// Run the computation, delivering values to `on_next`.
    ///
    /// Returns whatever the computation answers. This is the only
    /// operation that executes anything.
    pub fn subscribe<K>(&self, on_next: K) -> R
    where
        K: Fn(T) -> R + 'static,
    {
        #[cfg(feature = "tracing")]
        trace!(
            value_type = std::any::type_name::<T>(),
            answer_type = std::any::type_name::<R>(),
            "observable: subscribe"
        );
        self.run(Rc::new(on_next))
    }

    fn run(&self, on_next: Continuation<T, R>) -> R {
        (self.computation)(on_next)
    }
}

impl<T: 'static> Observable<T, T> {
    /// Subscribe with [`identity`] and return the delivered value.
    pub fn eval(&self) -> T {
        self.subscribe(identity)
    }
}

/// Observables are equal when evaluating both with [`identity`] yields equal
/// values. Both computations are run; comparing a computation that never
/// terminates never returns.
impl<T: PartialEq + 'static> PartialEq for Observable<T, T> {
    fn eq(&self, other: &Self) -> bool {
        self.eval() == other.eval()
    }
}

/// The continuation captured by [`Observable::call_cc`].
///
/// Cloning shares the same captured continuation.
pub struct Escape<T, R = ()> {
    on_next: Continuation<T, R>,
}

impl<T, R> Clone for Escape<T, R> {
    fn clone(&self) -> Self {
        Self {
            on_next: Rc::clone(&self.on_next),
        }
    }
}

impl<T, R> fmt::Debug for Escape<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Escape")
            .field("value", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static, R: 'static> Escape<T, R> {
    /// Build an observable that ignores its own continuation and delivers
    /// `value` to the captured one instead.
    ///
    /// `U` is free so the jump fits wherever the surrounding chain expects
    /// an `Observable<U, R>`.
    #[must_use]
    pub fn jump<U: 'static>(&self, value: T) -> Observable<U, R> {
        let on_next = Rc::clone(&self.on_next);
        Observable::new(move |_: Continuation<U, R>| {
            #[cfg(feature = "tracing")]
            trace!(
                value_type = std::any::type_name::<T>(),
                "observable: escape jump"
            );
            on_next(value.clone())
        })
    }
}

impl<T: 'static, R: 'static> Functor for Observable<T, R> {
    type Item = T;
    type Mapped<U> = Observable<U, R>;

    fn map<U, F>(&self, f: F) -> Observable<U, R>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Observable::map(self, f)
    }
}

impl<T: Clone + 'static, R: 'static> Monad for Observable<T, R> {
    fn unit(value: T) -> Self {
        Observable::unit(value)
    }

    fn bind<U, F>(&self, f: F) -> Observable<U, R>
    where
        U: 'static,
        F: Fn(T) -> Observable<U, R> + 'static,
    {
        Observable::bind(self, f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
