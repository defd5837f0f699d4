#![forbid(unsafe_code)]

//! The continuation monad, packaged as an `Observable`.
//!
//! This crate provides one abstraction:
//!
//! - [`Observable`]: a suspended computation in continuation-passing style,
//!   with `unit`/`just`, `map`, `bind`/`flat_map`, `filter`, `call_cc`, and
//!   `subscribe`.
//! - [`Escape`]: the continuation captured by [`Observable::call_cc`].
//! - [`Continuation`]: the shared callback type computations receive.
//!
//! # Architecture
//!
//! An observable owns a single `Rc<dyn Fn(Continuation<T, R>) -> R>`.
//! Combinators never run anything; they wrap the source in a new closure.
//! `subscribe` runs the whole chain on the caller's stack.
//!
//! This is not a stream: a computation delivers at most one value per
//! continuation call, and there is no cancellation or backpressure.
//!
//! # Invariants
//!
//! 1. Construction is pure and total; evaluation is deferred to `subscribe`.
//! 2. `map` satisfies the functor laws and `unit`/`bind` the monad laws.
//! 3. Jumping through an [`Escape`] delivers straight to the continuation
//!    captured by `call_cc`, discarding everything composed after the jump.
//!
//! # Example
//!
//! ```
//! use kont_observable::Observable;
//!
//! let eight = Observable::unit(3)
//!     .map(|x| x + 1)
//!     .bind(|x| Observable::unit(x * 2));
//! assert_eq!(eight.subscribe(Some), Some(8));
//! ```

pub mod observable;

pub use kont_core::{Functor, Monad};
pub use observable::{Continuation, Escape, Observable};
