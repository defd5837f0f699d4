#![forbid(unsafe_code)]

//! Core: function utilities and algebraic capability traits.
//!
//! # Role in kont
//! `kont-core` is the foundation layer. It owns the two leaf combinators
//! every CPS encoding leans on ([`identity`] and [`compose`]) and the
//! capability traits ([`Functor`], [`Monad`]) that let callers treat
//! `kont-observable::Observable` polymorphically alongside other monadic
//! types such as [`Identity`].
//!
//! # How it fits in the system
//! `kont-observable` fuses its `map` continuation with [`compose`], uses
//! [`identity`] as the default continuation for equality and evaluation,
//! and implements [`Functor`] and [`Monad`] by delegating to its inherent
//! combinators.

pub mod logging;
pub mod typeclass;
pub mod util;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

pub use typeclass::{Functor, Identity, Monad};
pub use util::{compose, identity};
