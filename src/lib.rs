//! `errsample`: keep a bounded, uniform random sample of an unbounded stream.
//!
//! Long-running services tend to produce more errors than anyone can store.
//! Keeping the first N biases the record toward startup; keeping the last N
//! toward the moment someone looked. A `Reservoir` instead retains a fixed
//! number of items chosen uniformly across everything that happened, using
//! Algorithm R (Vitter, 1985), so the retained set is representative of the
//! whole run no matter how long it gets.
//!
//! All operations take `&self` and are safe to call from multiple threads;
//! one reservoir can be shared across a whole fleet of workers. The item
//! type is generic. Error values are the motivating case, not a requirement.
//!
//! Exposed modules:
//! - `reservoir`: the sampling container and its constructors.

#![forbid(unsafe_code)]

pub mod reservoir;

pub use reservoir::Reservoir;
