//! Reservoir sampling over an unbounded stream.
//!
//! Maintains a uniform sample of at most `capacity` items from a stream of
//! unknown length using **Algorithm R** (Vitter, 1985): the first `capacity`
//! items fill the buffer in arrival order, and from then on the i-th item
//! (1-indexed) enters with probability `capacity / i`, evicting a uniformly
//! chosen slot.
//!
//! ## References
//!
//! - Vitter (1985): reservoir sampling “Algorithm R”.
//!
//! Notes:
//! - Every operation takes `&self`; one mutex guards the sample state, so a
//!   single `Reservoir` can be shared across threads directly.
//! - Replacement draws come from a generator owned by the reservoir.
//!   `Reservoir::with_rng` injects a seeded one for deterministic
//!   testing/benchmarking.

use std::fmt;
use std::sync::Mutex;

use rand::prelude::*;

/// Mutable sample state, guarded by the one lock in `Reservoir`.
struct State<T, R> {
    /// Items added since construction or the last reset.
    seen: usize,
    /// Retained items. Grows by push until full, so its length is always
    /// `min(seen, capacity)`.
    slots: Vec<T>,
    rng: R,
}

/// A bounded uniform random sample of an unbounded stream.
///
/// `Reservoir` retains at most `capacity` of the items offered to `add`,
/// chosen uniformly at random across everything seen since construction or
/// the last `reset`. While fewer than `capacity` items have been added, the
/// sample is exactly those items in arrival order; beyond that, each of the
/// `added()` items is equally likely to be retained.
///
/// Methods take `&self` and are safe to call concurrently. The sample read
/// out by `sample` changes only through `add` and `reset`: randomness is
/// spent when items arrive, never at read time, so repeated reads with no
/// intervening mutation return the same items.
///
/// The item type is generic; error values are the motivating case. A
/// capacity of 0 is valid and retains nothing.
///
/// # Example
///
/// ```
/// use errsample::Reservoir;
///
/// let set = Reservoir::new(20);
/// set.add("first");
/// set.add("second");
/// set.add("third");
/// assert_eq!(set.sample(20), vec!["first", "second", "third"]);
/// ```
pub struct Reservoir<T, R = StdRng> {
    capacity: usize,
    state: Mutex<State<T, R>>,
}

impl<T> Reservoir<T> {
    /// Create a reservoir that retains up to `capacity` items, drawing
    /// replacement indices from an OS-entropy seeded `StdRng`.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_os_rng())
    }
}

impl<T> Default for Reservoir<T> {
    /// A reservoir with a capacity of 1: it retains a single item, uniformly
    /// chosen across the whole stream.
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T, R> Reservoir<T, R> {
    /// Create a reservoir that draws replacement indices from `rng`.
    ///
    /// With a seeded generator the retained sample is a pure function of the
    /// stream, which is what tests and benchmarks want.
    pub fn with_rng(capacity: usize, rng: R) -> Self {
        Self {
            capacity,
            state: Mutex::new(State {
                seen: 0,
                slots: Vec::with_capacity(capacity),
                rng,
            }),
        }
    }

    /// Maximum number of items the sample can hold. `sample` never returns
    /// more than this many.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items added since construction or the last `reset`,
    /// whether retained or not.
    pub fn added(&self) -> usize {
        self.state.lock().unwrap().seen
    }

    /// Number of items currently retained: `min(added(), capacity())`.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().slots.len()
    }

    /// Whether nothing is currently retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every retained item and zero the added counter.
    ///
    /// Capacity is unchanged; the buffer's allocation is kept for reuse.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.seen = 0;
        state.slots.clear();
    }

    /// Consume the reservoir and return the retained sample, in slot order,
    /// without cloning.
    pub fn into_sample(self) -> Vec<T> {
        self.state.into_inner().unwrap().slots
    }
}

impl<T, R: Rng> Reservoir<T, R> {
    /// Offer `item` to the sample.
    ///
    /// Below capacity the item is always retained, in arrival order. Once
    /// the buffer is full, the i-th item offered (1-indexed) replaces a
    /// uniformly chosen slot with probability `capacity / i` and is
    /// otherwise discarded, which keeps the buffer a uniform sample of
    /// everything seen.
    pub fn add(&self, item: T) {
        let mut state = self.state.lock().unwrap();
        state.seen += 1;

        if self.capacity == 0 {
            return;
        }

        if state.slots.len() < self.capacity {
            state.slots.push(item);
            return;
        }

        // seen already counts `item`, so for the i-th item the draw is
        // uniform over [0, i) and replaces with probability capacity / i.
        let seen = state.seen;
        let j = state.rng.random_range(0..seen);
        if j < self.capacity {
            state.slots[j] = item;
        }
    }
}

impl<T: Clone, R> Reservoir<T, R> {
    /// Copy out up to `n` retained items, in slot order.
    ///
    /// Returns exactly `min(n, added(), capacity())` items, cloned out of
    /// internal storage. Reading does not re-randomize: two calls with no
    /// intervening `add` or `reset` return the same items.
    pub fn sample(&self, n: usize) -> Vec<T> {
        let state = self.state.lock().unwrap();
        let take = n.min(state.slots.len());
        state.slots[..take].to_vec()
    }
}

impl<T, R> fmt::Debug for Reservoir<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("Reservoir")
            .field("capacity", &self.capacity)
            .field("seen", &state.seen)
            .field("retained", &state.slots.len())
            .finish_non_exhaustive()
    }
}
