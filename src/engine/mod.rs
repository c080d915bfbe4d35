//! Random engines
//!
//! Every draw needs a pseudo-random bit generator. This module owns how that
//! generator is obtained:
//!
//! - **PerCall** (default): a fresh engine seeded from OS entropy for each
//!   draw, discarded right after. Calls share nothing.
//! - **ThreadLocal**: one engine per thread, seeded from entropy on first use
//!   and reused by later draws on the same thread. It is never shared across
//!   threads, so no locking is needed.
//!
//! Reproducible runs bypass both modes and pass a [`seeded_engine`] directly.
//!
//! # Performance
//!
//! Engines are xoshiro256++, which is fast and has good statistical properties.
//! Seeding from entropy costs a syscall, so `ThreadLocal` is the faster mode
//! for large batches.
//!
//! # Example
//!
//! ```
//! use pseudo_rand::engine::{with_engine, EngineMode};
//! use rand::Rng;
//!
//! let value: f64 = with_engine(EngineMode::PerCall, |rng| rng.gen());
//! assert!((0.0..1.0).contains(&value));
//! ```

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// Concrete engine type used by the sampler core
pub type RandomEngine = Xoshiro256PlusPlus;

/// How the sampler core obtains an engine for a draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    #[default]
    PerCall,
    ThreadLocal,
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineMode::PerCall => write!(f, "per_call"),
            EngineMode::ThreadLocal => write!(f, "thread_local"),
        }
    }
}

thread_local! {
    static THREAD_ENGINE: RefCell<RandomEngine> = RefCell::new(thread_engine_init());
}

fn thread_engine_init() -> RandomEngine {
    log::debug!("seeding thread-local engine on {:?}", std::thread::current().id());
    fresh_engine()
}

/// Create an engine seeded from OS entropy
#[inline]
pub fn fresh_engine() -> RandomEngine {
    Xoshiro256PlusPlus::from_entropy()
}

/// Create an engine with a specific seed
///
/// Useful for reproducible runs and tests.
#[inline]
pub fn seeded_engine(seed: u64) -> RandomEngine {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Lend an engine to `f` according to `mode`
///
/// `f` must not call `with_engine` again with `ThreadLocal` on the same
/// thread; the thread engine is already borrowed for the duration of `f`.
pub fn with_engine<T, F>(mode: EngineMode, f: F) -> T
where
    F: FnOnce(&mut RandomEngine) -> T,
{
    match mode {
        EngineMode::PerCall => {
            let mut rng = fresh_engine();
            f(&mut rng)
        }
        EngineMode::ThreadLocal => THREAD_ENGINE.with(|engine| f(&mut engine.borrow_mut())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_engine_reproducible() {
        let mut rng1 = seeded_engine(12345);
        let mut rng2 = seeded_engine(12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
        }
    }

    #[test]
    fn test_seeded_engine_distinct_seeds() {
        let mut rng1 = seeded_engine(1);
        let mut rng2 = seeded_engine(2);
        let a: Vec<u64> = (0..4).map(|_| rng1.gen()).collect();
        let b: Vec<u64> = (0..4).map(|_| rng2.gen()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_per_call_engines_independent() {
        let a: u64 = with_engine(EngineMode::PerCall, |rng| rng.gen());
        let b: u64 = with_engine(EngineMode::PerCall, |rng| rng.gen());
        let c: u64 = with_engine(EngineMode::PerCall, |rng| rng.gen());
        assert!(a != b || b != c, "fresh engines should not repeat");
    }

    #[test]
    fn test_thread_local_engine_advances() {
        let a: u64 = with_engine(EngineMode::ThreadLocal, |rng| rng.gen());
        let b: u64 = with_engine(EngineMode::ThreadLocal, |rng| rng.gen());
        assert_ne!(a, b, "thread engine state should carry over between calls");
    }

    #[test]
    fn test_thread_local_engines_per_thread() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    with_engine(EngineMode::ThreadLocal, |rng| rng.gen::<u64>())
                })
            })
            .collect();

        let mut values: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 4, "each thread should own its own engine");
    }

    #[test]
    fn test_engine_mode_serde() {
        let mode: EngineMode = serde_json::from_str("\"thread_local\"").unwrap();
        assert_eq!(mode, EngineMode::ThreadLocal);
        assert_eq!(EngineMode::default().to_string(), "per_call");
    }
}
