//! Parallel evaluation over a shared parse cache
//!
//! Rows are evaluated concurrently by the host; the only shared mutable
//! state is the parse cache.

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const ROWS_PER_THREAD: usize = 200;

#[test]
fn shared_evaluator_gives_same_answer_on_every_thread() {
    let (vod, sink) = evaluator(Some("2013-03-15"));
    let vod = Arc::new(vod);
    let days = Arc::new(sample_days());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let vod = Arc::clone(&vod);
            let days = Arc::clone(&days);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..ROWS_PER_THREAD)
                    .map(|_| vod.exec(Some(&*days)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        for result in h.join().unwrap() {
            assert_eq!(result.as_deref(), Some("21.0b1"));
        }
    }
    assert!(sink.is_empty());
}

#[test]
fn evaluators_sharing_a_cache_parse_each_key_once() {
    let cache = Arc::new(ParseCache::new());
    let days = Arc::new(sample_days());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let days = Arc::clone(&days);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let (vod, _) = evaluator_with_cache(Some("2013-03-31"), cache);
                barrier.wait();
                for _ in 0..ROWS_PER_THREAD {
                    assert_eq!(vod.exec(Some(&*days)).as_deref(), Some("21.0|21.1"));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    // Five reporting days; keys of other days are never parsed
    let stats = cache.stats();
    assert_eq!(stats.entries, 5);
    let lookups = (THREADS * ROWS_PER_THREAD * 5) as u64;
    assert_eq!(stats.hits + stats.misses, lookups);
    assert!(stats.hits >= lookups - (THREADS * 5) as u64);
}

#[test]
fn warm_and_cold_cache_agree() {
    let days = sample_days();
    let warm_cache = Arc::new(ParseCache::new());
    let (warm, _) = evaluator_with_cache(Some("2013-03-12"), Arc::clone(&warm_cache));
    warm.exec(Some(&days));
    assert!(!warm_cache.is_empty());

    let (cold, _) = evaluator(Some("2013-03-12"));
    assert_eq!(warm.exec(Some(&days)), cold.exec(Some(&days)));
}
