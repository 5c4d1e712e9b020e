//! Integration tests for version-on-date resolution
//!
//! Organized by concern:
//! 1. **Sample payload** - Resolution over a realistic multi-revision document
//! 2. **Properties** - Round-trip, ordering, absence and idempotence
//! 3. **Failure policy** - One bad day voids the whole document
//! 4. **Concurrency** - Shared parse cache under parallel evaluation
//! 5. **Configuration** - Evaluators built from TOML files
//!
//! ## Running These Tests
//!
//! ```bash
//! cargo test --test resolution
//! cargo test --test resolution -- --nocapture   # show tracing output
//! ```

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod configuration;
mod failure_policy;
