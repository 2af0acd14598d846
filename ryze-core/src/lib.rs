//! # ryze-core
//!
//! Core library for Ryze - a journal for worrying thoughts.
//!
//! This library provides:
//! - Domain types for thoughts and their outcome spectrum
//! - The thought-store contract (persistence stays in the shell)
//! - The analytics and scoring engine (comparisons, trend, positivity
//!   score, insight cards, message catalog)
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! The application shell owns views, persistence, reminders, and the
//! biometric gate. This crate owns everything computable: given a frozen
//! snapshot of thought records it produces chart data, a 0-100 positivity
//! score, and insight text, through pure synchronous functions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ryze_core::analytics;
//! use ryze_core::{InMemoryThoughtStore, ThoughtStore};
//!
//! let store = InMemoryThoughtStore::new();
//! let thoughts = store.all_thoughts().expect("snapshot");
//!
//! let score = analytics::positivity_score(&thoughts);
//! let cards = analytics::generate_insights(&thoughts, &mut rand::thread_rng());
//! println!("positivity {score:.0}, {} insight(s)", cards.len());
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use store::{InMemoryThoughtStore, ThoughtStore};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;
