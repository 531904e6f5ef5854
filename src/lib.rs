//! Array-backed d-ary max-heap priority queue
//!
//! This crate implements a max-heap over a flat array where every node has
//! up to `d` children, with `d` chosen at construction time. Beyond the
//! usual insert/extract pair it supports in-place key increase and
//! deletion at an arbitrary array index.
//!
//! # Features
//!
//! - **Build in O(n)**: [`DaryHeap::from_vec`] heapifies an unordered
//!   vector bottom-up, so a freshly constructed heap is always valid.
//! - **Increase-key**: raise the key at a given index and let it bubble
//!   toward the root.
//! - **Delete-at**: remove the key at any index without a sentinel value,
//!   so the full key range stays usable.
//! - **Recoverable errors**: overflow, underflow, and invalid arguments
//!   are reported as [`HeapError`] results, never by aborting.
//!
//! # Example
//!
//! ```rust
//! use dheap::{DaryHeap, HeapError};
//!
//! let mut heap = DaryHeap::from_vec(4, vec![12, 3, 44, 7, 0]);
//! assert_eq!(heap.extract_max(), Ok(44));
//!
//! heap.insert(100).unwrap();
//! assert_eq!(heap.peek(), Some(&100));
//!
//! let mut empty: DaryHeap<i32> = DaryHeap::new(2);
//! assert_eq!(empty.extract_max(), Err(HeapError::Underflow));
//! ```

pub mod dary;
pub mod error;
pub mod session;

// Re-export the core types for convenience
pub use dary::DaryHeap;
pub use error::HeapError;
