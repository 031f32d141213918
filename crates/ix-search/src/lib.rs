//! `ix-search`: decide which crossing points are interchanges.
//!
//! A crossing point is an interchange when its bottom road can reach its top
//! road through a short chain of roads.  The search follows roads in their
//! direction of travel, and may also step onto a road that shares an end
//! (forward) or a start (backward) point, which flips the walking direction.
//! The number of such flips is limited by
//! [`SearchBounds::direction_changes`](ix_core::SearchBounds).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`finder`]  | `ConnectionFinder` trait, `BoundedSearch`, `SearchOutcome` |
//! | [`path`]    | road sequence → single polyline                           |
//! | [`connect`] | `connect_all`, `clear_connections`                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Crossings searched concurrently on Rayon's thread pool.  |

pub mod connect;
pub mod finder;
pub mod path;

#[cfg(test)]
mod tests;

pub use connect::{clear_connections, connect_all};
pub use finder::{BoundedSearch, ConnectionFinder, SearchOutcome};
pub use path::merge_path;
