//! `ix-network`: from raw segments to a directed road graph with
//! grade-separated crossing points.
//!
//! # Build stages
//!
//! ```text
//! NetworkBuilder::add_polyline   → points + segments
//! build():
//!   ① aggregate  : maximal roads from segment chains, adjacency relations
//!   ② detect     : crossings between differently-layered segments
//!   ③ split      : directed shadow road for every both-way road
//!   ④ sort       : crossing attachments by distance from each road start
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`network`]   | `RoadNetwork`, `NetworkBuilder`                          |
//! | [`road`]      | `Road`, `CrossingRef`                                    |
//! | [`crossing`]  | `CrossingPoint`                                          |
//! | [`aggregate`] | segment chains → roads                                   |
//! | [`detect`]    | crossing detection over the segment grid                 |
//! | [`split`]     | both-way shadows and attachment ordering                 |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Crossing candidates computed per cell with Rayon.        |

pub mod aggregate;
pub mod crossing;
pub mod detect;
pub mod error;
pub mod network;
pub mod road;
pub mod split;


pub use crossing::CrossingPoint;
pub use error::{NetworkError, NetworkResult};
pub use network::{NetworkBuilder, RoadNetwork};
pub use road::{CrossingRef, Road};
