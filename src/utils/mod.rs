//! Generic utility primitives with zero domain knowledge.
//!
//! - `ident` - probabilistic identifier generation
//! - `io` - file I/O with consistent error handling
//! - `timestamp` - UTC timestamp formatting

pub mod ident;
pub mod io;
pub mod timestamp;
