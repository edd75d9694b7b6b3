//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the editor.
//! - `adapters`: file-system and timing implementations.

pub mod adapters;
pub mod ports;
