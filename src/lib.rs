//! Poll Board - Single-vote polls with a live board view
//!
//! A session keeps an ordered list of polls. Each poll accepts exactly one
//! vote and then closes, after which it shows its tally. Presentation layers
//! follow the list through a synchronous observer port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
