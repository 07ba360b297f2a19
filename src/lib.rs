//! Normalization of cellular radio readings into measurement records.
//!
//! Raw, technology specific cell readings go through [`parser`], which picks
//! the serving cell and derives band and frequency via [`band`]. The result is
//! merged with location and probe results into a [`signal::Signal`].

pub mod band;
pub mod capture;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod platform;
pub mod sentinel;
pub mod signal;
