//! Common utilities for the sable engine.
//!
//! This crate provides the shared infrastructure used by the other
//! components:
//! - **Warning system** - deduplicated terminal output for unsupported features
//! - **HTTP fetch** - blocking GET wrappers for document and stylesheet loading
//! - **URL resolution** - relative href resolution against a base

pub mod net;
pub mod url;
pub mod warning;
