//! Response filtering tests.
//!
//! Each module exercises one concern of the response filter through the public
//! API, using the embedded schemas and the policy fixture from `common`.

pub mod concurrency;
pub mod resources;
