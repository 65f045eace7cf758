//! Edge Check Module
//!
//! The orchestration loop. For every configured hostname and every labelled
//! DNS server under it, in file order: resolve the hostname against that
//! server, geolocate the answer, probe it for latency, and render each stage
//! to the log.
//!
//! Failure policy: a failed or empty stage skips that (hostname, label) pair
//! and the loop moves on. An unreachable probe target does not even skip the
//! pair; the missing latency line is the finding. The run always visits
//! every pair.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
