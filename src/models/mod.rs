//! Wire and registry types for the fake GraceDB server.
//!
//! Nothing here is persisted; the capability document is rebuilt per
//! request and event records live only as long as the process.

pub mod capabilities;
pub mod event;
