//! Library surface for the audit API (router shared with integration tests).

pub mod server;
