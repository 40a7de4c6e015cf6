//! Integration tests
//!
//! Exercise the assembled router end to end through an in-process server.
