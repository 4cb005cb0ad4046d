//! Route definitions

pub mod verification;
