//! Lambda front door.

pub mod lambda;
