//! The calculator state machine: digit/decimal entry, immediate left-to-right
//! operation chaining, and the single formatting boundary for results.

pub mod evaluator;
pub mod format;
pub mod operator;
