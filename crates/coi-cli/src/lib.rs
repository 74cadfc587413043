//! Library side of the `coi-index` command line.

pub mod logging;
pub mod pipeline;
