//! JSON configuration files for the command-line tools.

pub mod nodes;
pub mod reduce;
