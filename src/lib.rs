// Public library interface for marketmap.
// This allows the debug CLI tool to use the core modules.

pub mod layout;
pub mod market;
pub mod render;
