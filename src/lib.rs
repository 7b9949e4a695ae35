mod config;
mod control;
mod directory;
mod errors;
mod poll;
mod probe;
mod writer;

pub mod proto;
pub mod utils;

pub use config::*;
pub use control::*;
pub use directory::*;
pub use errors::*;
pub use poll::*;
pub use probe::*;
pub use writer::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
