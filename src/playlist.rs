//! The fixed playlist: track model, wraparound stepping and loading from
//! settings or a scanned directory.

mod load;
mod model;

pub use load::build;
pub use model::*;

#[cfg(test)]
mod tests;
