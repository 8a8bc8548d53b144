//! Book catalog client (bookcat)
//!
//! Terminal application for browsing, searching, adding and exporting the
//! records of a remote book catalog API.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold plain
//! data and transitions, while `client`, `source`, `export` and `view` do the
//! network, file and terminal IO.

pub mod client;
pub mod config;
pub mod export;
pub mod headless;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
