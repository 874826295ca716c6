//! blogsync - Publish a notes vault as a Hugo blog
//!
//! Mirrors posts from a local notes directory into a Hugo site, rewrites
//! their media links, builds the site, commits and pushes the sources, and
//! force-pushes the build output to a hosting branch.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

pub use error::BlogsyncError;
