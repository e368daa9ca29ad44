//! Command line client for MongoDB Atlas, Cloud Manager and Ops Manager.
//!
//! Layers, outermost first:
//! - [`cli`]: clap arguments, command records, output
//! - [`infrastructure`]: REST clients and dependency wiring
//! - [`application`]: the backend-dispatching store
//! - [`domain`]: service discriminator and API records
//!
//! [`evergreen`] is the CI task graph generator behind the `genevergreen` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod evergreen;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
