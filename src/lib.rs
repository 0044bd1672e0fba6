// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod args;
pub mod cfd;
pub mod commands;
pub mod common;
pub mod constants;
pub mod errors;
pub mod nucleotide;
pub mod progress;
pub mod sites;
pub mod tables;

pub use crate::cfd::calculate_cfd;
pub use crate::tables::{MismatchKey, MismatchTable, PamTable, ScoreTables};
