pub mod support;

mod config;
mod errors;
mod listings;
mod logging;
mod paths;
mod tours;
mod trees;
