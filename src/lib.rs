pub mod cli;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod prefix;
pub mod registry;
pub mod rpc;
