//! Configuration management for the labs exercises.
//!
//! Handles loading and saving `.labs/config.yaml` files and discovering the
//! `.labs/` directory in the filesystem. A config file can override any of the
//! exercise inputs and the default output mode.

pub mod config;
pub mod labs_dir;
