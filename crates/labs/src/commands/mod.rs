//! Command handlers, one module per subcommand family.

pub mod all;
pub mod completion;
pub mod exercise;
pub mod list;
pub mod version;
