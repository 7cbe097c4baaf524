//! CLI commands for netpath

pub mod dispatch;
pub mod input;
pub mod list;
pub mod load;
pub mod path;
pub mod save;
pub mod serve;
