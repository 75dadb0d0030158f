mod command_result;
pub mod context;
pub mod init;
pub mod keys;
pub mod resolve;

pub use command_result::*;
