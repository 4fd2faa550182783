pub mod extract;

pub use extract::cmd_extract;
