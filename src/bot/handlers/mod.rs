mod command_public;

pub use command_public::*;
