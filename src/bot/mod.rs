mod command;
mod dispatcher;
mod handlers;
mod text;
mod utils;

pub use command::Command;
pub use dispatcher::{build_bot, start_dispatcher};
pub use text::*;
use teloxide::adaptors::{CacheMe, DefaultParseMode, Throttle};

pub type Bot = Throttle<CacheMe<DefaultParseMode<teloxide::Bot>>>;
