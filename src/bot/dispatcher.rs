use anyhow::Result;
use teloxide::adaptors::throttle::Limits;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use super::command::Command;
use super::handlers::*;
use super::Bot;
use crate::config::Config;
use crate::gecko::GeckoClient;

pub fn build_bot(token: &str) -> Bot {
    wrap_bot(teloxide::Bot::new(token))
}

/// 所有文本回复都使用 Markdown 格式
pub(crate) fn wrap_bot(bot: teloxide::Bot) -> Bot {
    bot.parse_mode(ParseMode::Markdown)
        .cache_me()
        .throttle(Limits::default())
}

pub async fn start_dispatcher(config: Config) -> Result<()> {
    let gecko = GeckoClient::new(&config.gecko)?;
    let bot = build_bot(&config.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("设置命令列表失败: {}", e);
    }

    let handler = Update::filter_message().branch(public_command_handler());

    info!("bot started, pool: {}", gecko.pool_url());

    // NOTE: 默认按聊天分组，不同聊天的命令并行处理，互不阻塞
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![gecko])
        .default_handler(|upd| async move {
            debug!("unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("command handler failed"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
