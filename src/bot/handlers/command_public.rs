use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::{info, warn};

use crate::bot::command::Command;
use crate::bot::text::*;
use crate::bot::Bot;
use crate::gecko::GeckoClient;
use crate::{quote_in_group, reply_to};

pub fn public_command_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(cmd_start))
        .branch(case![Command::Stat].endpoint(cmd_stat))
        .branch(case![Command::Chart].endpoint(cmd_chart))
        .branch(case![Command::Links].endpoint(cmd_links))
        .branch(case![Command::Roadmap].endpoint(cmd_roadmap))
        .branch(case![Command::Whitepaper].endpoint(cmd_whitepaper))
        .branch(case![Command::Community].endpoint(cmd_community))
}

async fn cmd_start(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /start", msg.chat.id.0);
    reply_to!(bot, msg, START_TEXT).await?;
    Ok(())
}

async fn cmd_stat(bot: Bot, msg: Message, gecko: GeckoClient) -> Result<()> {
    info!("{}: /stat", msg.chat.id.0);
    let stat = gecko.stat().await;
    reply_to!(bot, msg, stat_text(&stat)).await?;
    Ok(())
}

async fn cmd_chart(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /chart", msg.chat.id.0);
    let photo = InputFile::url(CHART_URL.parse()?);
    if let Err(e) = quote_in_group!(bot.send_photo(msg.chat.id, photo), msg).await {
        // 该地址不一定能被 Telegram 识别为图片
        warn!("发送图表失败: {}", e);
        reply_to!(bot, msg, chart_fallback_text()).await?;
    }
    Ok(())
}

async fn cmd_links(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /links", msg.chat.id.0);
    reply_to!(bot, msg, LINKS_TEXT).await?;
    Ok(())
}

async fn cmd_roadmap(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /roadmap", msg.chat.id.0);
    reply_to!(bot, msg, ROADMAP_TEXT).await?;
    Ok(())
}

async fn cmd_whitepaper(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /whitepaper", msg.chat.id.0);
    let document = InputFile::url(WHITEPAPER_URL.parse()?);
    quote_in_group!(bot.send_document(msg.chat.id, document), msg).await?;
    Ok(())
}

async fn cmd_community(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /community", msg.chat.id.0);
    reply_to!(bot, msg, COMMUNITY_TEXT).await?;
    Ok(())
}
