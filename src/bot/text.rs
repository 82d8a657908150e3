//! 各命令回复的固定内容，全部按 Telegram Markdown 格式编写

use crate::gecko::StatSnapshot;

/// /chart 发送的图表地址
pub const CHART_URL: &str =
    "https://www.geckoterminal.com/base/pools/0xae6dcae099c4c3e714cb7a2a42e71d0be3f24520";

/// /whitepaper 发送的文档地址
pub const WHITEPAPER_URL: &str = "https://seedaltar.com/whitepaper.pdf";

pub const START_TEXT: &str = concat!(
    "🌱 *WELCOME TO ALTAR SEED BOT* 🌱\n\n",
    "You are now connected to the spiritual heart of the ALTAR SEED project — ",
    "where intention becomes manifestation.\n\n",
    "Use the commands below:\n\n",
    "• /stat — Live token stats\n",
    "• /chart — Live chart\n",
    "• /links — All official links\n",
    "• /roadmap — Project roadmap\n",
    "• /whitepaper — Whitepaper\n",
    "• /community — Join the community\n",
);

pub const LINKS_TEXT: &str = concat!(
    "🔗 *ALTAR SEED — Official Links*\n\n",
    "🌐 Website: https://seedaltar.com\n",
    "📊 GeckoTerminal: https://www.geckoterminal.com/base/pools/0xae6dcae099c4c3e714cb7a2a42e71d0be3f24520\n",
    "📜 Contract: 0xab3f042069a7d819dc233025224c3c3ad7c88302\n\n",
    "🕊 Twitter: https://twitter.com/seedaltar\n",
    "💬 Telegram: https://t.me/seedaltar",
);

pub const ROADMAP_TEXT: &str = concat!(
    "📜 *ALTAR SEED ROADMAP*\n\n",
    "🔥 Phase 1 — Creation\n",
    "• Token birth\n",
    "• Contract verification\n",
    "• Whitepaper release\n",
    "• Socials launch\n\n",
    "🌱 Phase 2 — Growth\n",
    "• Community expansion\n",
    "• Bot + Dashboard\n",
    "• Liquidity growth\n\n",
    "🌕 Phase 3 — Ascension\n",
    "• Staking\n",
    "• Marketplace\n",
    "• Cross-chain expansion\n",
);

pub const COMMUNITY_TEXT: &str = concat!(
    "🤝 *Join the ALTAR SEED Community*\n\n",
    "Telegram: https://t.me/seedaltar\n",
    "Discord: https://discord.gg/seedaltar",
);

pub fn stat_text(stat: &StatSnapshot) -> String {
    format!(
        "📊 *ALTAR SEED — Live Stats*\n\n\
         💰 Price: ${}\n\
         📈 24h Volume: ${}\n\
         🌊 Liquidity: ${}\n\n\
         Powered by GeckoTerminal.",
        stat.price, stat.volume24h, stat.liquidity
    )
}

/// 图表无法作为图片发送时，改为发送链接
pub fn chart_fallback_text() -> String {
    format!("📈 *ALTAR SEED — Live Chart*\n\n{CHART_URL}")
}
