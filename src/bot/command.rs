use teloxide::utils::command::BotCommands;

// NOTE: 此处必须实现 Clone，否则不满足 dptree 的 Injectable 约束
#[derive(BotCommands, Clone, PartialEq, Debug)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Welcome message")]
    Start,
    #[command(description = "Live token stats")]
    Stat,
    #[command(description = "Live chart")]
    Chart,
    #[command(description = "All official links")]
    Links,
    #[command(description = "Project roadmap")]
    Roadmap,
    #[command(description = "Whitepaper")]
    Whitepaper,
    #[command(description = "Join the community")]
    Community,
}
