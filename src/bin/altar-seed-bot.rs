use std::env;

use altar_seed_bot::bot::start_dispatcher;
use altar_seed_bot::config::{Config, TOKEN_ENV};
use anyhow::{anyhow, Result};
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// 配置文件路径，不存在时使用默认配置
    #[arg(short, long, default_value = "./config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // token 缺失时在任何网络请求之前退出
    let config = Config::new(&args.config, env::var(TOKEN_ENV).ok())?;

    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", &config.log_level);
    }

    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow!(e))?;

    start_dispatcher(config).await
}
