use reqwest::header::*;
use reqwest::Client;
use tracing::debug;

use super::error::*;
use super::types::*;
use crate::config::Gecko;

macro_rules! headers {
    ($($k:ident => $v:expr), *) => {{
        [
            $(($k.clone(), HeaderValue::from_static($v)),)*
        ].into_iter().collect::<HeaderMap>()
    }};
}

macro_rules! send {
    ($e:expr) => {
        $e.send()
            .await
            .and_then(reqwest::Response::error_for_status)
    };
}

#[derive(Debug, Clone)]
pub struct GeckoClient {
    client: Client,
    pool_url: String,
}

impl GeckoClient {
    pub fn new(config: &Gecko) -> Result<Self> {
        let headers = headers! {
            ACCEPT => "application/json",
            USER_AGENT => concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
        };

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, pool_url: config.pool_url() })
    }

    pub fn pool_url(&self) -> &str {
        &self.pool_url
    }

    /// 查询池子的价格、24 小时成交量和流动性
    #[tracing::instrument(skip(self))]
    pub async fn get_pool_stat(&self) -> Result<StatSnapshot> {
        let resp = send!(self.client.get(&self.pool_url))?;
        let body = resp.text().await?;
        debug!(len = body.len(), "pool payload received");
        StatSnapshot::from_json(&body)
    }

    /// 同 `get_pool_stat`，但失败时返回全部为 "Unavailable" 的快照
    pub async fn stat(&self) -> StatSnapshot {
        StatSnapshot::from_result(self.get_pool_stat().await)
    }
}
