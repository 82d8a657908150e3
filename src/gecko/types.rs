use serde_json::{Map, Value};
use tracing::warn;

use super::error::{GeckoError, Result};

/// 上游缺少某个字段时的占位值
pub const NOT_AVAILABLE: &str = "N/A";
/// 请求失败时的占位值
pub const UNAVAILABLE: &str = "Unavailable";

/// 一次 /stat 查询的结果，发送完回复后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSnapshot {
    pub price: String,
    pub volume24h: String,
    pub liquidity: String,
}

impl StatSnapshot {
    /// 请求失败时使用的快照，三个字段都是 "Unavailable"
    pub fn unavailable() -> Self {
        Self {
            price: UNAVAILABLE.to_owned(),
            volume24h: UNAVAILABLE.to_owned(),
            liquidity: UNAVAILABLE.to_owned(),
        }
    }

    /// 从响应体解析快照，字段缺失时按 "N/A" 处理
    ///
    /// 响应格式为 `{"data":{"attributes":{...}}}`，其中 `data`、`attributes`、
    /// `volume_usd` 缺失时视为空对象，存在但不是对象时视为错误
    pub fn from_json(body: &str) -> Result<Self> {
        let root = serde_json::from_str::<Value>(body)?;
        let root = root.as_object().ok_or(GeckoError::UnexpectedShape("response"))?;
        let data = object_at(Some(root), "data")?;
        let attrs = object_at(data, "attributes")?;
        let volume = object_at(attrs, "volume_usd")?;
        Ok(Self {
            price: field_text(attrs, "base_token_price_usd"),
            volume24h: field_text(volume, "h24"),
            liquidity: field_text(attrs, "reserve_in_usd"),
        })
    }

    /// 失败时记录日志并退回到 "Unavailable"
    pub fn from_result(result: Result<Self>) -> Self {
        result.unwrap_or_else(|e| {
            warn!("获取池子数据失败: {}", e);
            Self::unavailable()
        })
    }
}

type Object = Map<String, Value>;

fn object_at<'a>(parent: Option<&'a Object>, key: &'static str) -> Result<Option<&'a Object>> {
    match parent.and_then(|p| p.get(key)) {
        None => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(obj)),
        Some(_) => Err(GeckoError::UnexpectedShape(key)),
    }
}

fn field_text(parent: Option<&Object>, key: &str) -> String {
    match parent.and_then(|p| p.get(key)) {
        None | Some(Value::Null) => NOT_AVAILABLE.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn snapshot(price: &str, volume: &str, liquidity: &str) -> StatSnapshot {
        StatSnapshot {
            price: price.to_owned(),
            volume24h: volume.to_owned(),
            liquidity: liquidity.to_owned(),
        }
    }

    #[test]
    fn full_payload() {
        let body = r#"{"data":{"attributes":{"base_token_price_usd":"0.0021","volume_usd":{"h24":"15000"},"reserve_in_usd":"42000"}}}"#;
        assert_eq!(StatSnapshot::from_json(body).unwrap(), snapshot("0.0021", "15000", "42000"));
    }

    #[test]
    fn values_are_kept_verbatim() {
        let body = r#"{"data":{"id":"base_0xae6d","type":"pool","attributes":{
            "name":"SEED / WETH",
            "base_token_price_usd":"0.000000123456789012",
            "volume_usd":{"m5":"1.2","h1":"10.5","h24":"15000.0001"},
            "reserve_in_usd":"42000.1234"
        }}}"#;
        assert_eq!(
            StatSnapshot::from_json(body).unwrap(),
            snapshot("0.000000123456789012", "15000.0001", "42000.1234")
        );
    }

    #[test]
    fn missing_fields_default_individually() {
        let body = r#"{"data":{"attributes":{"base_token_price_usd":"0.5"}}}"#;
        assert_eq!(StatSnapshot::from_json(body).unwrap(), snapshot("0.5", "N/A", "N/A"));

        let body = r#"{"data":{"attributes":{"volume_usd":{},"reserve_in_usd":"7"}}}"#;
        assert_eq!(StatSnapshot::from_json(body).unwrap(), snapshot("N/A", "N/A", "7"));

        let body = r#"{"data":{"attributes":{"base_token_price_usd":null,"volume_usd":{"h24":"3"}}}}"#;
        assert_eq!(StatSnapshot::from_json(body).unwrap(), snapshot("N/A", "3", "N/A"));
    }

    #[test]
    fn missing_containers_mean_missing_fields() {
        assert_eq!(StatSnapshot::from_json("{}").unwrap(), snapshot("N/A", "N/A", "N/A"));
        assert_eq!(
            StatSnapshot::from_json(r#"{"data":{}}"#).unwrap(),
            snapshot("N/A", "N/A", "N/A")
        );
    }

    #[test]
    fn numbers_use_json_text() {
        let body = r#"{"data":{"attributes":{"base_token_price_usd":0.25,"volume_usd":{"h24":100},"reserve_in_usd":"9"}}}"#;
        assert_eq!(StatSnapshot::from_json(body).unwrap(), snapshot("0.25", "100", "9"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(StatSnapshot::from_json("<html>502 Bad Gateway</html>").is_err());
        assert!(StatSnapshot::from_json(r#"{"data":"#).is_err());
        assert!(StatSnapshot::from_json(r#"{"data":null}"#).is_err());
        assert!(StatSnapshot::from_json(r#"{"data":{"attributes":"oops"}}"#).is_err());
    }

    #[test]
    fn arrays_are_not_objects() {
        let bodies = [
            "[]",
            r#"{"data":[]}"#,
            r#"{"data":{"attributes":["0.1",{"h24":"5"},"9"]}}"#,
            r#"{"data":{"attributes":{"volume_usd":["5"]}}}"#,
        ];
        for body in bodies {
            assert!(
                matches!(StatSnapshot::from_json(body), Err(GeckoError::UnexpectedShape(_))),
                "{body}"
            );
            assert_eq!(
                StatSnapshot::from_result(StatSnapshot::from_json(body)),
                StatSnapshot::unavailable()
            );
        }
    }

    #[test]
    fn fallback_on_error() {
        let err = serde_json::from_str::<Value>("not json").unwrap_err();
        let result = Err(GeckoError::from(err));
        assert_eq!(StatSnapshot::from_result(result), StatSnapshot::unavailable());
        assert_eq!(
            StatSnapshot::unavailable(),
            snapshot("Unavailable", "Unavailable", "Unavailable")
        );
    }

    #[test]
    fn success_passes_through() {
        let ok = snapshot("1", "2", "3");
        assert_eq!(StatSnapshot::from_result(Ok(ok.clone())), ok);
    }
}
