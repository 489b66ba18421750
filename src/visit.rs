//! Visit counter: resolve the caller's IP, report the visit, show the total.
//! Runs once per page load in the background; failures only ever show up as
//! the offline marker and a console line.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FolioError, Result};
use crate::page::Page;

pub const COUNTER_SELECTOR: &str = "#visit-count";
pub const OFFLINE: &str = "(Offline)";

/// Body sent to the counter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitReport {
    pub ip: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct IpLookup {
    ip: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountReply {
    #[serde(default)]
    pub count: Option<Value>,
}

impl CountReply {
    /// Text for the counter, if the reply carries a usable count.
    /// Zero, `false`, empty and non-scalar values leave the counter alone;
    /// whole floats print without a fraction.
    pub fn display(&self) -> Option<String> {
        match self.count.as_ref()? {
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(format_number(n)),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

#[async_trait(?Send)]
pub trait VisitTransport {
    async fn lookup_ip(&self) -> Result<String>;
    async fn report(&self, report: &VisitReport) -> Result<CountReply>;
}

pub struct HttpVisitTransport {
    client: reqwest::Client,
    ip_lookup_url: String,
    endpoint: String,
}

impl HttpVisitTransport {
    pub fn new(ip_lookup_url: &str, endpoint: &str) -> Self {
        HttpVisitTransport {
            client: reqwest::Client::new(),
            ip_lookup_url: ip_lookup_url.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl VisitTransport for HttpVisitTransport {
    async fn lookup_ip(&self) -> Result<String> {
        let resp = self.client.get(&self.ip_lookup_url).send().await?;
        if !resp.status().is_success() {
            return Err(FolioError::Status {
                resource: self.ip_lookup_url.clone(),
                status: resp.status().as_u16(),
            });
        }
        let lookup: IpLookup = resp.json().await?;
        Ok(lookup.ip)
    }

    async fn report(&self, report: &VisitReport) -> Result<CountReply> {
        let body = serde_json::to_string(report).map_err(|e| FolioError::Parse {
            resource: "visit report".into(),
            message: e.to_string(),
        })?;

        // text/plain keeps this a simple request: no CORS preflight.
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FolioError::Status {
                resource: self.endpoint.clone(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    Counted(String),
    /// Reported fine, but the reply had no count.
    Unchanged,
    Offline,
}

/// Resolve IP, report, update the counter. Never fails; an error at either
/// step sets the offline marker and the second step is skipped if the first fails.
pub async fn log_visit(transport: &dyn VisitTransport, page: &dyn Page, user_agent: &str) -> VisitOutcome {
    match report_visit(transport, user_agent).await {
        Ok(reply) => {
            log::info!("[visit] Visit logged successfully");
            match reply.display() {
                Some(count) => {
                    page.set_text(COUNTER_SELECTOR, &count);
                    VisitOutcome::Counted(count)
                }
                None => VisitOutcome::Unchanged,
            }
        }
        Err(e) => {
            log::error!("[visit] Failed to log visit: {}", e);
            page.set_text(COUNTER_SELECTOR, OFFLINE);
            VisitOutcome::Offline
        }
    }
}

async fn report_visit(transport: &dyn VisitTransport, user_agent: &str) -> Result<CountReply> {
    let ip = transport.lookup_ip().await?;
    let report = VisitReport {
        ip,
        user_agent: user_agent.to_string(),
    };
    transport.report(&report).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(v: Value) -> CountReply {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn count_display_rules() {
        assert_eq!(reply(json!({"count": 42})).display().as_deref(), Some("42"));
        assert_eq!(reply(json!({"count": "1,024"})).display().as_deref(), Some("1,024"));
        assert_eq!(reply(json!({})).display(), None);
        assert_eq!(reply(json!({"count": null})).display(), None);
        assert_eq!(reply(json!({"count": 0})).display(), None);
        assert_eq!(reply(json!({"count": ""})).display(), None);
        assert_eq!(reply(json!({"count": 42.0})).display().as_deref(), Some("42"));
        assert_eq!(reply(json!({"count": 2.5})).display().as_deref(), Some("2.5"));
        assert_eq!(reply(json!({"count": true})).display().as_deref(), Some("true"));
        assert_eq!(reply(json!({"count": false})).display(), None);
        assert_eq!(reply(json!({"count": [1]})).display(), None);
    }

    #[test]
    fn report_body_uses_camel_case_user_agent() {
        let body = serde_json::to_value(VisitReport {
            ip: "203.0.113.7".into(),
            user_agent: "Mozilla/5.0".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"ip": "203.0.113.7", "userAgent": "Mozilla/5.0"}));
    }
}
