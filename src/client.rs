use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, RequestError};
use crate::models::{DocRequest, DocResponse};
use crate::ui::actions::Action;

/// 文档生成服务客户端
#[derive(Clone)]
pub struct DocClient {
    client: Client,
    endpoint: String,
}

impl DocClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 发送代码并解析响应；非 2xx 状态与非 JSON 对象的响应体都视为失败
    pub async fn generate(&self, code: String) -> Result<DocResponse, RequestError> {
        let body = DocRequest { code };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let object: Map<String, Value> = response.json().await?;
        Ok(DocResponse::from_object(object))
    }

    /// 在后台任务中执行请求，结果以 `Action::RequestCompleted` 发回 UI 循环
    pub fn dispatch(&self, seq: u64, code: String, tx: mpsc::UnboundedSender<Action>) {
        let client = self.clone();

        tokio::spawn(async move {
            debug!(seq, endpoint = %client.endpoint, "sending documentation request");
            let outcome = client.generate(code).await;
            if tx.send(Action::RequestCompleted { seq, outcome }).is_err() {
                warn!(seq, "UI loop gone, dropping response");
            }
        });
    }
}
