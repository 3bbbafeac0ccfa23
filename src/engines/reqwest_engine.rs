// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, PageFetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Instant;

/// 获取引擎
///
/// 基于reqwest实现的单次 HTTP GET，不重试
pub struct ReqwestEngine;

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP GET
    ///
    /// # 参数
    ///
    /// * `request` - 获取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 任意状态码的响应
    /// * `Err(EngineError)` - 网络错误或超时
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(k, v);
            }
        }

        let client = reqwest::Client::builder()
            .user_agent(request.user_agent.as_str())
            .timeout(request.timeout)
            .build()?;

        let start = Instant::now();
        let response = client
            .get(&request.url)
            .headers(headers)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        let content = response.text().await.map_err(map_reqwest_error)?;

        Ok(FetchResponse {
            status_code,
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn map_reqwest_error(e: reqwest::Error) -> EngineError {
    if e.is_timeout() {
        EngineError::Timeout
    } else {
        EngineError::RequestFailed(e)
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
