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

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 页面获取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 额外请求头
    pub headers: HashMap<String, String>,
    /// 超时时间
    pub timeout: Duration,
    /// 浏览器风格的 User-Agent
    pub user_agent: String,
}

/// 页面获取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面获取引擎特质
///
/// 只负责一次 GET 请求；状态码的解释由调用方决定
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行获取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
