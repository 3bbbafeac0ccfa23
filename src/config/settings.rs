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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 默认的浏览器风格 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 页面获取配置
    pub fetch: FetchSettings,
    /// 模型配置
    pub model: ModelSettings,
}

/// 页面获取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 模型配置设置
#[derive(Debug, Deserialize)]
pub struct ModelSettings {
    /// 模型文件路径
    pub path: PathBuf,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 和 `PHISHSCAN__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("fetch.timeout_secs", 5)?
            .set_default("fetch.user_agent", DEFAULT_USER_AGENT)?
            .set_default("model.path", "models/website_classifier_model.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PHISHSCAN").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
