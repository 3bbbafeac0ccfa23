// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_schema::FeatureSchema;
use crate::domain::models::feature_vector::{FeatureVector, DEFAULT_FEATURE_VALUE, NOT_APPLICABLE};
use crate::engines::traits::{FetchRequest, PageFetcher};
use crate::utils::html_document::PageDocument;
use crate::utils::url_utils::{resolved_host, ParsedUrl};
use metrics::counter;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

static ICON_REL: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)icon").expect("static icon regex"));

/// 一次页面获取的结果，只消费一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub html: Option<String>,
    pub success: bool,
}

impl FetchResult {
    pub fn failed() -> Self {
        Self {
            html: None,
            success: false,
        }
    }

    pub fn fetched(html: String) -> Self {
        Self {
            html: Some(html),
            success: true,
        }
    }
}

/// 内容特征的计算输入
pub struct PageContext<'a> {
    /// 页面自身的 URL（规范化后的原始输入）
    pub url: &'a str,
    pub parsed: ParsedUrl,
    /// 用于解析相对链接的基准 URL
    pub base: Option<Url>,
    /// 与链接主机名同一解析器得到的页面主机名（IDN 为 punycode，IPv6 带方括号）
    pub host: String,
    pub document: PageDocument,
}

impl<'a> PageContext<'a> {
    pub fn new(url: &'a str, html: &str) -> Self {
        let parsed = ParsedUrl::parse(url);
        let base = Url::parse(url).ok();
        let host = base
            .as_ref()
            .and_then(Url::host_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| parsed.hostname.clone());
        Self {
            url,
            parsed,
            base,
            host,
            document: PageDocument::parse(html),
        }
    }

    fn is_external(&self, href: &str) -> bool {
        resolved_host(self.base.as_ref(), href).as_deref() != Some(self.host.as_str())
    }

    /// `link`/`script`/`img` 的资源地址，优先 `src`，其次 `href`
    fn resource_urls(&self) -> Vec<String> {
        ["link", "script", "img"]
            .iter()
            .flat_map(|tag| self.document.find_all(tag))
            .filter_map(|el| {
                el.non_empty("src")
                    .or_else(|| el.non_empty("href"))
                    .map(str::to_string)
            })
            .collect()
    }

    /// 带 `action` 属性的表单的 action 值
    fn form_actions(&self) -> Vec<String> {
        self.document.find_all_with_attr("form", "action")
    }
}

/// 单个内容特征的计算函数
pub type ContentFn = fn(&PageContext<'_>) -> f64;

/// 特征名到计算函数的注册表
///
/// 未实现的特征显式注册为 [`not_implemented`]，保持默认值
pub static CONTENT_FEATURES: &[(&str, ContentFn)] = &[
    ("PctExtHyperlinks", pct_ext_hyperlinks),
    ("PctExtResourceUrls", pct_ext_resource_urls),
    ("ExtFavicon", ext_favicon),
    ("InsecureForms", insecure_forms),
    ("RelativeFormAction", relative_form_action),
    ("ExtFormAction", ext_form_action),
    ("AbnormalFormAction", abnormal_form_action),
    ("PctNullSelfRedirectHyperlinks", pct_null_self_redirect_hyperlinks),
    ("FrequentDomainNameMismatch", not_implemented),
    ("FakeLinkInStatusBar", not_implemented),
    ("RightClickDisabled", not_implemented),
    ("PopUpWindow", not_implemented),
    ("SubmitInfoToEmail", not_implemented),
    ("IframeOrFrame", iframe_or_frame),
    ("MissingTitle", missing_title),
    ("ImagesOnlyInForm", not_implemented),
    ("SubdomainLevelRT", not_implemented),
    ("UrlLengthRT", not_implemented),
    ("PctExtResourceUrlsRT", not_implemented),
    ("AbnormalExtFormActionR", not_implemented),
    ("ExtMetaScriptLinkRT", not_implemented),
    ("PctExtNullSelfRedirectHyperlinksRT", not_implemented),
];

/// 查找内容特征的计算函数
pub fn content_feature(name: &str) -> Option<ContentFn> {
    CONTENT_FEATURES
        .iter()
        .find(|(feature, _)| *feature == name)
        .map(|(_, f)| *f)
}

/// 模式中是否含有需要页面内容的特征
pub fn schema_needs_content(schema: &FeatureSchema) -> bool {
    schema
        .names()
        .iter()
        .any(|name| content_feature(name).is_some())
}

/// 内容特征提取器
///
/// 通过 [`PageFetcher`] 获取页面；任何失败都折叠为 `success = false`
pub struct ContentFeatureExtractor {
    fetcher: Arc<dyn PageFetcher>,
    timeout: Duration,
    user_agent: String,
}

impl ContentFeatureExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, timeout: Duration, user_agent: String) -> Self {
        Self {
            fetcher,
            timeout,
            user_agent,
        }
    }

    /// 单次获取页面，不重试；非 200 响应、网络错误和超时都视为失败
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let request = FetchRequest {
            url: url.to_string(),
            headers: HashMap::new(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        };

        match self.fetcher.fetch(&request).await {
            Ok(response) if response.status_code == 200 => {
                debug!(
                    url,
                    engine = self.fetcher.name(),
                    elapsed_ms = response.response_time_ms,
                    "Page fetched"
                );
                FetchResult::fetched(response.content)
            }
            Ok(response) => {
                warn!(url, status = response.status_code, "Page fetch returned non-200 status");
                counter!("page_fetch_failures_total", "cause" => "status").increment(1);
                FetchResult::failed()
            }
            Err(e) => {
                warn!(url, error = %e, "Page fetch failed");
                counter!("page_fetch_failures_total", "cause" => "network").increment(1);
                FetchResult::failed()
            }
        }
    }

    /// 获取页面并写入内容特征，返回是否获取成功
    pub async fn extract_into(&self, url: &str, vector: &mut FeatureVector) -> bool {
        let fetched = self.fetch(url).await;
        match fetched.html {
            Some(html) if fetched.success => {
                Self::extract_from_html(url, &html, vector);
                true
            }
            _ => false,
        }
    }

    /// 基于已获取的页面计算模式中的内容特征
    pub fn extract_from_html(url: &str, html: &str, vector: &mut FeatureVector) {
        let ctx = PageContext::new(url, html);
        let schema = vector.schema().clone();
        for name in schema.names() {
            if let Some(compute) = content_feature(name) {
                vector.set(name, compute(&ctx));
            }
        }
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64 * 100.0
}

/// 需要额外启发式规则或实时数据的特征，目前保持默认值
fn not_implemented(_: &PageContext<'_>) -> f64 {
    DEFAULT_FEATURE_VALUE
}

fn pct_ext_hyperlinks(ctx: &PageContext<'_>) -> f64 {
    let hrefs = ctx.document.find_all_with_attr("a", "href");
    let external = hrefs
        .iter()
        .filter(|href| href.starts_with("http") && ctx.is_external(href))
        .count();
    percentage(external, hrefs.len())
}

fn pct_ext_resource_urls(ctx: &PageContext<'_>) -> f64 {
    let urls = ctx.resource_urls();
    let external = urls
        .iter()
        .filter(|u| u.starts_with("http") && ctx.is_external(u))
        .count();
    percentage(external, urls.len())
}

fn ext_favicon(ctx: &PageContext<'_>) -> f64 {
    let Some(icon) = ctx.document.find_first_matching("link", "rel", &ICON_REL) else {
        return NOT_APPLICABLE;
    };
    match icon.non_empty("href") {
        Some(href) => flag(ctx.is_external(href)),
        None => 0.0,
    }
}

fn insecure_forms(ctx: &PageContext<'_>) -> f64 {
    let insecure = ctx.document.find_all("form").iter().any(|form| {
        let action = form.get("action").unwrap_or("");
        action.is_empty() || !action.starts_with("https://")
    });
    flag(insecure)
}

/// 对每个表单 action 求值，任一满足即为 1；没有表单时为哨兵值
fn any_form_action(ctx: &PageContext<'_>, predicate: impl Fn(&ParsedUrl) -> bool) -> f64 {
    let actions = ctx.form_actions();
    if actions.is_empty() {
        return NOT_APPLICABLE;
    }
    flag(actions.iter().any(|a| predicate(&ParsedUrl::parse(a))))
}

fn relative_form_action(ctx: &PageContext<'_>) -> f64 {
    any_form_action(ctx, |action| action.scheme.is_empty())
}

fn ext_form_action(ctx: &PageContext<'_>) -> f64 {
    any_form_action(ctx, |action| {
        !action.scheme.is_empty() && action.hostname != ctx.parsed.hostname
    })
}

fn abnormal_form_action(ctx: &PageContext<'_>) -> f64 {
    any_form_action(ctx, |action| {
        !action.hostname.is_empty() && action.hostname != ctx.parsed.hostname
    })
}

fn pct_null_self_redirect_hyperlinks(ctx: &PageContext<'_>) -> f64 {
    let hrefs = ctx.document.find_all_with_attr("a", "href");
    let self_redirects = hrefs
        .iter()
        .filter(|href| *href == "#" || *href == ctx.url || **href == ctx.parsed.path)
        .count();
    percentage(self_redirects, hrefs.len())
}

fn missing_title(ctx: &PageContext<'_>) -> f64 {
    flag(
        ctx.document
            .title_text()
            .map_or(true, |title| title.trim().is_empty()),
    )
}

fn iframe_or_frame(ctx: &PageContext<'_>) -> f64 {
    flag(ctx.document.has_any(&["iframe", "frame"]))
}

#[cfg(test)]
#[path = "content_features_test.rs"]
mod tests;
