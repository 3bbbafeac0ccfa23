// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_schema::FeatureSchema;
use crate::domain::models::feature_vector::{FeatureVector, DEFAULT_FEATURE_VALUE};
use crate::utils::url_utils::ParsedUrl;
use once_cell::sync::Lazy;
use regex::Regex;

/// 粗粒度的点分四段数字，不做真正的 IPv4 校验
static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("static dotted-quad regex")
});

/// 钓鱼页面常见的敏感词，每个词最多计数一次
pub const SENSITIVE_WORDS: [&str; 10] = [
    "login", "signin", "account", "secure", "webscr", "cmd", "paypal", "bank", "update", "verify",
];

/// 词法特征的计算输入：原始 URL 及其解析结果
pub struct UrlContext<'a> {
    pub url: &'a str,
    pub parsed: ParsedUrl,
}

impl<'a> UrlContext<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            parsed: ParsedUrl::parse(url),
        }
    }
}

/// 单个词法特征的计算函数
pub type LexicalFn = fn(&UrlContext<'_>) -> f64;

/// 特征名到计算函数的注册表
///
/// 未实现的特征显式注册为 [`not_implemented`]，保持默认值
pub static LEXICAL_FEATURES: &[(&str, LexicalFn)] = &[
    ("NumDots", num_dots),
    ("SubdomainLevel", subdomain_level),
    ("PathLevel", path_level),
    ("UrlLength", url_length),
    ("NumDash", num_dash),
    ("NumDashInHostname", num_dash_in_hostname),
    ("AtSymbol", at_symbol),
    ("TildeSymbol", tilde_symbol),
    ("NumUnderscore", num_underscore),
    ("NumPercent", num_percent),
    ("NumQueryComponents", num_query_components),
    ("NumAmpersand", num_ampersand),
    ("NumHash", num_hash),
    ("NumNumericChars", num_numeric_chars),
    ("NoHttps", no_https),
    ("RandomString", not_implemented),
    ("IpAddress", ip_address),
    ("DomainInSubdomains", not_implemented),
    ("DomainInPaths", not_implemented),
    ("HttpsInHostname", https_in_hostname),
    ("HostnameLength", hostname_length),
    ("PathLength", path_length),
    ("QueryLength", query_length),
    ("DoubleSlashInPath", double_slash_in_path),
    ("NumSensitiveWords", num_sensitive_words),
    ("EmbeddedBrandName", not_implemented),
];

/// 查找词法特征的计算函数
pub fn lexical_feature(name: &str) -> Option<LexicalFn> {
    LEXICAL_FEATURES
        .iter()
        .find(|(feature, _)| *feature == name)
        .map(|(_, f)| *f)
}

/// 词法特征提取器
///
/// 只依赖 URL 文本，不访问网络；相同输入总是得到相同输出
pub struct LexicalFeatureExtractor;

impl LexicalFeatureExtractor {
    /// 为模式中每个已注册的词法特征计算数值，其余槽位保持不变
    pub fn extract_into(url: &str, vector: &mut FeatureVector) {
        let ctx = UrlContext::new(url);
        let schema = vector.schema().clone();
        for name in schema.names() {
            if let Some(compute) = lexical_feature(name) {
                vector.set(name, compute(&ctx));
            }
        }
    }

    /// 只计算词法特征的便捷入口
    pub fn extract(url: &str, schema: &FeatureSchema) -> FeatureVector {
        let mut vector = FeatureVector::zeroed(schema);
        Self::extract_into(url, &mut vector);
        vector
    }
}

fn count_char(haystack: &str, needle: char) -> f64 {
    haystack.matches(needle).count() as f64
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// 需要额外启发式规则的特征，目前保持默认值
fn not_implemented(_: &UrlContext<'_>) -> f64 {
    DEFAULT_FEATURE_VALUE
}

fn num_dots(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '.')
}

fn subdomain_level(ctx: &UrlContext<'_>) -> f64 {
    let parts: Vec<&str> = ctx.parsed.hostname.split('.').collect();
    let mut level = parts.len() as i64 - 1;
    if parts
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("www"))
    {
        level -= 1;
    }
    level.max(0) as f64
}

fn path_level(ctx: &UrlContext<'_>) -> f64 {
    count_char(&ctx.parsed.path, '/')
}

fn url_length(ctx: &UrlContext<'_>) -> f64 {
    ctx.url.chars().count() as f64
}

fn num_dash(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '-')
}

fn num_dash_in_hostname(ctx: &UrlContext<'_>) -> f64 {
    count_char(&ctx.parsed.hostname, '-')
}

fn at_symbol(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '@')
}

fn tilde_symbol(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '~')
}

fn num_underscore(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '_')
}

fn num_percent(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '%')
}

// Split semantics: "a=1" is one component, "" is none.
fn num_query_components(ctx: &UrlContext<'_>) -> f64 {
    if ctx.parsed.query.is_empty() {
        return 0.0;
    }
    ctx.parsed.query.split('&').count() as f64
}

fn num_ampersand(ctx: &UrlContext<'_>) -> f64 {
    count_char(&ctx.parsed.query, '&')
}

fn num_hash(ctx: &UrlContext<'_>) -> f64 {
    count_char(ctx.url, '#')
}

fn num_numeric_chars(ctx: &UrlContext<'_>) -> f64 {
    ctx.url.chars().filter(|c| c.is_ascii_digit()).count() as f64
}

fn no_https(ctx: &UrlContext<'_>) -> f64 {
    flag(!ctx.url.starts_with("https://"))
}

fn ip_address(ctx: &UrlContext<'_>) -> f64 {
    flag(DOTTED_QUAD.is_match(&ctx.parsed.hostname))
}

fn https_in_hostname(ctx: &UrlContext<'_>) -> f64 {
    flag(ctx.parsed.hostname.contains("https"))
}

fn hostname_length(ctx: &UrlContext<'_>) -> f64 {
    ctx.parsed.hostname.chars().count() as f64
}

fn path_length(ctx: &UrlContext<'_>) -> f64 {
    ctx.parsed.path.chars().count() as f64
}

fn query_length(ctx: &UrlContext<'_>) -> f64 {
    ctx.parsed.query.chars().count() as f64
}

fn double_slash_in_path(ctx: &UrlContext<'_>) -> f64 {
    flag(ctx.parsed.path.find("//").is_some_and(|idx| idx > 0))
}

fn num_sensitive_words(ctx: &UrlContext<'_>) -> f64 {
    let lowered = ctx.url.to_lowercase();
    SENSITIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count() as f64
}
