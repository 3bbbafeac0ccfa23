// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::{ParseError, Url};

/// RFC 3986 附录 B 的通用 URI 分解表达式
static URI_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("static URI regex")
});

static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*$").expect("static scheme regex"));

/// URL 的只读结构化视图
///
/// 解析永不失败：无法识别的部分保持为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// 小写的协议名，例如 `https`
    pub scheme: String,
    /// 原始的 authority（可能包含用户信息和端口）
    pub netloc: String,
    /// 小写的主机名，不含用户信息和端口
    pub hostname: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// 按 `scheme://host/path?query#fragment` 语法拆分 URL
    pub fn parse(raw: &str) -> Self {
        let Some(caps) = URI_PARTS.captures(raw) else {
            return Self::default();
        };
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let mut scheme = group(1);
        let mut netloc = group(2);
        let mut path = group(3);

        // Prefix is not a valid scheme name, so the whole thing is a path.
        if !scheme.is_empty() && !SCHEME.is_match(scheme) {
            scheme = "";
            netloc = "";
            path = raw.split(['?', '#']).next().unwrap_or("");
        }

        Self {
            scheme: scheme.to_ascii_lowercase(),
            netloc: netloc.to_string(),
            hostname: hostname_of(netloc),
            path: path.to_string(),
            query: group(4).to_string(),
            fragment: group(5).to_string(),
        }
    }

    /// 是否为 http 或 https 协议
    pub fn is_web(&self) -> bool {
        self.scheme == "http" || self.scheme == "https"
    }
}

fn hostname_of(netloc: &str) -> String {
    let host_port = netloc.rsplit_once('@').map_or(netloc, |(_, rest)| rest);
    let host = if let Some(stripped) = host_port.strip_prefix('[') {
        stripped.split(']').next().unwrap_or("")
    } else {
        host_port.split(':').next().unwrap_or("")
    };
    host.to_ascii_lowercase()
}

/// 规范化用户输入：去除首尾空白，缺少 http/https 协议时补上 `https://`
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 解析链接后的主机名；无法解析时返回 `None`
pub fn resolved_host(base_url: Option<&Url>, href: &str) -> Option<String> {
    let resolved = match base_url {
        Some(base) => resolve_url(base, href).ok()?,
        None => Url::parse(href).ok()?,
    };
    resolved.host_str().map(|h| h.to_ascii_lowercase())
}
