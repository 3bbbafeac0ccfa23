// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// 原始标记中的开始标签名
static START_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9]*)[\s/>]").expect("static start tag regex"));

/// 单个元素的属性快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttrs {
    attrs: HashMap<String, String>,
}

impl ElementAttrs {
    fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            attrs: element
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// 属性存在且非空时返回其值
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

/// 已解析的 HTML 页面
///
/// 只暴露特征计算所需的查询原语；`scraper::Html` 不是 `Send`，
/// 因此文档只在同步代码中创建和使用，不跨越 await 点
pub struct PageDocument {
    html: Html,
    /// 原始标记；树构建器会丢弃位置不合法的元素（如 `frameset` 之外的 `frame`）
    raw: String,
}

impl PageDocument {
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
            raw: content.to_string(),
        }
    }

    /// 原始标记中是否出现 `tag` 的开始标签
    fn has_start_tag(&self, tag: &str) -> bool {
        START_TAG
            .captures_iter(&self.raw)
            .any(|caps| caps[1].eq_ignore_ascii_case(tag))
    }

    fn select_all<'a>(&'a self, tag: &str) -> Vec<ElementRef<'a>> {
        match Selector::parse(tag) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// 查找全部 `tag` 元素
    pub fn find_all(&self, tag: &str) -> Vec<ElementAttrs> {
        self.select_all(tag)
            .into_iter()
            .map(ElementAttrs::from_element)
            .collect()
    }

    /// 查找带有 `attr` 属性的全部 `tag` 元素，返回属性值（可能为空字符串）
    pub fn find_all_with_attr(&self, tag: &str, attr: &str) -> Vec<String> {
        self.select_all(tag)
            .into_iter()
            .filter_map(|el| el.value().attr(attr).map(str::to_string))
            .collect()
    }

    /// 查找第一个 `attr` 属性匹配 `pattern` 的 `tag` 元素
    pub fn find_first_matching(
        &self,
        tag: &str,
        attr: &str,
        pattern: &Regex,
    ) -> Option<ElementAttrs> {
        self.select_all(tag)
            .into_iter()
            .find(|el| el.value().attr(attr).is_some_and(|v| pattern.is_match(v)))
            .map(ElementAttrs::from_element)
    }

    /// 是否存在任一给定标签，包括被树构建器丢弃的标签
    pub fn has_any(&self, tags: &[&str]) -> bool {
        tags.iter()
            .any(|tag| !self.select_all(tag).is_empty() || self.has_start_tag(tag))
    }

    /// 第一个 `title` 元素的文本；不存在时返回 `None`
    pub fn title_text(&self) -> Option<String> {
        self.select_all("title")
            .into_iter()
            .next()
            .map(|el| el.text().collect::<String>())
    }
}
