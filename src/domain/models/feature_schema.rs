// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use std::sync::Arc;

/// 训练时使用的特征数量
pub const TRAINING_FEATURE_COUNT: usize = 48;

/// 训练时使用的特征名称，顺序即模型输入顺序
pub const TRAINING_FEATURE_NAMES: [&str; TRAINING_FEATURE_COUNT] = [
    // Lexical
    "NumDots",
    "SubdomainLevel",
    "PathLevel",
    "UrlLength",
    "NumDash",
    "NumDashInHostname",
    "AtSymbol",
    "TildeSymbol",
    "NumUnderscore",
    "NumPercent",
    "NumQueryComponents",
    "NumAmpersand",
    "NumHash",
    "NumNumericChars",
    "NoHttps",
    "RandomString",
    "IpAddress",
    "DomainInSubdomains",
    "DomainInPaths",
    "HttpsInHostname",
    "HostnameLength",
    "PathLength",
    "QueryLength",
    "DoubleSlashInPath",
    "NumSensitiveWords",
    "EmbeddedBrandName",
    // Page content
    "PctExtHyperlinks",
    "PctExtResourceUrls",
    "ExtFavicon",
    "InsecureForms",
    "RelativeFormAction",
    "ExtFormAction",
    "AbnormalFormAction",
    "PctNullSelfRedirectHyperlinks",
    "FrequentDomainNameMismatch",
    "FakeLinkInStatusBar",
    "RightClickDisabled",
    "PopUpWindow",
    "SubmitInfoToEmail",
    "IframeOrFrame",
    "MissingTitle",
    "ImagesOnlyInForm",
    "SubdomainLevelRT",
    "UrlLengthRT",
    "PctExtResourceUrlsRT",
    "AbnormalExtFormActionR",
    "ExtMetaScriptLinkRT",
    "PctExtNullSelfRedirectHyperlinksRT",
];

static TRAINING_SCHEMA: Lazy<FeatureSchema> =
    Lazy::new(|| FeatureSchema::new(TRAINING_FEATURE_NAMES.iter().map(|s| s.to_string())));

/// 有序的特征槽位列表
///
/// 进程级只读数据，克隆代价为一次引用计数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Arc<[String]>,
}

impl FeatureSchema {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// 模型训练时使用的 48 个特征
    pub fn training() -> Self {
        TRAINING_SCHEMA.clone()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::training()
    }
}
