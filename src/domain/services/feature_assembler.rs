// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_schema::FeatureSchema;
use crate::domain::models::feature_vector::FeatureVector;
use crate::domain::services::content_features::{schema_needs_content, ContentFeatureExtractor};
use crate::domain::services::lexical_features::LexicalFeatureExtractor;
use crate::utils::url_utils::ParsedUrl;
use futures::FutureExt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// 特征向量组装器
///
/// 先将模式中每个槽位置为默认值，再依次运行词法与内容特征提取。
/// 任何意外失败都在此边界内被吸收：已写入的值保留，其余保持默认，
/// 并报告内容获取失败
pub struct FeatureAssembler {
    schema: FeatureSchema,
    content: ContentFeatureExtractor,
    needs_content: bool,
}

impl FeatureAssembler {
    pub fn new(schema: FeatureSchema, content: ContentFeatureExtractor) -> Self {
        let needs_content = schema_needs_content(&schema);
        Self {
            schema,
            content,
            needs_content,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// 组装特征向量
    ///
    /// # 返回值
    ///
    /// `(特征向量, 页面内容是否获取成功)`；只有执行了内容阶段且获取成功时才为 `true`
    pub async fn assemble(&self, url: &str) -> (FeatureVector, bool) {
        let mut vector = FeatureVector::zeroed(&self.schema);

        let lexical = panic::catch_unwind(AssertUnwindSafe(|| {
            LexicalFeatureExtractor::extract_into(url, &mut vector)
        }));
        if lexical.is_err() {
            error!(url, "Lexical feature extraction panicked");
            return (vector, false);
        }

        if !self.needs_content || !ParsedUrl::parse(url).is_web() {
            debug!(url, "Skipping content features");
            return (vector, false);
        }

        let fetched = AssertUnwindSafe(self.content.extract_into(url, &mut vector))
            .catch_unwind()
            .await;
        let success = match fetched {
            Ok(success) => success,
            Err(_) => {
                error!(url, "Content feature extraction panicked");
                false
            }
        };

        debug!(url, success, features = vector.len(), "Feature vector assembled");
        (vector, success)
    }
}
