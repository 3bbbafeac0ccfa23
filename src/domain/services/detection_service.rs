// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::classifier::Classifier;
use crate::domain::models::classification::{ClassificationReason, ClassificationResult, Label};
use crate::domain::services::feature_assembler::FeatureAssembler;
use crate::utils::errors::ModelError;
use crate::utils::url_utils::normalize_url;
use metrics::counter;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 钓鱼网站检测服务
///
/// 调用方唯一的入口。页面内容无法获取时直接判定为恶意，不调用模型；
/// 模型错误属于集成问题，原样返回给调用方
pub struct PhishingDetector {
    assembler: FeatureAssembler,
    classifier: Arc<dyn Classifier>,
}

impl PhishingDetector {
    pub fn new(assembler: FeatureAssembler, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            assembler,
            classifier,
        }
    }

    /// 对 URL 进行分类
    ///
    /// # 参数
    ///
    /// * `input` - 用户输入的 URL；缺少 http/https 协议时自动补上 `https://`
    ///
    /// # 返回值
    ///
    /// * `Ok(ClassificationResult)` - 分类结果
    /// * `Err(ModelError)` - 模型调用失败（如特征维度不匹配）
    pub async fn classify(&self, input: &str) -> Result<ClassificationResult, ModelError> {
        let url = normalize_url(input);
        if url != input.trim() {
            info!(input, url = %url, "Prepended https:// to URL");
        }

        let (features, content_fetch_succeeded) = self.assembler.assemble(&url).await;

        if !content_fetch_succeeded {
            warn!(url = %url, "Page content unavailable, classifying as malicious");
            counter!("classifications_total", "label" => "malicious", "reason" => "content_unavailable")
                .increment(1);
            return Ok(ClassificationResult {
                url,
                label: Label::Malicious,
                reason: ClassificationReason::ContentUnavailable,
                content_fetch_succeeded,
                features,
            });
        }

        let prediction = self.classifier.predict(&features).map_err(|e| {
            error!(url = %url, error = %e, "Model prediction failed");
            counter!("model_errors_total").increment(1);
            e
        })?;

        let label = Label::from_prediction(prediction.class);
        info!(url = %url, %label, score = prediction.score, "URL classified");
        counter!("classifications_total", "label" => label.to_string(), "reason" => "model")
            .increment(1);

        Ok(ClassificationResult {
            url,
            label,
            reason: ClassificationReason::ModelPrediction {
                score: prediction.score,
            },
            content_fetch_succeeded,
            features,
        })
    }
}
