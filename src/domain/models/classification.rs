// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::feature_vector::FeatureVector;
use serde::Serialize;
use std::fmt;

/// 分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// 良性网站
    Benign,
    /// 恶意（钓鱼）网站
    Malicious,
}

impl Label {
    /// 模型输出 1 表示恶意，其余为良性
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction == 1 {
            Label::Malicious
        } else {
            Label::Benign
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Benign => write!(f, "benign"),
            Label::Malicious => write!(f, "malicious"),
        }
    }
}

/// 得出分类结论的原因
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationReason {
    /// 页面内容无法获取，未调用模型，直接判定为恶意
    ContentUnavailable,
    /// 模型给出的预测及其分数
    ModelPrediction { score: f64 },
}

impl fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassificationReason::ContentUnavailable => write!(f, "content unavailable"),
            ClassificationReason::ModelPrediction { score } => {
                write!(f, "model prediction (score {:.3})", score)
            }
        }
    }
}

/// 一次分类请求的结果
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// 规范化后的 URL
    pub url: String,
    pub label: Label,
    pub reason: ClassificationReason,
    /// 页面内容是否成功获取
    pub content_fetch_succeeded: bool,
    /// 送入（或本应送入）模型的特征向量
    pub features: FeatureVector,
}

impl ClassificationResult {
    pub fn is_malicious(&self) -> bool {
        self.label == Label::Malicious
    }
}
