// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::feature_schema::FeatureSchema;
use crate::domain::models::feature_vector::FeatureVector;
use crate::utils::errors::ModelError;

/// 模型的一次预测
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 1 表示恶意，0 表示良性
    pub class: u8,
    /// 模型给出的恶意概率
    pub score: f64,
}

/// 预训练分类模型接口
///
/// 实现必须是只读的，可在并发请求间共享
pub trait Classifier: Send + Sync {
    /// 训练时使用的特征顺序
    fn schema(&self) -> FeatureSchema;

    /// 对按训练顺序排列的特征向量进行预测
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError>;
}
