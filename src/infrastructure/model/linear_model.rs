// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::classifier::{Classifier, Prediction};
use crate::domain::models::feature_schema::FeatureSchema;
use crate::domain::models::feature_vector::FeatureVector;
use crate::utils::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 逻辑回归模型，从 JSON 文件加载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// 模型标识
    pub model_id: String,
    /// 模型版本
    pub model_version: String,
    /// 训练时的特征顺序，与 `weights` 一一对应
    pub feature_names: Vec<String>,
    /// 权重向量
    pub weights: Vec<f64>,
    /// 偏置项
    pub bias: f64,
    /// 判定阈值：分数 >= 阈值即为恶意
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LinearModel {
    /// 从 JSON 字符串加载并校验
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// 从 JSON 文件加载并校验
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&content)?;
        info!(
            model_id = %model.model_id,
            version = %model.model_version,
            features = model.weights.len(),
            "Model loaded"
        );
        Ok(model)
    }

    /// 校验模型结构
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != self.feature_names.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.feature_names.len(),
                got: self.weights.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (index, &value) in self.weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteWeight { index, value });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        Ok(())
    }

    /// 确认模型的特征顺序与给定模式完全一致
    pub fn ensure_schema(&self, schema: &FeatureSchema) -> Result<(), ModelError> {
        check_names(&self.feature_names, schema.names())
    }

    /// 恶意概率
    pub fn score(&self, values: &[f64]) -> Result<f64, ModelError> {
        if values.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                got: values.len(),
            });
        }
        let z = dot(&self.weights, values) + self.bias;
        Ok(sigmoid(z))
    }
}

impl Classifier for LinearModel {
    fn schema(&self) -> FeatureSchema {
        FeatureSchema::new(self.feature_names.iter().cloned())
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        check_names(&self.feature_names, features.schema().names())?;
        let score = self.score(features.values())?;
        Ok(Prediction {
            class: u8::from(score >= self.threshold),
            score,
        })
    }
}

fn check_names(expected: &[String], got: &[String]) -> Result<(), ModelError> {
    if expected.len() != got.len() {
        return Err(ModelError::DimensionMismatch {
            expected: expected.len(),
            got: got.len(),
        });
    }
    match expected.iter().zip(got).position(|(e, g)| e != g) {
        Some(index) => Err(ModelError::SchemaMismatch {
            index,
            expected: expected[index].clone(),
            got: got[index].clone(),
        }),
        None => Ok(()),
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum()
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}
