// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 模型错误类型
///
/// 模型加载或预测失败说明集成有误，始终向调用方显式报告，不做重试或默认处理
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("模型文件读取失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("模型 JSON 解析失败: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("特征维度不匹配: 期望 {expected}, 实际 {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("特征顺序不匹配: 位置 {index} 期望 {expected}, 实际 {got}")]
    SchemaMismatch {
        index: usize,
        expected: String,
        got: String,
    },

    #[error("阈值 {0} 不在 [0, 1] 范围内")]
    InvalidThreshold(f64),

    #[error("位置 {index} 的权重不是有限值: {value}")]
    NonFiniteWeight { index: usize, value: f64 },

    #[error("偏置不是有限值: {0}")]
    NonFiniteBias(f64),
}
