// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::feature_schema::FeatureSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// 特征的中性默认值
pub const DEFAULT_FEATURE_VALUE: f64 = 0.0;

/// 哨兵值：特征不适用（例如页面中没有表单）
pub const NOT_APPLICABLE: f64 = -1.0;

/// 按特征模式排序的特征向量
///
/// 始终恰好包含模式中的全部特征名；组装完成后对外只读
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: FeatureSchema,
    values: Vec<f64>,
}

impl FeatureVector {
    /// 所有槽位初始化为默认值
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            schema: schema.clone(),
            values: vec![DEFAULT_FEATURE_VALUE; schema.len()],
        }
    }

    /// 写入一个特征；名称不在模式中时忽略并返回 `false`
    pub(crate) fn set(&mut self, name: &str, value: f64) -> bool {
        match self.schema.position(name) {
            Some(idx) => {
                self.values[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|idx| self.values[idx])
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// 按模式顺序排列的数值，可直接送入模型
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.schema
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
