// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了分类流程中的核心数据结构，包括：
/// - 特征模式（feature_schema）：模型期望的有序特征名列表
/// - 特征向量（feature_vector）：按模式排序的特征值
/// - 分类结果（classification）：标签、原因与内容获取状态
///
/// 这些数据都在单次请求内创建和销毁，只有特征模式是进程级只读数据。
pub mod classification;
pub mod feature_schema;
pub mod feature_vector;
