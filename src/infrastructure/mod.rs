// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供领域接口的具体实现：模型加载与指标注册
pub mod model;
pub mod observability;
