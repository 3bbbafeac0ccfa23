// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 分类器接口（classifier）：预训练模型的抽象
/// - 领域模型（models）：特征模式、特征向量与分类结果
/// - 服务（services）：特征提取、组装与分类流程
///
/// 领域层只依赖页面获取与模型两个抽象接口，不依赖具体实现。
pub mod classifier;
pub mod models;
pub mod services;
