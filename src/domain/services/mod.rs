// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含特征提取与分类的核心逻辑：
/// - 词法特征（lexical_features）：只依赖 URL 文本的特征
/// - 内容特征（content_features）：依赖页面 HTML 的特征
/// - 特征组装（feature_assembler）：按模式顺序组装完整特征向量
/// - 检测服务（detection_service）：规范化输入、组装特征并调用模型
pub mod content_features;
pub mod detection_service;
pub mod feature_assembler;
pub mod lexical_features;
