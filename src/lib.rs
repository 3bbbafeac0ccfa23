// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含特征模式、特征提取服务与分类器接口
pub mod domain;

/// 引擎模块
///
/// 实现页面获取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供模型加载与指标注册
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
