// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;

/// 注册指标描述
///
/// 不安装导出器；宿主进程安装了 recorder 时这些指标才会被采集
pub fn init_metrics() {
    describe_counter!(
        "classifications_total",
        "Total number of URL classifications, by label and reason"
    );
    describe_counter!(
        "page_fetch_failures_total",
        "Total number of failed page fetches, by cause"
    );
    describe_counter!(
        "model_errors_total",
        "Total number of model prediction failures"
    );
}
