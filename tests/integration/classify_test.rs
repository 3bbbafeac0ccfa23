// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 端到端分类测试
///
/// 使用真实的 reqwest 引擎和随仓库发布的模型，对本地服务器上的页面进行分类

#[cfg(test)]
mod tests {
    use crate::helpers::{detector_with, live_detector, shipped_model, start_test_server, UnreachableFetcher};
    use phishscan::domain::models::classification::{ClassificationReason, Label};
    use phishscan::domain::models::feature_schema::FeatureSchema;
    use std::sync::Arc;
    use std::time::Duration;

    fn localhost(server_url: &str) -> String {
        server_url.replace("127.0.0.1", "localhost")
    }

    #[tokio::test]
    async fn test_phishing_page_is_malicious() {
        let base = localhost(&start_test_server().await);
        let detector = live_detector(Duration::from_secs(5));

        let result = detector.classify(&format!("{}/login", base)).await.unwrap();
        assert!(result.content_fetch_succeeded);
        assert_eq!(result.label, Label::Malicious);
        assert!(matches!(
            result.reason,
            ClassificationReason::ModelPrediction { score } if score > 0.5
        ));

        let features = &result.features;
        let pct_ext = features.get("PctExtHyperlinks").unwrap();
        assert!((pct_ext - 100.0 / 3.0).abs() < 1e-9);
        let pct_null = features.get("PctNullSelfRedirectHyperlinks").unwrap();
        assert!((pct_null - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(features.get("PctExtResourceUrls"), Some(100.0));
        assert_eq!(features.get("ExtFavicon"), Some(1.0));
        assert_eq!(features.get("InsecureForms"), Some(1.0));
        assert_eq!(features.get("ExtFormAction"), Some(1.0));
        assert_eq!(features.get("AbnormalFormAction"), Some(1.0));
        assert_eq!(features.get("RelativeFormAction"), Some(0.0));
        assert_eq!(features.get("IframeOrFrame"), Some(1.0));
        assert_eq!(features.get("MissingTitle"), Some(1.0));
        assert_eq!(features.get("NumSensitiveWords"), Some(1.0));
        assert_eq!(features.get("NoHttps"), Some(1.0));
    }

    #[tokio::test]
    async fn test_benign_page_is_benign() {
        let base = localhost(&start_test_server().await);
        let detector = live_detector(Duration::from_secs(5));

        let result = detector.classify(&format!("{}/docs", base)).await.unwrap();
        assert!(result.content_fetch_succeeded);
        assert_eq!(result.label, Label::Benign);
        assert_eq!(result.features.get("ExtFavicon"), Some(0.0));
        assert_eq!(result.features.get("PctExtResourceUrls"), Some(0.0));
        assert_eq!(result.features.get("RelativeFormAction"), Some(1.0));
        assert_eq!(result.features.get("MissingTitle"), Some(0.0));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_malicious() {
        let base = start_test_server().await;
        let detector = live_detector(Duration::from_millis(200));

        let result = detector.classify(&format!("{}/slow", base)).await.unwrap();
        assert!(!result.content_fetch_succeeded);
        assert_eq!(result.label, Label::Malicious);
        assert_eq!(result.reason, ClassificationReason::ContentUnavailable);
    }

    #[tokio::test]
    async fn test_non_200_is_malicious() {
        let base = start_test_server().await;
        let detector = live_detector(Duration::from_secs(5));

        let result = detector.classify(&format!("{}/gone", base)).await.unwrap();
        assert!(!result.content_fetch_succeeded);
        assert_eq!(result.label, Label::Malicious);
        // Content features stay at their defaults
        assert_eq!(result.features.get("ExtFavicon"), Some(0.0));
        assert_eq!(result.features.get("RelativeFormAction"), Some(0.0));
    }

    #[tokio::test]
    async fn test_any_input_yields_a_full_vector_and_a_label() {
        let detector = detector_with(
            Arc::new(UnreachableFetcher),
            Arc::new(shipped_model()),
            Duration::from_secs(1),
        );
        let schema = FeatureSchema::training();

        for input in [
            "",
            "example.com",
            "http://",
            "https://[::1",
            "://///??##",
            "javascript:alert(1)",
            "http://例子.测试/路径?查询=1",
            "%%%%",
            "https://user@192.168.0.1:8080//a//b?x=1&y=2#f",
        ] {
            let result = detector.classify(input).await.unwrap();
            assert_eq!(result.label, Label::Malicious, "{:?}", input);
            assert_eq!(result.features.len(), schema.len(), "{:?}", input);
            let names: Vec<&str> = result.features.iter().map(|(n, _)| n).collect();
            let expected: Vec<&str> = schema.names().iter().map(String::as_str).collect();
            assert_eq!(names, expected, "{:?}", input);
        }
    }

    #[tokio::test]
    async fn test_schemeless_input_is_normalized() {
        let detector = detector_with(
            Arc::new(UnreachableFetcher),
            Arc::new(shipped_model()),
            Duration::from_secs(1),
        );
        let result = detector.classify("example.com").await.unwrap();
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.features.get("NoHttps"), Some(0.0));
        assert_eq!(result.features.get("UrlLength"), Some(19.0));
    }
}
