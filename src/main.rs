// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{bail, Context};
use clap::Parser;
use phishscan::config::settings::Settings;
use phishscan::domain::classifier::Classifier;
use phishscan::domain::models::classification::ClassificationResult;
use phishscan::domain::models::feature_schema::FeatureSchema;
use phishscan::domain::services::content_features::ContentFeatureExtractor;
use phishscan::domain::services::detection_service::PhishingDetector;
use phishscan::domain::services::feature_assembler::FeatureAssembler;
use phishscan::engines::reqwest_engine::ReqwestEngine;
use phishscan::infrastructure::model::linear_model::LinearModel;
use phishscan::utils::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// 钓鱼网站检测器
#[derive(Debug, Parser)]
#[command(name = "phishscan", version, about = "Classify URLs as benign or malicious")]
struct Cli {
    /// 模型文件路径（覆盖配置中的 model.path）
    #[arg(long)]
    model: Option<PathBuf>,

    /// 输出提取到的特征
    #[arg(long)]
    show_features: bool,

    /// 以 JSON 格式输出结果和日志
    #[arg(long)]
    json: bool,

    /// 待检测的 URL
    #[arg(required = true)]
    urls: Vec<String>,
}

/// 主函数
///
/// 加载配置与模型（失败即退出），然后依次检测每个 URL
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.json);
    phishscan::infrastructure::observability::metrics::init_metrics();

    let settings = Settings::new().context("failed to load configuration")?;
    info!("Configuration loaded");

    let model_path = cli.model.clone().unwrap_or_else(|| settings.model.path.clone());
    let model = LinearModel::from_file(&model_path)
        .with_context(|| format!("failed to load model from {}", model_path.display()))?;
    let schema = FeatureSchema::training();
    model
        .ensure_schema(&schema)
        .context("model feature order does not match the training schema")?;
    let classifier: Arc<dyn Classifier> = Arc::new(model);

    let content = ContentFeatureExtractor::new(
        Arc::new(ReqwestEngine),
        settings.fetch.timeout(),
        settings.fetch.user_agent.clone(),
    );
    let detector = PhishingDetector::new(FeatureAssembler::new(schema, content), classifier);

    let mut failures = 0usize;
    for input in &cli.urls {
        if input.trim().is_empty() {
            eprintln!("Please enter a URL.");
            failures += 1;
            continue;
        }

        match detector.classify(input).await {
            Ok(result) => print_result(&result, &cli)?,
            Err(e) => {
                error!(url = %input, error = %e, "Classification failed");
                eprintln!("An error occurred during prediction for {}: {}", input, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} URL(s) could not be classified", failures);
    }
    Ok(())
}

fn print_result(result: &ClassificationResult, cli: &Cli) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    println!("{}: {} ({})", result.url, result.label, result.reason);
    if !result.content_fetch_succeeded {
        println!(
            "  Could not fetch webpage content. URLs that cannot be reached or resolved are considered suspicious."
        );
    }
    if cli.show_features {
        for (name, value) in result.features.iter() {
            println!("  {:<36} {}", name, value);
        }
    }
    Ok(())
}
