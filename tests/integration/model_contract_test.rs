// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 模型与特征模式的兼容性测试
///
/// 特征顺序不匹配属于集成错误，必须显式报告

#[cfg(test)]
mod tests {
    use crate::helpers::{detector_with, shipped_model, start_test_server};
    use phishscan::domain::classifier::Classifier;
    use phishscan::domain::models::feature_schema::FeatureSchema;
    use phishscan::engines::reqwest_engine::ReqwestEngine;
    use phishscan::infrastructure::model::linear_model::LinearModel;
    use phishscan::utils::errors::ModelError;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_shipped_model_matches_training_schema() {
        let model = shipped_model();
        assert!(model.ensure_schema(&FeatureSchema::training()).is_ok());
        assert_eq!(model.schema(), FeatureSchema::training());
    }

    #[test]
    fn test_reordered_model_is_rejected() {
        let mut model = shipped_model();
        model.feature_names.swap(0, 1);
        let err = model
            .ensure_schema(&FeatureSchema::training())
            .unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch { index: 0, .. }));
    }

    #[tokio::test]
    async fn test_model_mismatch_surfaces_as_error() {
        let base = start_test_server().await;
        let mut model: LinearModel = shipped_model();
        model.feature_names.pop();
        model.weights.pop();

        let detector = detector_with(
            Arc::new(ReqwestEngine),
            Arc::new(model),
            Duration::from_secs(5),
        );
        let err = detector
            .classify(&format!("{}/docs", base))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 47,
                got: 48
            }
        ));
    }
}
