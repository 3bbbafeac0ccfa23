// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 词法特征向量的公开 API 测试

#[cfg(test)]
mod tests {
    use phishscan::domain::models::feature_schema::{FeatureSchema, TRAINING_FEATURE_NAMES};
    use phishscan::domain::services::lexical_features::LexicalFeatureExtractor;

    #[test]
    fn test_lexical_vector_follows_schema_order() {
        let schema = FeatureSchema::training();
        let vector = LexicalFeatureExtractor::extract("https://a.b.co/p?q=1.2", &schema);
        let names: Vec<&str> = vector.iter().map(|(n, _)| n).collect();
        assert_eq!(names, TRAINING_FEATURE_NAMES.to_vec());
        assert_eq!(vector.get("NumDots"), Some(3.0));
        assert_eq!(vector.get("NoHttps"), Some(0.0));
    }

    #[test]
    fn test_lexical_extraction_is_idempotent() {
        let schema = FeatureSchema::training();
        for url in [
            "http://192.168.0.1/paypal/webscr?cmd=_login",
            "https://www.a.b.example.com/x",
            "garbage without scheme",
        ] {
            let first = LexicalFeatureExtractor::extract(url, &schema);
            let second = LexicalFeatureExtractor::extract(url, &schema);
            let a: Vec<u64> = first.values().iter().map(|v| v.to_bits()).collect();
            let b: Vec<u64> = second.values().iter().map(|v| v.to_bits()).collect();
            assert_eq!(a, b, "{}", url);
        }
    }

    #[test]
    fn test_phishy_url_features() {
        let schema = FeatureSchema::training();
        let vector = LexicalFeatureExtractor::extract(
            "http://192.168.0.1/paypal/webscr?cmd=_login&x=1",
            &schema,
        );
        assert_eq!(vector.get("IpAddress"), Some(1.0));
        assert_eq!(vector.get("NoHttps"), Some(1.0));
        assert_eq!(vector.get("NumSensitiveWords"), Some(4.0));
        assert_eq!(vector.get("NumQueryComponents"), Some(2.0));
        assert_eq!(vector.get("NumAmpersand"), Some(1.0));
        assert_eq!(vector.get("NumUnderscore"), Some(1.0));
    }

    #[test]
    fn test_custom_schema_only_contains_its_names() {
        let schema = FeatureSchema::new(["UrlLength".to_string(), "Unknown".to_string()]);
        let vector = LexicalFeatureExtractor::extract("https://x.com", &schema);
        assert_eq!(vector.values(), &[13.0, 0.0]);
    }
}
