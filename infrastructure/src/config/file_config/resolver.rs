//! Resolver configuration from TOML (`[resolver]` section)

use source_application::ResolutionParams;
use source_domain::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use source_domain::{MissingModelTypePolicy, ModelDomainType};
use serde::{Deserialize, Serialize};

/// Raw resolver configuration from TOML
///
/// # Example
///
/// ```toml
/// [resolver]
/// missing_model_type = "default"   # "reject" or "default"
/// default_model_type = "WLS"       # "WLS", "RestrictedJRF", "JRF"
/// max_concurrent_loads = 8
/// fail_fast = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    /// Policy for FromModel without a model domain type: "reject" or "default"
    pub missing_model_type: String,
    /// Model domain type substituted under the "default" policy
    pub default_model_type: String,
    /// Maximum number of documents loaded at once
    pub max_concurrent_loads: usize,
    /// Stop at the first rejected domain
    pub fail_fast: bool,
}

impl Default for FileResolverConfig {
    fn default() -> Self {
        Self {
            missing_model_type: "reject".to_string(),
            default_model_type: "WLS".to_string(),
            max_concurrent_loads: 8,
            fail_fast: false,
        }
    }
}

impl FileResolverConfig {
    /// Parse the missing-model policy, returning warnings on failure.
    ///
    /// Accepts "reject" and "default" (case-insensitive). Unknown values fall
    /// back to "reject". The model domain type itself is matched exactly,
    /// like every other model domain type literal.
    pub fn parse_missing_model_type(&self) -> (MissingModelTypePolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let policy = match self.missing_model_type.to_lowercase().as_str() {
            "reject" => {
                if self.default_model_type != FileResolverConfig::default().default_model_type {
                    issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::IgnoredField {
                            field: "resolver.default_model_type".to_string(),
                        },
                        message: "resolver.default_model_type is ignored while missing_model_type = 'reject'"
                            .to_string(),
                    });
                }
                MissingModelTypePolicy::Reject
            }
            "default" => match self.default_model_type.parse::<ModelDomainType>() {
                Ok(model) => MissingModelTypePolicy::DefaultTo(model),
                Err(_) => {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::InvalidEnumValue {
                            field: "resolver.default_model_type".to_string(),
                            value: self.default_model_type.clone(),
                            valid_values: ModelDomainType::ALL
                                .iter()
                                .map(|m| m.to_string())
                                .collect(),
                        },
                        message: format!(
                            "resolver.default_model_type: unknown value '{}', falling back to 'reject'",
                            self.default_model_type
                        ),
                    });
                    MissingModelTypePolicy::Reject
                }
            },
            _ => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "resolver.missing_model_type".to_string(),
                        value: self.missing_model_type.clone(),
                        valid_values: vec!["reject".to_string(), "default".to_string()],
                    },
                    message: format!(
                        "resolver.missing_model_type: unknown value '{}', falling back to 'reject'",
                        self.missing_model_type
                    ),
                });
                MissingModelTypePolicy::Reject
            }
        };

        (policy, issues)
    }

    /// Convert into application parameters. Invalid values use their fallbacks.
    pub fn to_params(&self) -> ResolutionParams {
        ResolutionParams::default()
            .with_missing_model_type(self.parse_missing_model_type().0)
            .with_max_concurrent_loads(self.max_concurrent_loads)
            .with_fail_fast(self.fail_fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> FileResolverConfig {
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        config.resolver
    }

    #[test]
    fn test_resolver_config_deserialize() {
        let resolver = parse(
            r#"
[resolver]
missing_model_type = "default"
default_model_type = "RestrictedJRF"
max_concurrent_loads = 2
fail_fast = true
"#,
        );
        let (policy, issues) = resolver.parse_missing_model_type();
        assert_eq!(
            policy,
            MissingModelTypePolicy::DefaultTo(ModelDomainType::RestrictedJrf)
        );
        assert!(issues.is_empty());

        let params = resolver.to_params();
        assert_eq!(params.max_concurrent_loads, 2);
        assert!(params.fail_fast);
        assert_eq!(params.missing_model_type, policy);
    }

    #[test]
    fn test_default_is_reject_without_issues() {
        let (policy, issues) = FileResolverConfig::default().parse_missing_model_type();
        assert_eq!(policy, MissingModelTypePolicy::Reject);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_policy_name_is_case_insensitive() {
        let resolver = parse(
            r#"
[resolver]
missing_model_type = "Default"
"#,
        );
        assert_eq!(
            resolver.parse_missing_model_type().0,
            MissingModelTypePolicy::DefaultTo(ModelDomainType::Wls)
        );
    }

    #[test]
    fn test_typo_policy_warns_and_rejects() {
        let resolver = parse(
            r#"
[resolver]
missing_model_type = "typo"
"#,
        );
        let (policy, issues) = resolver.parse_missing_model_type();
        assert_eq!(policy, MissingModelTypePolicy::Reject);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "resolver.missing_model_type"
        ));
    }

    #[test]
    fn test_unknown_default_model_type_is_error() {
        let resolver = parse(
            r#"
[resolver]
missing_model_type = "default"
default_model_type = "wls"
"#,
        );
        let (policy, issues) = resolver.parse_missing_model_type();
        assert_eq!(policy, MissingModelTypePolicy::Reject);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_default_model_type_ignored_under_reject() {
        let resolver = parse(
            r#"
[resolver]
default_model_type = "JRF"
"#,
        );
        let (policy, issues) = resolver.parse_missing_model_type();
        assert_eq!(policy, MissingModelTypePolicy::Reject);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::IgnoredField { field } if field == "resolver.default_model_type"
        ));
    }
}
