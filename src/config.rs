//! Activation gate read from Lambda environment
//!

/// Enables the lookup handler, any non-empty value
pub const LOOKUP_ACM_ENV: &str = "LOOKUP_ACM";

/// Set by the Lambda runtime, absent when not running on AWS Lambda
pub const RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Activation {
    lookup_acm: Option<String>,
    runtime_api: Option<String>,
}

impl Activation {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            lookup_acm: lookup(LOOKUP_ACM_ENV),
            runtime_api: lookup(RUNTIME_API_ENV),
        }
    }

    /// Register the handler only when both settings are non-empty
    pub fn is_enabled(&self) -> bool {
        let non_empty = |value: &Option<String>| value.as_deref().map_or(false, |v| !v.is_empty());
        non_empty(&self.lookup_acm) && non_empty(&self.runtime_api)
    }

    /// Names of the settings that keep the handler disabled
    pub fn missing_settings(&self) -> Vec<&'static str> {
        [
            (LOOKUP_ACM_ENV, &self.lookup_acm),
            (RUNTIME_API_ENV, &self.runtime_api),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }
}
