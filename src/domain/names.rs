//! プロバイダ名・モデル名の Newtype

/// プロバイダプロファイル名（例: "openai", "chat", "echo"）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProviderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// モデル名（例: "text-davinci-003", "gpt-4o-mini"）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name() {
        let name = ProviderName::new("openai");
        assert_eq!(name.as_str(), "openai");
        assert_eq!(name.as_ref(), "openai");
    }

    #[test]
    fn test_model_name() {
        let name = ModelName::new("text-davinci-003");
        assert_eq!(name.as_str(), "text-davinci-003");
    }
}
