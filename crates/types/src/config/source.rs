use crate::ConfigError;
use std::{path::PathBuf, str::FromStr};
use url::Url;

/// Where the Synthetix address registry is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// A local checkout of the published deployment directory.
    Dir(PathBuf),
    /// An HTTP mirror of the published deployment directory.
    Http(Url),
}

impl Default for RegistrySource {
    fn default() -> Self {
        Self::Http(
            Url::parse(rebalancer_constants::DEFAULT_REGISTRY_URL)
                .expect("default registry URL is valid"),
        )
    }
}

impl core::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dir(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

impl FromStr for RegistrySource {
    type Err = ConfigError;

    /// Values starting with `http://` or `https://` are URLs, anything else
    /// is a directory.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Http(Url::parse(s)?))
        } else {
            Ok(Self::Dir(PathBuf::from(s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sources() {
        assert_eq!(
            "./node_modules/synthetix/publish/deployed".parse::<RegistrySource>().unwrap(),
            RegistrySource::Dir(PathBuf::from("./node_modules/synthetix/publish/deployed"))
        );
        assert!(matches!(
            "https://unpkg.com/synthetix/publish/deployed/".parse::<RegistrySource>().unwrap(),
            RegistrySource::Http(_)
        ));
        assert!("https://".parse::<RegistrySource>().is_err());
    }

    #[test]
    fn default_is_published_registry() {
        assert_eq!(
            RegistrySource::default().to_string(),
            rebalancer_constants::DEFAULT_REGISTRY_URL
        );
    }
}
