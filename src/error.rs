use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to parse config `{path}`")]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("failed to serialize config")]
  ConfigSerialize(#[from] toml::ser::Error),
  #[error("invalid test type `{0}`")]
  InvalidTestType(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
