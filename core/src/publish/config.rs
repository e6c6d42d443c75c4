use serde::{Deserialize, Serialize};

/// Name the damped oscillation is stored under on the service.
pub const DEFAULT_FILENAME: &str = "s6_damped_oscillation-default-style";

/// What the service does when `filename` already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOpt {
    #[default]
    New,
    Overwrite,
    Append,
    Extend,
}

impl FileOpt {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOpt::New => "new",
            FileOpt::Overwrite => "overwrite",
            FileOpt::Append => "append",
            FileOpt::Extend => "extend",
        }
    }
}

impl std::str::FromStr for FileOpt {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "new" => Ok(FileOpt::New),
            "overwrite" => Ok(FileOpt::Overwrite),
            "append" => Ok(FileOpt::Append),
            "extend" => Ok(FileOpt::Extend),
            other => Err(format!("unknown fileopt '{}'", other)),
        }
    }
}

/// Options sent alongside a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub strip_style: bool,
    pub filename: String,
    pub fileopt: FileOpt,
    pub world_readable: bool,
    pub resize: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            strip_style: true,
            filename: DEFAULT_FILENAME.into(),
            fileopt: FileOpt::New,
            world_readable: true,
            resize: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requests_stripped_style_under_fixed_name() {
        let config = PublishConfig::default();
        assert!(config.strip_style);
        assert_eq!(config.filename, "s6_damped_oscillation-default-style");
        assert_eq!(config.fileopt, FileOpt::New);
    }

    #[test]
    fn fileopt_parses_case_insensitively() {
        assert_eq!("Overwrite".parse::<FileOpt>().unwrap(), FileOpt::Overwrite);
        assert!("replace".parse::<FileOpt>().is_err());
        assert_eq!(FileOpt::Extend.as_str(), "extend");
    }
}
