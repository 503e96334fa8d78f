use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use dotenv::dotenv;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// JSON file backing the `/api/records` endpoints
    #[serde(default = "default_records_path")]
    pub records_path: String,
    /// env_logger filter, e.g. "info" or "experience_availability=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_records_path() -> String {
    "data/requests.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok();

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;

        settings.records_path = parse_env_var(&settings.records_path)?;
        settings.log_level = parse_env_var(&settings.log_level)?;

        Ok(settings)
    }

    /// Falls back to defaults when the file is absent; a present but broken
    /// file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::from_yaml(path)
    }
}

fn parse_env_var(value: &str) -> Result<String, Box<dyn std::error::Error>> {
    if value.starts_with("${") && value.ends_with("}") {
        let env_name = &value[2..value.len() - 1];
        match env::var(env_name) {
            Ok(val) => Ok(val),
            Err(_) => Err(format!("Environment variable '{}' not found", env_name).into()),
        }
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let settings = Settings::from_yaml_str("{}").unwrap();
        assert_eq!(settings.records_path, "data/requests.json");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn env_placeholders_are_expanded() {
        env::set_var("EXPERIENCE_RECORDS_TEST_PATH", "/srv/records.json");
        let settings =
            Settings::from_yaml_str("records_path: \"${EXPERIENCE_RECORDS_TEST_PATH}\"\n").unwrap();
        assert_eq!(settings.records_path, "/srv/records.json");
    }

    #[test]
    fn unset_placeholder_is_an_error() {
        let err = Settings::from_yaml_str("log_level: \"${EXPERIENCE_UNSET_LOG_LEVEL}\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("EXPERIENCE_UNSET_LOG_LEVEL"));
    }

    #[test]
    fn absent_file_gives_defaults() {
        let settings = Settings::load_or_default("does/not/exist.yaml").unwrap();
        assert_eq!(settings.log_level, "info");
    }
}
