//! Configuration Loader
//!
//! 環境変数（および任意の `.env` ファイル）から設定を読み込む

use log::LevelFilter;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::domain::entities::session::Credentials;
use crate::domain::errors::{PlaylistError, Result};

pub const BASE_URL_KEY: &str = "MS_BASE_URL";
pub const USERNAME_KEY: &str = "MS_USERNAME";
pub const PASSWORD_KEY: &str = "MS_PASSWORD";
pub const LOG_LEVEL_KEY: &str = "MS_LOG_LEVEL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// ログの詳細度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl FromStr for LogLevel {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(PlaylistError::Configuration(format!(
                "{} must be one of DEBUG, INFO, WARNING, ERROR, CRITICAL (got '{}')",
                LOG_LEVEL_KEY, other
            ))),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            // `log` has no level above error
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

/// 実行時設定
///
/// 起動時に一度だけ構築され、以後は変更されない
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub log_level: LogLevel,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// プロセス環境変数と `.env` ファイルから設定を読み込む
    ///
    /// Process environment wins over the file. A missing file is ignored;
    /// the file never mutates the process environment.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let file_vars = match env_file {
            Some(path) if path.is_file() => read_env_file(path)?,
            _ => HashMap::new(),
        };

        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        })
    }

    /// 任意のキー検索関数から設定を構築する
    ///
    /// Defaults apply only to unset keys; a key set to an empty string is
    /// reported as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let base_url = resolve(BASE_URL_KEY, DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let username = resolve(USERNAME_KEY, DEFAULT_USERNAME);
        let password = resolve(PASSWORD_KEY, DEFAULT_PASSWORD);

        let missing: Vec<&str> = [
            (BASE_URL_KEY, &base_url),
            (USERNAME_KEY, &username),
            (PASSWORD_KEY, &password),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| *key)
        .collect();

        if !missing.is_empty() {
            return Err(PlaylistError::Configuration(format!(
                "Missing configuration for: {}",
                missing.join(", ")
            )));
        }

        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(raw) => raw.parse()?,
            None => LogLevel::default(),
        };

        Ok(Self {
            base_url,
            username,
            password,
            log_level,
        })
    }

    /// ログイン用の認証情報
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

/// `.env` ファイルを読み込む
///
/// Values are returned as a map; the process environment is left untouched.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let to_config_error = |e: dotenvy::Error| {
        PlaylistError::Configuration(format!("Failed to read {}: {}", path.display(), e))
    };

    dotenvy::from_path_iter(path)
        .map_err(to_config_error)?
        .map(|item| item.map_err(to_config_error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "admin");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_trailing_slash_removed() {
        let config =
            Config::from_lookup(lookup_from(&[(BASE_URL_KEY, "https://music.example.com/")]))
                .unwrap();
        assert_eq!(config.base_url, "https://music.example.com");
    }

    #[test]
    fn test_empty_required_values_are_reported() {
        let err = Config::from_lookup(lookup_from(&[(USERNAME_KEY, ""), (PASSWORD_KEY, "")]))
            .unwrap_err();

        match err {
            PlaylistError::Configuration(msg) => {
                assert!(msg.contains(USERNAME_KEY));
                assert!(msg.contains(PASSWORD_KEY));
                assert!(!msg.contains(BASE_URL_KEY));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_base_url_of_only_slashes_is_missing() {
        let err = Config::from_lookup(lookup_from(&[(BASE_URL_KEY, "/")])).unwrap_err();
        assert!(err.to_string().contains(BASE_URL_KEY));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("Critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_invalid_log_level_is_configuration_error() {
        let err = Config::from_lookup(lookup_from(&[(LOG_LEVEL_KEY, "LOUD")])).unwrap_err();
        assert!(matches!(err, PlaylistError::Configuration(_)));
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::Warning), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Critical), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }

    fn env_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_env_file() {
        let file = env_file(
            r#"
# mStream server
MS_BASE_URL=http://nas.local:3000
export MS_USERNAME="dj"
MS_PASSWORD='p=ss word'
GREETING="say \"hi\""
"#,
        );

        let vars = read_env_file(file.path()).unwrap();

        assert_eq!(vars["MS_BASE_URL"], "http://nas.local:3000");
        assert_eq!(vars["MS_USERNAME"], "dj");
        assert_eq!(vars["MS_PASSWORD"], "p=ss word");
        assert_eq!(vars["GREETING"], r#"say "hi""#);
    }

    #[test]
    fn test_read_env_file_strips_inline_comment() {
        let file = env_file("MS_PASSWORD=secret # prod password\n");

        let vars = read_env_file(file.path()).unwrap();

        assert_eq!(vars["MS_PASSWORD"], "secret");
    }

    #[test]
    fn test_read_env_file_does_not_touch_process_env() {
        let file = env_file("M3USYNC_TEST_ONLY_KEY=value\n");

        let vars = read_env_file(file.path()).unwrap();

        assert_eq!(vars["M3USYNC_TEST_ONLY_KEY"], "value");
        assert!(std::env::var_os("M3USYNC_TEST_ONLY_KEY").is_none());
    }

    #[test]
    fn test_read_env_file_malformed_line_is_configuration_error() {
        let file = env_file("MS_USERNAME=dj\nnot a pair\n");

        let err = read_env_file(file.path()).unwrap_err();

        assert!(matches!(err, PlaylistError::Configuration(_)));
    }

    fn process_env_is_clean() -> bool {
        [BASE_URL_KEY, USERNAME_KEY, PASSWORD_KEY, LOG_LEVEL_KEY]
            .iter()
            .all(|key| std::env::var_os(key).is_none())
    }

    #[test]
    fn test_load_reads_env_file() {
        if !process_env_is_clean() {
            return;
        }
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "MS_USERNAME=from-file").unwrap();
        writeln!(file, "MS_LOG_LEVEL=debug").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.username, "from-file");
        assert_eq!(config.password, DEFAULT_PASSWORD);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_load_missing_env_file_is_ignored() {
        if !process_env_is_clean() {
            return;
        }
        let config = Config::load(Some(Path::new("/definitely/not/here/.env"))).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (USERNAME_KEY, "dj"),
            (PASSWORD_KEY, "secret"),
        ]))
        .unwrap();

        let creds = config.credentials();
        assert_eq!(creds.username, "dj");
        assert_eq!(creds.password, "secret");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
