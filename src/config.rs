// ============================================================================
// Configuration
// ============================================================================
// Lue depuis les variables d'environnement au démarrage :
// - ARIGOPAY_LOG_DIR : répertoire des logs
// - ARIGOPAY_SCREEN : écran de départ ("investment" ou "home")
// - ARIGOPAY_SNAPSHOT : document JSON à la place des données d'exemple
// ============================================================================

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::app::Screen;

pub const ENV_LOG_DIR: &str = "ARIGOPAY_LOG_DIR";
pub const ENV_SCREEN: &str = "ARIGOPAY_SCREEN";
pub const ENV_SNAPSHOT: &str = "ARIGOPAY_SNAPSHOT";

/// Réglages de l'application
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub start_screen: Screen,
    pub snapshot: Option<PathBuf>,
}

impl AppConfig {
    /// Lit la configuration depuis l'environnement du processus
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lit la configuration depuis une fonction de recherche
    ///
    /// CONCEPT RUST : Injection par closure
    /// - Les tests passent une HashMap, main() passe std::env::var
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Les valeurs vides comptent comme absentes
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_dir = get(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        let start_screen = match get(ENV_SCREEN) {
            Some(name) => parse_screen(&name)?,
            None => Screen::default(),
        };

        let snapshot = get(ENV_SNAPSHOT).map(PathBuf::from);

        Ok(Self {
            log_dir,
            start_screen,
            snapshot,
        })
    }
}

/// Répertoire de logs par défaut
///
/// - Linux/WSL : ~/.local/share/arigopay/logs
/// - macOS : ~/Library/Application Support/arigopay/logs
/// - Sinon : ./logs
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("arigopay").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

fn parse_screen(name: &str) -> Result<Screen> {
    match name.trim().to_lowercase().as_str() {
        "investment" => Ok(Screen::Investment),
        "home" => Ok(Screen::Home),
        other => bail!(
            "{} inconnu : '{}' (attendu : investment ou home)",
            ENV_SCREEN,
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.start_screen, Screen::Investment);
        assert_eq!(config.snapshot, None);
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_LOG_DIR, "/tmp/arigo-logs"),
            (ENV_SCREEN, " HOME "),
            (ENV_SNAPSHOT, "data.json"),
        ])
        .unwrap();

        assert_eq!(config.log_dir, PathBuf::from("/tmp/arigo-logs"));
        assert_eq!(config.start_screen, Screen::Home);
        assert_eq!(config.snapshot, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = config_from(&[(ENV_SCREEN, ""), (ENV_SNAPSHOT, "  ")]).unwrap();
        assert_eq!(config.start_screen, Screen::Investment);
        assert_eq!(config.snapshot, None);
    }

    #[test]
    fn test_unknown_screen_is_an_error() {
        let err = config_from(&[(ENV_SCREEN, "ledger")]).unwrap_err();
        assert!(err.to_string().contains("ledger"));
    }
}
