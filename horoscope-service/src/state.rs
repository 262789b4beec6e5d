use crate::config::Config;
use crate::horoscope::{HoroscopeTable, HumorLevel};
use tracing::{debug, info, warn};

/// Read-only state shared by all request handlers.
pub struct AppState {
    pub horoscopes: HoroscopeTable,
}

impl AppState {
    pub fn new(horoscopes: HoroscopeTable) -> Self {
        AppState { horoscopes }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let horoscopes = match &cfg.data_file {
            Some(path) => {
                let table = HoroscopeTable::from_file(path)?;
                info!("Loaded horoscope data from '{}'", path);
                table
            }
            None => {
                debug!("No data_file configured, using built-in horoscope table");
                HoroscopeTable::builtin()
            }
        };

        // Signs without text are answered with InvalidSign for that level.
        for level in HumorLevel::ALL {
            let missing = horoscopes.missing_signs(level);
            if !missing.is_empty() {
                warn!(
                    humor_level = %level,
                    "{} of 12 zodiac signs have no horoscope text: {}",
                    missing.len(),
                    missing.join(", ")
                );
            }
        }

        Ok(AppState::new(horoscopes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appstate_from_default_config_uses_builtin_table() {
        let st = AppState::from_config(&Config::default()).expect("build state");
        assert_eq!(
            st.horoscopes.lookup("normal", "Auns"),
            Some("Planētu izlīdzinājums rāda labu laiku biznesa lietām.")
        );
    }

    #[test]
    fn appstate_loads_configured_data_file() {
        let cfg = Config {
            data_file: Some("horoscopes.toml.example".to_string()),
            ..Config::default()
        };
        let st = AppState::from_config(&cfg).expect("build state");
        assert_eq!(
            st.horoscopes.lookup("light", "Vērsis"),
            Some("Esi pacietīgs - labākais vēl priekšā!")
        );
    }

    #[test]
    fn appstate_rejects_missing_data_file() {
        let cfg = Config {
            data_file: Some("no-such-horoscopes.toml".to_string()),
            ..Config::default()
        };
        let result = AppState::from_config(&cfg);
        assert!(result.is_err(), "should fail with missing data file");
        if let Err(e) = result {
            let err_msg = format!("{:#}", e);
            assert!(
                err_msg.contains("reading horoscope data"),
                "error message should mention the data file: {}",
                err_msg
            );
        }
    }
}
