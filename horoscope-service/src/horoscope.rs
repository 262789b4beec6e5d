use crate::{error::ApiError, state::AppState, zodiac::ZODIAC_SIGNS};
use anyhow::Context;
use axum::{
    extract::{RawQuery, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, fs, sync::Arc};
use tracing::debug;

/// Humor level applied when the request does not name one.
pub const DEFAULT_HUMOR_LEVEL: &str = "normal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumorLevel {
    Light,
    Normal,
    Strict,
}

impl HumorLevel {
    pub const ALL: [HumorLevel; 3] = [HumorLevel::Light, HumorLevel::Normal, HumorLevel::Strict];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(HumorLevel::Light),
            "normal" => Some(HumorLevel::Normal),
            "strict" => Some(HumorLevel::Strict),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HumorLevel::Light => "light",
            HumorLevel::Normal => "normal",
            HumorLevel::Strict => "strict",
        }
    }
}

impl fmt::Display for HumorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk layout of a horoscope data file: one table of sign -> text per level.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    light: HashMap<String, String>,
    #[serde(default)]
    normal: HashMap<String, String>,
    #[serde(default)]
    strict: HashMap<String, String>,
}

/// Humor level -> sign -> horoscope text. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct HoroscopeTable {
    levels: HashMap<HumorLevel, HashMap<String, String>>,
}

impl HoroscopeTable {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let file: TableFile = toml::from_str(s)?;
        Ok(Self::from(file))
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading horoscope data '{}'", path))?;
        Self::from_toml_str(&s).with_context(|| format!("parsing horoscope data '{}'", path))
    }

    /// The stock texts shipped with the service: three signs per level.
    pub fn builtin() -> Self {
        fn level(entries: [(&str, &str); 3]) -> HashMap<String, String> {
            entries
                .iter()
                .map(|(sign, text)| (sign.to_string(), text.to_string()))
                .collect()
        }

        let mut levels = HashMap::new();
        levels.insert(
            HumorLevel::Light,
            level([
                ("Auns", "Šodien ir lieliska diena jaunu sākumu veidošanai!"),
                ("Vērsis", "Esi pacietīgs - labākais vēl priekšā!"),
                ("Dvīņi", "Komunikācija būs jūsu stiprā puse šodien."),
            ]),
        );
        levels.insert(
            HumorLevel::Normal,
            level([
                ("Auns", "Planētu izlīdzinājums rāda labu laiku biznesa lietām."),
                ("Vērsis", "Jūtieties brīvi izmantot savu praktisko gudrību."),
                ("Dvīņi", "Mēness ietekme uzlabos jūsu radošo enerģiju."),
            ]),
        );
        levels.insert(
            HumorLevel::Strict,
            level([
                ("Auns", "ĀTRS BRĪDINĀJUMS: Šodien jūs varat mainīt savu likteni!"),
                ("Vērsis", "NEAUTS PĀRSTEIGUMS: Jūsu centība atnesīs milzīgus augļus!"),
                ("Dvīņi", "SATRIECOŠI: Šodien jūs atklāsiet kādu lielu noslēpumu!"),
            ]),
        );
        HoroscopeTable { levels }
    }

    /// Looks up `sign` under the mapping selected by `humor_level`. An unknown
    /// level selects an empty mapping, so every sign is rejected for it.
    pub fn lookup(&self, humor_level: &str, sign: &str) -> Option<&str> {
        HumorLevel::from_name(humor_level)
            .and_then(|level| self.levels.get(&level))
            .and_then(|signs| signs.get(sign))
            .map(String::as_str)
    }

    /// Canonical zodiac signs without text under `level`.
    pub fn missing_signs(&self, level: HumorLevel) -> Vec<&'static str> {
        let signs = self.levels.get(&level);
        ZODIAC_SIGNS
            .iter()
            .map(|z| z.name)
            .filter(|name| !signs.map_or(false, |m| m.contains_key(*name)))
            .collect()
    }
}

impl From<TableFile> for HoroscopeTable {
    fn from(file: TableFile) -> Self {
        let mut levels = HashMap::new();
        levels.insert(HumorLevel::Light, file.light);
        levels.insert(HumorLevel::Normal, file.normal);
        levels.insert(HumorLevel::Strict, file.strict);
        HoroscopeTable { levels }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct HoroscopeQuery {
    pub sign: Option<String>,
    pub humor_level: Option<String>,
}

impl HoroscopeQuery {
    /// Parses a raw query string. Repeated keys keep their first value and
    /// unknown keys are ignored, so parsing never fails.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = HoroscopeQuery::default();
        let pairs = url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "sign" => &mut query.sign,
                "humor_level" => &mut query.humor_level,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HoroscopeResponse {
    pub sign: String,
    pub humor_level: String,
    pub horoscope: String,
    pub date: String,
}

pub fn get_horoscope(
    table: &HoroscopeTable,
    sign: Option<&str>,
    humor_level: Option<&str>,
    today: NaiveDate,
) -> Result<HoroscopeResponse, ApiError> {
    let humor_level = humor_level.unwrap_or(DEFAULT_HUMOR_LEVEL);
    // A missing sign is indistinguishable from an unknown one.
    let sign = sign.ok_or(ApiError::InvalidSign)?;
    let horoscope = table
        .lookup(humor_level, sign)
        .ok_or(ApiError::InvalidSign)?;

    Ok(HoroscopeResponse {
        sign: sign.to_string(),
        humor_level: humor_level.to_string(),
        horoscope: horoscope.to_string(),
        date: today.format("%Y-%m-%d").to_string(),
    })
}

pub async fn horoscope_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<HoroscopeResponse>, ApiError> {
    let query = HoroscopeQuery::parse(raw.as_deref());
    debug!(sign = ?query.sign, humor_level = ?query.humor_level, "Received horoscope request");

    let today = chrono::Local::now().date_naive();
    match get_horoscope(
        &state.horoscopes,
        query.sign.as_deref(),
        query.humor_level.as_deref(),
        today,
    ) {
        Ok(resp) => Ok(Json(resp)),
        Err(e) => {
            debug!(sign = ?query.sign, humor_level = ?query.humor_level, "Rejected: {}", e);
            Err(e)
        }
    }
}
