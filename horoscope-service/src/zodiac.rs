use axum::Json;
use serde::Serialize;
use tracing::debug;

/// Display metadata for one zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub icon: &'static str,
    pub dates: &'static str,
}

const fn sign(name: &'static str, icon: &'static str, dates: &'static str) -> ZodiacSign {
    ZodiacSign { name, icon, dates }
}

/// The twelve signs in calendar order, Aries through Pisces.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    sign("Auns", "♈", "21.03 - 19.04"),
    sign("Vērsis", "♉", "20.04 - 20.05"),
    sign("Dvīņi", "♊", "21.05 - 20.06"),
    sign("Vēzis", "♋", "21.06 - 22.07"),
    sign("Lauva", "♌", "23.07 - 22.08"),
    sign("Jaunava", "♍", "23.08 - 22.09"),
    sign("Svari", "♎", "23.09 - 22.10"),
    sign("Skorpions", "♏", "23.10 - 21.11"),
    sign("Strēlnieks", "♐", "22.11 - 21.12"),
    sign("Mežāzis", "♑", "22.12 - 19.01"),
    sign("Ūdensvīrs", "♒", "20.01 - 18.02"),
    sign("Zivis", "♓", "19.02 - 20.03"),
];

pub async fn zodiac_signs_handler() -> Json<&'static [ZodiacSign]> {
    debug!("Received zodiac_signs request");
    Json(&ZODIAC_SIGNS[..])
}
