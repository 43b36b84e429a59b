//! Hijri month names.

use serde::{Deserialize, Serialize};

use crate::CalendarError;

/// The twelve Hijri months, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlThaniyah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlUla,
        HijriMonth::JumadaAlThaniyah,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQadah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Month from its calendar number (1..=12).
    pub fn from_number(month: u32) -> Result<Self, CalendarError> {
        let idx = month
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .ok_or(CalendarError::InvalidMonth { month })?;
        Ok(*idx)
    }

    /// Calendar number, 1..=12.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Romanized display name.
    pub fn name(self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi al-Awwal",
            HijriMonth::RabiAlThani => "Rabi al-Thani",
            HijriMonth::JumadaAlUla => "Jumada al-Ula",
            HijriMonth::JumadaAlThaniyah => "Jumada al-Thaniyah",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Shaban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQadah => "Dhu al-Qadah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
