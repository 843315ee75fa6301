//! The duty-status taxonomy.
//!
//! Statuses map to the four rows of a standard driver's log grid.  The
//! integer codes are a fixed external contract (ELD log sheets and every
//! downstream consumer key on them) and must never be renumbered:
//!
//! | Code | Status                |
//! |------|-----------------------|
//! | 1    | Off Duty              |
//! | 2    | Sleeper Berth         |
//! | 3    | Driving               |
//! | 4    | On Duty (not driving) |
//!
//! `SleeperBerth` is part of the taxonomy but is never emitted by the
//! current rule profile — reserved for future split-duty support.

use crate::HosError;

/// One of the four duty statuses on a driver's daily log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DutyStatus {
    OffDuty          = 1,
    SleeperBerth     = 2,
    Driving          = 3,
    OnDutyNotDriving = 4,
}

impl DutyStatus {
    /// The wire code for this status (1–4).
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// `true` for any status that counts against the 14-hour duty window.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }
}

impl TryFrom<u8> for DutyStatus {
    type Error = HosError;

    fn try_from(code: u8) -> Result<Self, HosError> {
        match code {
            1 => Ok(DutyStatus::OffDuty),
            2 => Ok(DutyStatus::SleeperBerth),
            3 => Ok(DutyStatus::Driving),
            4 => Ok(DutyStatus::OnDutyNotDriving),
            other => Err(HosError::InvalidStatusCode(other)),
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DutyStatus::OffDuty          => "Off Duty",
            DutyStatus::SleeperBerth     => "Sleeper Berth",
            DutyStatus::Driving          => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (not driving)",
        };
        f.write_str(name)
    }
}

// ── Serde: statuses travel as bare integer codes ──────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DutyStatus;

    impl Serialize for DutyStatus {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u8(self.code())
        }
    }

    impl<'de> Deserialize<'de> for DutyStatus {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let code = u8::deserialize(deserializer)?;
            DutyStatus::try_from(code).map_err(D::Error::custom)
        }
    }
}
