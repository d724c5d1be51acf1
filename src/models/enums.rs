//! Shared domain enums, stored as text columns

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Raised when a stored or submitted value is not a known variant
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Wires an enum to its canonical text form (database + wire format).
macro_rules! text_enum {
    ($name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Exact match on the canonical text form
            pub fn from_text(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_text(s).ok_or_else(|| UnknownVariant {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// PC / peripheral status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    #[default]
    Working,
    NotWorking,
}

text_enum!(DeviceStatus, "device status" {
    Working => "working",
    NotWorking => "not_working",
});

// ---------------------------------------------------------------------------
// Lab equipment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentCategory {
    #[default]
    Infrastructure,
    Appliance,
}

text_enum!(EquipmentCategory, "equipment category" {
    Infrastructure => "INFRASTRUCTURE",
    Appliance => "APPLIANCE",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentType {
    Server,
    Router,
    Switch,
    Hub,
    Projector,
    EBoard,
    Ac,
    Fan,
    Light,
    Ups,
    #[default]
    Other,
}

text_enum!(EquipmentType, "equipment type" {
    Server => "SERVER",
    Router => "ROUTER",
    Switch => "SWITCH",
    Hub => "HUB",
    Projector => "PROJECTOR",
    EBoard => "E_BOARD",
    Ac => "AC",
    Fan => "FAN",
    Light => "LIGHT",
    Ups => "UPS",
    Other => "OTHER",
});

impl EquipmentType {
    /// Types that may carry network details
    pub fn is_networked_kind(&self) -> bool {
        matches!(
            self,
            EquipmentType::Router
                | EquipmentType::Switch
                | EquipmentType::Hub
                | EquipmentType::Server
                | EquipmentType::EBoard
        )
    }

    /// Types that may carry electrical appliance details
    pub fn is_electrical(&self) -> bool {
        matches!(self, EquipmentType::Ac | EquipmentType::Fan | EquipmentType::Light)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    Working,
    NotWorking,
    UnderRepair,
}

text_enum!(EquipmentStatus, "equipment status" {
    Working => "working",
    NotWorking => "not_working",
    UnderRepair => "under_repair",
});

// ---------------------------------------------------------------------------
// Peripherals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PeripheralType {
    Monitor,
    Keyboard,
    Mouse,
    Headset,
    Webcam,
    Printer,
    Speaker,
    Other,
}

text_enum!(PeripheralType, "peripheral type" {
    Monitor => "monitor",
    Keyboard => "keyboard",
    Mouse => "mouse",
    Headset => "headset",
    Webcam => "webcam",
    Printer => "printer",
    Speaker => "speaker",
    Other => "other",
});

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    Fixed,
}

text_enum!(MaintenanceStatus, "maintenance status" {
    Pending => "pending",
    Fixed => "fixed",
});

// ---------------------------------------------------------------------------
// PC operating system
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum OsArchitecture {
    #[serde(rename = "32-bit")]
    Bits32,
    #[default]
    #[serde(rename = "64-bit")]
    Bits64,
}

text_enum!(OsArchitecture, "OS architecture" {
    Bits32 => "32-bit",
    Bits64 => "64-bit",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_type_text_round_trip() {
        for ty in EquipmentType::ALL {
            assert_eq!(EquipmentType::from_text(ty.as_str()), Some(*ty));
        }
        assert_eq!(EquipmentType::from_text("E_BOARD"), Some(EquipmentType::EBoard));
        assert_eq!(EquipmentType::from_text("laptop"), None);
    }

    #[test]
    fn test_serde_matches_text_form() {
        let json = serde_json::to_string(&EquipmentType::EBoard).unwrap();
        assert_eq!(json, "\"E_BOARD\"");
        let json = serde_json::to_string(&EquipmentStatus::UnderRepair).unwrap();
        assert_eq!(json, "\"under_repair\"");
    }

    #[test]
    fn test_os_architecture_wire_form() {
        assert_eq!(serde_json::to_string(&OsArchitecture::Bits32).unwrap(), "\"32-bit\"");
        let parsed: OsArchitecture = serde_json::from_str("\"64-bit\"").unwrap();
        assert_eq!(parsed, OsArchitecture::Bits64);
        assert_eq!(OsArchitecture::default().as_str(), "64-bit");
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = "broken".parse::<DeviceStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown device status value: broken");
    }

    #[test]
    fn test_type_families() {
        assert!(EquipmentType::Server.is_networked_kind());
        assert!(EquipmentType::EBoard.is_networked_kind());
        assert!(!EquipmentType::Projector.is_networked_kind());
        assert!(EquipmentType::Fan.is_electrical());
        assert!(!EquipmentType::Ups.is_electrical());
    }
}
