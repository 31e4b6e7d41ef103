//! Enumerations reported by the humidifier
//!
//! Discriminants are the integers the device uses in its attribute list, so
//! they cannot be renumbered. The snapshot keeps raw integers; these types
//! provide the labels.

use serde::Serialize;
use std::fmt;

/// Label used for any value outside a known enumeration
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Fan speed setting. `Off` turns the whole device off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(i32)]
pub enum FanMode {
    Off = 0,
    Minimum = 1,
    Low = 2,
    Medium = 3,
    High = 4,
    Maximum = 5,
}

impl FanMode {
    pub const ALL: [FanMode; 6] = [
        FanMode::Off,
        FanMode::Minimum,
        FanMode::Low,
        FanMode::Medium,
        FanMode::High,
        FanMode::Maximum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FanMode::Off => "Off",
            FanMode::Minimum => "Minimum",
            FanMode::Low => "Low",
            FanMode::Medium => "Medium",
            FanMode::High => "High",
            FanMode::Maximum => "Maximum",
        }
    }
}

/// Target relative humidity setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(i32)]
pub enum DesiredHumidity {
    Percent45 = 0,
    Percent50 = 1,
    Percent55 = 2,
    Percent60 = 3,
    /// Runs continuously regardless of measured humidity
    AlwaysOn = 4,
}

impl DesiredHumidity {
    pub const ALL: [DesiredHumidity; 5] = [
        DesiredHumidity::Percent45,
        DesiredHumidity::Percent50,
        DesiredHumidity::Percent55,
        DesiredHumidity::Percent60,
        DesiredHumidity::AlwaysOn,
    ];

    /// Target relative humidity in percent
    pub fn percent(self) -> u8 {
        match self {
            DesiredHumidity::Percent45 => 45,
            DesiredHumidity::Percent50 => 50,
            DesiredHumidity::Percent55 => 55,
            DesiredHumidity::Percent60 => 60,
            DesiredHumidity::AlwaysOn => 100,
        }
    }

    /// Percent as displayed by the device ("45" .. "100")
    pub fn label(self) -> &'static str {
        match self {
            DesiredHumidity::Percent45 => "45",
            DesiredHumidity::Percent50 => "50",
            DesiredHumidity::Percent55 => "55",
            DesiredHumidity::Percent60 => "60",
            DesiredHumidity::AlwaysOn => "100",
        }
    }
}

/// Reservoir fill state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(i32)]
pub enum WaterLevel {
    Empty = 0,
    Low = 1,
    Good = 2,
}

impl WaterLevel {
    pub const ALL: [WaterLevel; 3] = [WaterLevel::Empty, WaterLevel::Low, WaterLevel::Good];

    pub fn label(self) -> &'static str {
        match self {
            WaterLevel::Empty => "Empty",
            WaterLevel::Low => "Low",
            WaterLevel::Good => "Good",
        }
    }
}

/// Integer conversions and display for the device enumerations.
macro_rules! device_enum {
    ($name:ident) => {
        impl $name {
            /// Label for a raw device value, [`UNKNOWN_LABEL`] if absent or out of range
            pub fn label_for(raw: Option<i32>) -> &'static str {
                raw.and_then(|value| Self::try_from(value).ok())
                    .map_or(UNKNOWN_LABEL, Self::label)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = i32;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::ALL
                    .into_iter()
                    .find(|variant| *variant as i32 == value)
                    .ok_or(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value as i32
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

device_enum!(FanMode);
device_enum!(DesiredHumidity);
device_enum!(WaterLevel);
