//! Attribute list decoder - converts raw attribute fragments to typed deltas
//!
//! Values that fail to convert are dropped one by one; only malformed markup
//! fails a decode.

use std::str::FromStr;

use tracing::debug;
use wemo_parser::{Attribute, AttributeList, ParseResult};

use crate::model::WaterLevel;
use crate::snapshot::AttributeSnapshot;

/// Attribute names used by the humidifier
pub mod names {
    pub const FAN_MODE: &str = "FanMode";
    pub const DESIRED_HUMIDITY: &str = "DesiredHumidity";
    pub const CURRENT_HUMIDITY: &str = "CurrentHumidity";
    pub const NO_WATER: &str = "NoWater";
    pub const WATER_ADVISE: &str = "WaterAdvise";
    pub const FILTER_LIFE: &str = "FilterLife";
    pub const EXPIRED_FILTER_TIME: &str = "ExpiredFilterTime";
}

/// Filter usage counter value of a brand-new filter
pub const FILTER_LIFE_MAX: f64 = 60480.0;

/// Value the device uses for an asserted boolean signal
const SIGNAL_SET: &str = "1";

/// Decode a raw attribute fragment into a delta.
///
/// `water_level` is always present in the result: `Good` unless a `NoWater`
/// or `WaterAdvise` signal is set, in which case the last one in document
/// order wins.
pub fn decode(raw: &str) -> ParseResult<AttributeSnapshot> {
    let list = AttributeList::from_fragment(raw)?;
    Ok(decode_list(&list))
}

/// Decode an already parsed attribute list.
pub fn decode_list(list: &AttributeList) -> AttributeSnapshot {
    let mut delta = AttributeSnapshot {
        water_level: Some(WaterLevel::Good.into()),
        ..Default::default()
    };

    for attribute in list {
        match attribute.name.as_str() {
            names::FAN_MODE => {
                if let Some(value) = convert::<i32>(attribute) {
                    delta.fan_mode = Some(value);
                }
            }
            names::DESIRED_HUMIDITY => {
                if let Some(value) = convert::<i32>(attribute) {
                    delta.desired_humidity = Some(value);
                }
            }
            names::CURRENT_HUMIDITY => {
                if let Some(value) = convert::<f64>(attribute) {
                    delta.current_humidity = Some(value);
                }
            }
            names::NO_WATER if attribute.value == SIGNAL_SET => {
                delta.water_level = Some(WaterLevel::Empty.into());
            }
            names::WATER_ADVISE if attribute.value == SIGNAL_SET => {
                delta.water_level = Some(WaterLevel::Low.into());
            }
            names::FILTER_LIFE => {
                if let Some(usage) = convert::<f64>(attribute) {
                    delta.filter_life = Some(filter_life_percent(usage));
                }
            }
            names::EXPIRED_FILTER_TIME => {
                if let Some(value) = convert::<i64>(attribute) {
                    delta.filter_expired = Some(value != 0);
                }
            }
            _ => {}
        }
    }

    delta
}

/// Percent of filter life remaining for a raw usage counter, rounded to two
/// decimals with ties to even
pub fn filter_life_percent(usage: f64) -> f64 {
    let percent = usage / FILTER_LIFE_MAX * 100.0;
    (percent * 100.0).round_ties_even() / 100.0
}

fn convert<T: FromStr>(attribute: &Attribute) -> Option<T> {
    match attribute.value.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(
                name = %attribute.name,
                value = %attribute.value,
                "dropping attribute with unconvertible value"
            );
            None
        }
    }
}
