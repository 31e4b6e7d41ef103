//! Flat cache of last-known humidifier attributes

use serde::Serialize;

/// Last-known attribute values.
///
/// The same type is used for a freshly decoded delta and for the cache it is
/// merged into. `None` means "not reported" in a delta and "never reported"
/// in the cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributeSnapshot {
    /// Raw fan mode, see [`crate::FanMode`]
    pub fan_mode: Option<i32>,
    /// Raw desired humidity setting, see [`crate::DesiredHumidity`]
    pub desired_humidity: Option<i32>,
    /// Measured relative humidity in percent
    pub current_humidity: Option<f64>,
    /// Raw water level, see [`crate::WaterLevel`]. Every decode sets it.
    pub water_level: Option<i32>,
    /// Remaining filter life in percent, rounded to two decimals
    pub filter_life: Option<f64>,
    pub filter_expired: Option<bool>,
}

impl AttributeSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every field that `delta` carries, keep the rest.
    pub fn merge(&mut self, delta: &AttributeSnapshot) {
        fn take<T: Copy>(slot: &mut Option<T>, update: Option<T>) {
            if update.is_some() {
                *slot = update;
            }
        }

        take(&mut self.fan_mode, delta.fan_mode);
        take(&mut self.desired_humidity, delta.desired_humidity);
        take(&mut self.current_humidity, delta.current_humidity);
        take(&mut self.water_level, delta.water_level);
        take(&mut self.filter_life, delta.filter_life);
        take(&mut self.filter_expired, delta.filter_expired);
    }

    /// True when no attribute has been reported yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut cache = AttributeSnapshot {
            fan_mode: Some(3),
            desired_humidity: Some(1),
            water_level: Some(2),
            ..Default::default()
        };
        let delta = AttributeSnapshot {
            current_humidity: Some(42.5),
            water_level: Some(0),
            ..Default::default()
        };

        cache.merge(&delta);

        assert_eq!(cache.fan_mode, Some(3));
        assert_eq!(cache.desired_humidity, Some(1));
        assert_eq!(cache.current_humidity, Some(42.5));
        assert_eq!(cache.water_level, Some(0));
        assert_eq!(cache.filter_life, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(AttributeSnapshot::new().is_empty());
        let snapshot = AttributeSnapshot {
            filter_expired: Some(false),
            ..Default::default()
        };
        assert!(!snapshot.is_empty());
    }
}
