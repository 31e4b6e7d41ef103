//! Property tests for attribute decoding through the facade

mod mock_device;

use mock_device::{fragment, MockDevice};
use proptest::prelude::*;
use wemo_humidifier::{FanMode, Humidifier, UNKNOWN_LABEL};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any reported fan mode is cached as-is; only 0..=5 have a label.
    #[test]
    fn prop_fan_mode_label(value in any::<i32>()) {
        let mut humidifier = Humidifier::new("Test", MockDevice::default());
        let text = value.to_string();
        humidifier.on_push("attributeList", &fragment(&[("FanMode", text.as_str())])).unwrap();

        prop_assert_eq!(humidifier.fan_mode(), Some(value));
        match FanMode::try_from(value) {
            Ok(mode) => prop_assert_eq!(humidifier.fan_mode_label(), mode.label()),
            Err(_) => prop_assert_eq!(humidifier.fan_mode_label(), UNKNOWN_LABEL),
        }
    }

    /// Cached state is 1 exactly when the fan mode is not Off, without a fetch.
    #[test]
    fn prop_state_mirrors_fan_mode(value in -2i32..8) {
        let mut humidifier = Humidifier::new("Test", MockDevice::default());
        let text = value.to_string();
        humidifier.on_push("attributeList", &fragment(&[("FanMode", text.as_str())])).unwrap();

        prop_assert_eq!(humidifier.get_state(false).unwrap(), u8::from(value != 0));
        prop_assert_eq!(humidifier.device_events().get_calls(), 0);
    }

    /// Current humidity alone never disturbs other cached attributes.
    #[test]
    fn prop_merge_preserves_fan_mode(mode in 0i32..=5, humidity in 0.0f64..100.0) {
        let mut humidifier = Humidifier::new("Test", MockDevice::default());
        let mode_text = mode.to_string();
        let humidity_text = humidity.to_string();

        humidifier.on_push("attributeList", &fragment(&[("FanMode", mode_text.as_str())])).unwrap();
        humidifier
            .on_push("attributeList", &fragment(&[("CurrentHumidity", humidity_text.as_str())]))
            .unwrap();

        prop_assert_eq!(humidifier.fan_mode(), Some(mode));
        prop_assert_eq!(humidifier.current_humidity_percent(), Some(humidity));
    }
}
