//! Print the status of a humidifier and optionally change its fan mode.
//!
//! ```sh
//! WEMO_HOST=192.168.1.60 WEMO_LOG_MODE=development cargo run --example humidifier_status -- 3
//! ```

use wemo_humidifier::logging::init_logging_from_env;
use wemo_humidifier::{FanMode, Humidifier, HumidifierConfig, HumidifierError};

fn main() -> Result<(), HumidifierError> {
    init_logging_from_env()?;

    let config = HumidifierConfig::from_env()?;
    let mut humidifier = Humidifier::connect(&config)?;

    if let Some(arg) = std::env::args().nth(1) {
        let mode = arg
            .parse::<i32>()
            .ok()
            .and_then(|value| FanMode::try_from(value).ok())
            .ok_or_else(|| HumidifierError::Config(format!("not a fan mode (0-5): {arg}")))?;
        humidifier.set_fan_mode(mode)?;
    }

    println!("{}", humidifier);
    println!("  state:            {}", if humidifier.get_state(false)? == 1 { "on" } else { "off" });
    println!("  fan mode:         {}", humidifier.fan_mode_label());
    println!("  desired humidity: {}%", humidifier.desired_humidity_percent());
    match humidifier.current_humidity_percent() {
        Some(humidity) => println!("  humidity:         {humidity:.1}%"),
        None => println!("  humidity:         unknown"),
    }
    println!("  water level:      {}", humidifier.water_level_label());
    if let Some(filter_life) = humidifier.filter_life_percent() {
        println!("  filter life:      {filter_life:.2}%");
    }
    if humidifier.filter_expired() == Some(true) {
        println!("  filter needs replacing");
    }

    Ok(())
}
