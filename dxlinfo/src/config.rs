use dynamixel_table::ProtocolRevision;
use eyre::{Report, WrapErr};
use serde_derive::Deserialize;
use std::fs::read_to_string;

pub const CONFIG_FILENAME: &str = "dxlinfo.toml";

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub protocol: String,
    pub supply_voltage: f64,
    #[serde(rename = "servo")]
    pub servos: Vec<ServoConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: String::from("2.0"),
            supply_voltage: 12.0,
            servos: Vec::new(),
        }
    }
}

impl Config {
    pub fn read(filename: &str) -> Result<Config, Report> {
        let config_file =
            read_to_string(filename).wrap_err_with(|| format!("Reading {}", filename))?;
        toml::from_str(&config_file).wrap_err_with(|| format!("Parsing {}", filename))
    }

    pub fn protocol_revision(&self) -> Result<ProtocolRevision, Report> {
        self.protocol
            .parse::<ProtocolRevision>()
            .wrap_err_with(|| format!("Invalid protocol {:?}", self.protocol))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServoConfig {
    pub id: u8,
    pub model: u16,
    /// Names of the registers to poll, e.g. "PRESENT_POSITION_L".
    #[serde(default)]
    pub poll: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parsing the example config file should not give any errors.
    #[test]
    fn example_config() {
        let config = Config::read("dxlinfo.example.toml").unwrap();
        assert_eq!(config.protocol_revision().unwrap(), ProtocolRevision::V2);
        assert_eq!(config.servos.len(), 2);
        assert_eq!(config.servos[1].model, 310);
    }

    /// Parsing an empty config file should not give any errors.
    #[test]
    fn empty_config() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config.supply_voltage, 12.0);
        assert_eq!(config.protocol_revision().unwrap(), ProtocolRevision::V2);
        assert!(config.servos.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("baud_rate = 57600").is_err());
        assert!(toml::from_str::<Config>("[[servo]]\nid = 1\nmodel = 12\nspeed = 3").is_err());
    }

    #[test]
    fn invalid_protocol() {
        let config = toml::from_str::<Config>("protocol = \"3.0\"").unwrap();
        assert!(config.protocol_revision().is_err());
    }
}
