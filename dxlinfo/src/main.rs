mod config;

use config::{Config, ServoConfig, CONFIG_FILENAME};
use dynamixel_table::{
    model_parameters, validate_models, ControlTable, ModelParameters, RegisterAddress,
    RegistryError, ServoId,
};
use eyre::{eyre, Report, WrapErr};
use log::{debug, info, warn};
use std::env;

fn main() -> Result<(), Report> {
    stable_eyre::install()?;
    pretty_env_logger::init();
    color_backtrace::install();

    let filename = env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_FILENAME.to_owned());
    let config = Config::read(&filename)?;

    validate_models().wrap_err("Built-in model table is inconsistent")?;

    let table = ControlTable::new(config.protocol_revision()?);
    info!(
        "Using the {} control table for {} servos",
        table.revision(),
        config.servos.len()
    );

    let mut described = 0;
    for servo in &config.servos {
        if describe_servo(&table, config.supply_voltage, servo)? {
            described += 1;
        }
    }
    info!("Described {} of {} servos", described, config.servos.len());

    Ok(())
}

fn describe_servo(
    table: &ControlTable,
    supply_voltage: f64,
    servo: &ServoConfig,
) -> Result<bool, Report> {
    let id = ServoId::new(servo.id)
        .ok_or_else(|| eyre!("Servo ID {} is reserved for broadcast", servo.id))?;

    let model = match servo_model(id, servo.model) {
        Some(model) => model,
        None => return Ok(false),
    };

    println!("servo {}: {} (model {})", id, model.name, model.model_number);
    println!(
        "  rated torque:   {:.3} N·m at {} V",
        model.rated_torque(supply_voltage),
        supply_voltage
    );
    println!(
        "  rated velocity: {:.3} rad/s at {} V",
        model.rated_velocity(supply_voltage),
        supply_voltage
    );
    println!(
        "  encoder:        {} ticks over {}°",
        model.encoder_resolution, model.range_degrees
    );

    for name in &servo.poll {
        match resolve_poll(table, model, name) {
            Ok((register, Some(address))) => println!("  {:<24} {:#04x}", register, address),
            Ok((register, None)) => {
                debug!(
                    "{} is not available on {} with {}",
                    register,
                    model.name,
                    table.revision()
                );
                println!("  {:<24} unsupported", register);
            }
            Err(e) => warn!("Servo {}: {} {:?}", id, e, name),
        }
    }

    Ok(true)
}

/// The parameters of a configured servo's model, or `None` if it should be skipped.
///
/// A servo the table doesn't know about shouldn't stop us describing the others.
fn servo_model(id: ServoId, model_number: u16) -> Option<&'static ModelParameters> {
    match model_parameters(model_number) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!("Skipping servo {}: {}", id, e);
            None
        }
    }
}

/// Resolves a register name from the config to the address to poll on this model, if any.
fn resolve_poll(
    table: &ControlTable,
    model: &ModelParameters,
    name: &str,
) -> Result<(RegisterAddress, Option<u8>), RegistryError> {
    let register = name.parse::<RegisterAddress>()?;
    Ok((register, table.feature_address(model, register)))
}
