use flexi_logger::Logger;

pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    Logger::try_with_env_or_str("info")? // Use the log level from the environment or fallback to "info"
        .format(flexi_logger::colored_default_format)
        .start()?;
    Ok(())
}
