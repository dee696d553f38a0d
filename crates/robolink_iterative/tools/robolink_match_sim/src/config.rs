use std::env;

use robolink_core::error::{CoreError, Result};

pub const DEFAULT_ROBOT_NAME: &str = "robolink_demo";
pub const DEFAULT_TICK_MS: u64 = 20;
pub const DEFAULT_AUTO_SECS: u64 = 15;
pub const DEFAULT_TELEOP_SECS: u64 = 135;

#[derive(Debug)]
pub struct Config {
    pub robot_name: String,
    pub tick_ms: u64,
    pub auto_secs: u64,
    pub teleop_secs: u64,
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Self::from_args_iter(env::args())
    }

    pub fn from_args_iter<I, S>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut robot_name =
            env::var("ROBOLINK_ROBOT_NAME").unwrap_or_else(|_| DEFAULT_ROBOT_NAME.to_string());
        let mut tick_ms = env_u64("ROBOLINK_TICK_MS", DEFAULT_TICK_MS)?;
        let mut auto_secs = env_u64("ROBOLINK_AUTO_SECS", DEFAULT_AUTO_SECS)?;
        let mut teleop_secs = env_u64("ROBOLINK_TELEOP_SECS", DEFAULT_TELEOP_SECS)?;

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--robot-name" => {
                    if let Some(value) = args.next() {
                        robot_name = value.as_ref().to_string();
                    }
                }
                "--tick-ms" => {
                    if let Some(value) = args.next() {
                        tick_ms = parse_u64("tick-ms", value.as_ref())?;
                    }
                }
                "--auto-secs" => {
                    if let Some(value) = args.next() {
                        auto_secs = parse_u64("auto-secs", value.as_ref())?;
                    }
                }
                "--teleop-secs" => {
                    if let Some(value) = args.next() {
                        teleop_secs = parse_u64("teleop-secs", value.as_ref())?;
                    }
                }
                _ if arg.starts_with("--robot-name=") => {
                    robot_name = arg["--robot-name=".len()..].to_string();
                }
                _ if arg.starts_with("--tick-ms=") => {
                    tick_ms = parse_u64("tick-ms", &arg["--tick-ms=".len()..])?;
                }
                _ if arg.starts_with("--auto-secs=") => {
                    auto_secs = parse_u64("auto-secs", &arg["--auto-secs=".len()..])?;
                }
                _ if arg.starts_with("--teleop-secs=") => {
                    teleop_secs = parse_u64("teleop-secs", &arg["--teleop-secs=".len()..])?;
                }
                _ => {}
            }
        }

        if tick_ms == 0 {
            return Err(CoreError::invalid_config_value("tick-ms", "0"));
        }

        Ok(Self {
            robot_name,
            tick_ms,
            auto_secs,
            teleop_secs,
        })
    }
}

fn print_usage() {
    println!(
        "robolink_match_sim [--robot-name <name>] [--tick-ms <ms>] [--auto-secs <s>] [--teleop-secs <s>]"
    );
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_config_value(key, value.to_string()))
}

fn env_u64(key: &'static str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(value) => parse_u64(key, &value),
        Err(_) => Ok(default),
    }
}
