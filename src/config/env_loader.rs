use crate::config::model::{Config, ServerConfig};
use std::env;
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;

/// Reads the configuration from the environment.
///
/// Panics on malformed values since it only runs once, at startup.
pub fn load_config() -> Config {
    Config {
        server: ServerConfig {
            host: load_host_config("HOST", DEFAULT_HOST),
            port: load_port_config("PORT", DEFAULT_PORT),
        },
    }
}

fn load_host_config(name: &str, default: IpAddr) -> IpAddr {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an IP address.", name)),
        Err(_) => default,
    }
}

fn load_port_config(name: &str, default: u16) -> u16 {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a port number between 0 and 65535.",
                name
            )
        }),
        Err(_) => default,
    }
}
