use std::fmt::Display;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.host {
            IpAddr::V4(host) => write!(f, "{}:{}", host, self.port),
            IpAddr::V6(host) => write!(f, "[{}]:{}", host, self.port),
        }
    }
}
