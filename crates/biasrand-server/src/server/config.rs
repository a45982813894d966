use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the `biasrand-server` binary.
///
/// Values are parsed from CLI arguments or environment variables (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "biasrand-server",
    version,
    about = "An HTTP service returning random integers biased toward an average"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:3000" or "127.0.0.1:8080"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:3000"))]
    pub server_addr: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args.server_addr.parse().with_context(|| {
            format!(
                "SERVER_ADDR ({}) is not a valid socket address",
                args.server_addr
            )
        })?;

        Ok(Self { server_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_3000() {
        let args = CliArgs::try_parse_from(["biasrand-server"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.server_addr.port(), 3000);
        assert!(config.server_addr.ip().is_unspecified());
    }

    #[test]
    fn accepts_explicit_address() {
        let args =
            CliArgs::try_parse_from(["biasrand-server", "--server-addr", "127.0.0.1:8080"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn rejects_unparseable_address() {
        let args = CliArgs::try_parse_from(["biasrand-server", "--server-addr", "localhost"]).unwrap();
        let err = ServerConfig::try_from(args).unwrap_err();
        assert!(err.to_string().contains("SERVER_ADDR"));
    }
}
