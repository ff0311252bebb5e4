//! Web server command.

use std::net::{IpAddr, SocketAddr};

use console::style;

use crate::config::Settings;

/// Default port when the bind address names only a host.
const DEFAULT_PORT: u16 = 4000;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(&settings.bind)?;

    match settings.data_file {
        Some(ref path) => println!(
            "{} Storing travels in {}",
            style("→").cyan(),
            path.display()
        ),
        None => println!(
            "{} Storing travels in memory (use --data-file to persist)",
            style("→").cyan()
        ),
    }

    println!(
        "{} Starting Travel Journal at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "4000" -> 127.0.0.1:4000
/// - Just a host: "0.0.0.0", "localhost" or "::1" -> HOST:4000
/// - Host and port: "0.0.0.0:4000" or "[::1]:4000"
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("bind address must not be empty");
    }

    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    if let Ok(addr) = bind.parse::<SocketAddr>() {
        return Ok((addr.ip().to_string(), addr.port()));
    }

    // Bare IP literals first, so "::1" isn't split at its last colon.
    if let Ok(ip) = bind.parse::<IpAddr>() {
        return Ok((ip.to_string(), DEFAULT_PORT));
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    Ok((bind.to_string(), DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address() {
        assert_eq!(
            parse_bind_address("400").unwrap(),
            ("127.0.0.1".to_string(), 400)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0").unwrap(),
            ("0.0.0.0".to_string(), 4000)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0:8080").unwrap(),
            ("0.0.0.0".to_string(), 8080)
        );
        assert!(parse_bind_address("  ").is_err());
    }

    #[test]
    fn test_parse_bind_address_hostname() {
        assert_eq!(
            parse_bind_address("localhost").unwrap(),
            ("localhost".to_string(), 4000)
        );
        assert_eq!(
            parse_bind_address("localhost:9000").unwrap(),
            ("localhost".to_string(), 9000)
        );
    }

    #[test]
    fn test_parse_bind_address_ipv6() {
        assert_eq!(parse_bind_address("::1").unwrap(), ("::1".to_string(), 4000));
        assert_eq!(
            parse_bind_address("[::1]:8080").unwrap(),
            ("::1".to_string(), 8080)
        );
    }
}
