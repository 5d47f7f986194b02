use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Directory served as the web root
    #[arg(short, long, default_value = "src")]
    pub document_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            document_root: PathBuf::from("src"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_matches_defaults() {
        let parsed = ServerConfig::try_parse_from(["dev-server"]).unwrap();
        let defaults = ServerConfig::default();
        assert_eq!(parsed.host, defaults.host);
        assert_eq!(parsed.port, defaults.port);
        assert_eq!(parsed.document_root, defaults.document_root);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed =
            ServerConfig::try_parse_from(["dev-server", "-p", "9000", "-d", "public"]).unwrap();
        assert_eq!(parsed.port, 9000);
        assert_eq!(parsed.document_root, PathBuf::from("public"));
    }
}
