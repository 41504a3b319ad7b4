use clap::Parser;
use std::path::PathBuf;

/// Proxy configuration. Every flag can also come from the environment,
/// which is how deployments are expected to set the upstream sheet URLs.
#[derive(Parser, Debug)]
#[command(name = "fund-proxy")]
#[command(about = "Static site host and sheet proxy for the fund ledger")]
pub struct Args {
    /// Published CSV export URL for the contributions sheet
    #[arg(long, env = "CONTRIBUTIONS_URL")]
    pub contributions_url: String,

    /// Published CSV export URL for the disbursements sheet
    #[arg(long, env = "DISBURSEMENTS_URL")]
    pub disbursements_url: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory with the compiled web UI (trunk's dist output)
    #[arg(long, default_value = "site")]
    pub site_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_with_defaults() {
        let args = Args::parse_from([
            "fund-proxy",
            "--contributions-url",
            "https://sheets.example/c.csv",
            "--disbursements-url",
            "https://sheets.example/d.csv",
        ]);
        assert_eq!(args.port, 3000);
        assert_eq!(args.site_dir, PathBuf::from("site"));
        assert_eq!(args.contributions_url, "https://sheets.example/c.csv");
    }

    #[test]
    fn port_flag_overrides_default() {
        let args = Args::parse_from([
            "fund-proxy",
            "--contributions-url",
            "u1",
            "--disbursements-url",
            "u2",
            "--port",
            "8080",
        ]);
        assert_eq!(args.port, 8080);
    }
}
