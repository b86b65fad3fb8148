use clap::Parser;
use std::path::PathBuf;

/// Submit login credentials to a login endpoint from the terminal
#[derive(Debug, Parser)]
#[command(name = "login-form", version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Origin the login endpoint is resolved against (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Email to submit once, then exit
    #[arg(long, requires = "password")]
    pub email: Option<String>,

    /// Password to submit once, then exit
    #[arg(long, requires = "email")]
    pub password: Option<String>,
}

impl Args {
    /// Credentials for a single non-interactive submission, if given
    pub fn one_shot(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}
