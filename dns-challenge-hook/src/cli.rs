//! Command-line interface

use clap::{ArgGroup, Parser};

/// Certbot manual hook for DNS-01 challenges on Aliyun DNS and Tencent Cloud `DNSPod`.
///
/// Reads `CERTBOT_DOMAIN` and `CERTBOT_VALIDATION` from the environment.
#[derive(Parser, Debug)]
#[command(name = "dns-challenge-hook")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").required(true).args(["auth", "cleanup"])))]
pub struct Cli {
    /// Publish the challenge TXT record (--manual-auth-hook)
    #[arg(long)]
    pub auth: bool,

    /// Remove the challenge TXT record (--manual-cleanup-hook)
    #[arg(long)]
    pub cleanup: bool,
}

/// Hook action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Auth,
    Cleanup,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.auth {
            Action::Auth
        } else {
            Action::Cleanup
        }
    }
}
