use clap::{Parser, Subcommand};

/// Google Authenticator compatible one time passwords
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Base32 secret
    Secret {
        #[arg(short, long, default_value_t = 16)]
        length: usize,
    },

    /// Print the code for a secret
    Code {
        secret: String,

        /// unix time in seconds, defaults to now
        #[arg(short, long)]
        time: Option<u64>,
    },

    /// Check a code against a secret
    Verify {
        secret: String,
        code: String,

        /// accepted time steps before and after now, defaults to TOTP_DISCREPANCY
        #[arg(short, long)]
        discrepancy: Option<u64>,

        /// unix time in seconds, defaults to now
        #[arg(short, long)]
        time: Option<u64>,
    },

    /// Print the otpauth uri and the QR renderer url for a secret
    Uri {
        account: String,
        secret: String,

        #[arg(short, long)]
        issuer: Option<String>,
    },

    /// Print the active configuration as json
    Config,
}

pub fn init() -> Args {
    Args::parse()
}
