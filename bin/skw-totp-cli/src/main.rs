mod args;

use std::process::ExitCode;

use args::Command;
use skw_totp::{
    key_uri, qr_code_url, QrOptions,
    TotpAuth, TotpConfig, TotpError,
};

fn run(command: Command) -> Result<ExitCode, TotpError> {
    let config = TotpConfig::from_env()?;
    log::debug!("loaded config {:?}", config);
    let auth = TotpAuth::new(config)?;

    match command {
        Command::Secret { length } => {
            println!("{}", auth.create_secret(length)?);
        },
        Command::Code { secret, time } => {
            let t = time.map(|t| auth.time_slice_of(t));
            let code = match t {
                Some(t) => auth.get_code_at(&secret, t)?,
                None => auth.get_code(&secret)?,
            };
            println!("{}", code);
        },
        Command::Verify { secret, code, discrepancy, time } => {
            let discrepancy = discrepancy.unwrap_or(config.discrepancy());
            let t = time.map(|t| auth.time_slice_of(t));

            if auth.verify_code_with(&secret, &code, discrepancy, t) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::from(1));
            }
        },
        Command::Uri { account, secret, issuer } => {
            println!("{}", key_uri(&account, &secret, issuer.as_deref()));
            println!("{}", qr_code_url(&account, &secret, issuer.as_deref(), QrOptions::default()));
        },
        Command::Config => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| TotpError::InvalidConfig(e.to_string()))?;
            println!("{}", json);
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // --- Initialize environmental variables and settings ---
    dotenv::dotenv().ok();
    env_logger::init();

    let args = args::init();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
