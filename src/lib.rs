use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod name;
pub mod parameters;
pub mod project;

use parameters::RawParameters;

#[derive(Parser, Debug)]
#[command(version, about = "Validate the parameters for enabling CI on an OpenShift project")]
pub struct Args {
    /// The project (folder) that we'll enable CI for
    #[arg(short = 'p', long)]
    pub project: Option<PathBuf>,
    /// The OpenShift application name (at most 16 lowercase alphanumeric characters)
    #[arg(short = 'a', long)]
    pub application_name: Option<String>,
    /// The OpenShift user
    #[arg(short = 'u', long)]
    pub user: Option<String>,
    /// The OpenShift password (also accepted as -pw)
    #[arg(long, visible_alias = "pw")]
    pub password: Option<String>,
    /// Optional: YAML file with defaults for any of the options above
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Optional: verbose output (logs every check)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Parse from raw tokens, accepting the single-dash `-pw` password flag.
    pub fn parse_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(tokens))
    }

    pub fn raw_parameters(&self) -> RawParameters {
        RawParameters {
            project: self.project.clone(),
            application_name: self.application_name.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

/// Rewrite `-pw` and `-pw=<value>` to `--pw`, since clap short flags are a
/// single character. Everything after a `--` terminator is left alone.
pub fn normalize_args<I, T>(tokens: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;

    tokens
        .into_iter()
        .map(Into::into)
        .map(|token: OsString| {
            if terminated {
                return token;
            }
            let rewritten = match token.to_str() {
                Some("--") => {
                    terminated = true;
                    None
                }
                Some("-pw") => Some(OsString::from("--pw")),
                Some(s) => s
                    .strip_prefix("-pw=")
                    .map(|value| OsString::from(format!("--pw={}", value))),
                None => None,
            };
            rewritten.unwrap_or(token)
        })
        .collect()
}

/// Parse command line arguments, exiting with clap's usage message on error
pub fn parse_args() -> Args {
    match Args::parse_tokens(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    }
}
