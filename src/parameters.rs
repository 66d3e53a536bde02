use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ParameterError;
use crate::name::validate_application_name;
use crate::project::validate_project;

pub const PROJECT_FLAG: &str = "-p";
pub const APPLICATION_NAME_FLAG: &str = "-a";
pub const USER_FLAG: &str = "-u";
pub const PASSWORD_FLAG: &str = "-pw";

const REDACTED: &str = "***";

/// Parameter values as collected from the command line or a defaults file,
/// before any validation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    pub project: Option<PathBuf>,
    pub application_name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl RawParameters {
    /// Fill every field missing from `self` with the value from `fallback`.
    pub fn or(self, fallback: RawParameters) -> Self {
        Self {
            project: self.project.or(fallback.project),
            application_name: self.application_name.or(fallback.application_name),
            user: self.user.or(fallback.user),
            password: self.password.or(fallback.password),
        }
    }
}

impl fmt::Debug for RawParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawParameters")
            .field("project", &self.project)
            .field("application_name", &self.application_name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Validated parameters for enabling CI on a project.
///
/// Only obtainable through [`Parameters::new`] or `TryFrom<RawParameters>`,
/// both of which run every check, so holding one means the project is a
/// maven project under git and the application name is acceptable.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameters {
    project: PathBuf,
    application_name: String,
    user: String,
    password: String,
}

impl Parameters {
    pub fn new(
        project: impl Into<PathBuf>,
        application_name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ParameterError> {
        Self::try_from(RawParameters {
            project: Some(project.into()),
            application_name: Some(application_name.into()),
            user: Some(user.into()),
            password: Some(password.into()),
        })
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        debug!("Validating {:?}", raw);

        let project = raw.project.filter(|p| !p.as_os_str().is_empty());
        let project = required(project, PROJECT_FLAG)?;
        // an empty name is present; the length check rejects it
        let application_name = required(raw.application_name, APPLICATION_NAME_FLAG)?;
        let user = required(non_empty(raw.user), USER_FLAG)?;
        let password = required(non_empty(raw.password), PASSWORD_FLAG)?;

        validate_project(&project)?;
        validate_application_name(&application_name)?;

        Ok(Self {
            project,
            application_name,
            user,
            password,
        })
    }
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("project", &self.project)
            .field("application_name", &self.application_name)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .finish()
    }
}

fn required<T>(value: Option<T>, flag: &'static str) -> Result<T, ParameterError> {
    value.ok_or(ParameterError::MissingRequired { flag })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(user: Option<&str>, password: Option<&str>) -> RawParameters {
        RawParameters {
            project: Some(PathBuf::from("/does/not/matter")),
            application_name: Some("demo".to_string()),
            user: user.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    fn missing_flag(raw: RawParameters) -> Option<&'static str> {
        match Parameters::try_from(raw) {
            Err(ParameterError::MissingRequired { flag }) => Some(flag),
            _ => None,
        }
    }

    #[test]
    fn test_presence_is_checked_before_content() {
        // the project path is bogus, yet the missing password wins
        assert_eq!(missing_flag(raw(Some("bob"), None)), Some(PASSWORD_FLAG));
        assert_eq!(missing_flag(raw(None, Some("secret"))), Some(USER_FLAG));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        assert_eq!(missing_flag(raw(Some(""), Some("secret"))), Some(USER_FLAG));
        assert_eq!(missing_flag(raw(Some("bob"), Some(""))), Some(PASSWORD_FLAG));

        let mut no_project = raw(Some("bob"), Some("secret"));
        no_project.project = Some(PathBuf::new());
        assert_eq!(missing_flag(no_project), Some(PROJECT_FLAG));
    }

    #[test]
    fn test_or_prefers_receiver() {
        let cli = RawParameters {
            user: Some("cli".to_string()),
            ..Default::default()
        };
        let file = RawParameters {
            user: Some("file".to_string()),
            password: Some("from-file".to_string()),
            ..Default::default()
        };

        let merged = cli.or(file);
        assert_eq!(merged.user.as_deref(), Some("cli"));
        assert_eq!(merged.password.as_deref(), Some("from-file"));
        assert!(merged.project.is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", raw(Some("bob"), Some("hunter2")));
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }
}
