use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{NameProblem, ParameterError};

/// Longest application name OpenShift accepts.
pub const MAX_NAME_LENGTH: usize = 16;

static NAME_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]*$").expect("application name pattern is valid"));

/// Length is checked before the character set, so an overlong name with
/// uppercase letters reports `TooLong`.
pub fn validate_application_name(name: &str) -> Result<(), ParameterError> {
    let fail = |problem| ParameterError::InvalidName {
        name: name.to_string(),
        problem,
    };

    let length = name.chars().count();
    debug!("Checking application name {:?} ({} characters)", name, length);

    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(fail(NameProblem::TooLong));
    }

    if !NAME_CHARACTERS.is_match(name) {
        return Err(fail(NameProblem::BadCharacters));
    }

    Ok(())
}
