use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("The following option is required: {flag}")]
    MissingRequired { flag: &'static str },

    #[error("{}", project_message(.path, .problem))]
    InvalidProject {
        path: PathBuf,
        problem: ProjectProblem,
    },

    #[error("{}", name_message(.name, .problem))]
    InvalidName { name: String, problem: NameProblem },
}

/// Why a project directory was rejected.
#[derive(Debug)]
pub enum ProjectProblem {
    NotFound,
    NotMaven,
    NotGit,
    /// The filesystem refused a lookup for a reason other than "not found".
    Inaccessible(io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProblem {
    TooLong,
    BadCharacters,
}

impl fmt::Display for ProjectProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectProblem::NotFound => write!(f, "directory not found"),
            ProjectProblem::NotMaven => write!(f, "not a maven project"),
            ProjectProblem::NotGit => write!(f, "not committed to git"),
            ProjectProblem::Inaccessible(err) => write!(f, "not accessible: {}", err),
        }
    }
}

impl fmt::Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameProblem::TooLong => write!(f, "too long"),
            NameProblem::BadCharacters => write!(f, "invalid characters"),
        }
    }
}

impl ParameterError {
    pub fn project_problem(&self) -> Option<&ProjectProblem> {
        match self {
            ParameterError::InvalidProject { problem, .. } => Some(problem),
            _ => None,
        }
    }

    pub fn name_problem(&self) -> Option<NameProblem> {
        match self {
            ParameterError::InvalidName { problem, .. } => Some(*problem),
            _ => None,
        }
    }
}

fn project_message(path: &Path, problem: &ProjectProblem) -> String {
    let path = path.display();
    match problem {
        ProjectProblem::NotFound => format!("Could not find directory {}", path),
        ProjectProblem::NotMaven => format!("Project {} is not a maven project", path),
        ProjectProblem::NotGit => {
            format!("Project {} is not committed to a git repository", path)
        }
        ProjectProblem::Inaccessible(err) => {
            format!("Could not access project {}: {}", path, err)
        }
    }
}

fn name_message(name: &str, problem: &NameProblem) -> String {
    match problem {
        NameProblem::TooLong => format!(
            "The application name {} is too long. It must be between 1 and 16 characters long.",
            name
        ),
        NameProblem::BadCharacters => format!(
            "The application name {} is not valid. The name may only consist of lowercase alphanumeric characters",
            name
        ),
    }
}
