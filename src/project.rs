use std::fs::{self, Metadata};
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{ParameterError, ProjectProblem};

const POM_FILE: &str = "pom.xml";
const GIT_DIR: &str = ".git";

/// Check that `project` is an existing directory holding a `pom.xml` file and
/// a `.git` directory. Checks run in that order and stop at the first failure.
pub fn validate_project(project: &Path) -> Result<(), ParameterError> {
    let pom = project.join(POM_FILE);
    let git = project.join(GIT_DIR);

    debug!("Checking project directory {}", project.display());
    require(project, Metadata::is_dir, ProjectProblem::NotFound)
        .and_then(|()| {
            debug!("Checking for maven descriptor {}", pom.display());
            require(&pom, Metadata::is_file, ProjectProblem::NotMaven)
        })
        .and_then(|()| {
            debug!("Checking for git metadata {}", git.display());
            require(&git, Metadata::is_dir, ProjectProblem::NotGit)
        })
        .map_err(|problem| ParameterError::InvalidProject {
            path: project.to_path_buf(),
            problem,
        })
}

/// Fails with `missing` when `path` does not exist or `kind` rejects it.
fn require(
    path: &Path,
    kind: fn(&Metadata) -> bool,
    missing: ProjectProblem,
) -> Result<(), ProjectProblem> {
    match fs::metadata(path) {
        Ok(metadata) if kind(&metadata) => Ok(()),
        Ok(_) => Err(missing),
        Err(err) => Err(classify(err, missing)),
    }
}

fn classify(err: io::Error, missing: ProjectProblem) -> ProjectProblem {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => missing,
        _ => ProjectProblem::Inaccessible(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_regular_file_is_not_a_project_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("pom.xml");
        fs::write(&file, "<project/>").unwrap();

        let err = validate_project(&file).unwrap_err();
        assert!(matches!(err.project_problem(), Some(ProjectProblem::NotFound)));
    }

    #[test]
    fn test_pom_directory_is_not_a_maven_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(POM_FILE)).unwrap();
        fs::create_dir(dir.path().join(GIT_DIR)).unwrap();

        let err = validate_project(dir.path()).unwrap_err();
        assert!(matches!(err.project_problem(), Some(ProjectProblem::NotMaven)));
    }

    #[test]
    fn test_git_file_is_not_git_metadata() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(POM_FILE), "<project/>").unwrap();
        fs::write(dir.path().join(GIT_DIR), "gitdir: ../elsewhere").unwrap();

        let err = validate_project(dir.path()).unwrap_err();
        assert!(matches!(err.project_problem(), Some(ProjectProblem::NotGit)));
    }

    #[test]
    fn test_classify_keeps_unexpected_errors() {
        let denied = io::Error::from(ErrorKind::PermissionDenied);
        assert!(matches!(
            classify(denied, ProjectProblem::NotFound),
            ProjectProblem::Inaccessible(_)
        ));

        let missing = io::Error::from(ErrorKind::NotFound);
        assert!(matches!(
            classify(missing, ProjectProblem::NotGit),
            ProjectProblem::NotGit
        ));
    }
}
