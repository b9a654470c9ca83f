//! Environment loading helpers

use std::path::PathBuf;

/// Load variables from a `.env` file in the current directory or its parents
///
/// Variables already present in the process environment win. A missing file
/// is not an error; the path of the loaded file is returned when one was found.
/// Nothing is logged here; callers report the outcome once tracing is up.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenvy::Error> {
    found_env_file(dotenvy::dotenv())
}

fn found_env_file(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Look up a variable in the process environment, treating blank values as unset
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let missing = dotenvy::Error::Io(io::Error::new(io::ErrorKind::NotFound, "no .env"));
        assert!(matches!(found_env_file(Err(missing)), Ok(None)));

        let path = PathBuf::from("/tmp/.env");
        assert_eq!(found_env_file(Ok(path.clone())).unwrap(), Some(path));
    }

    #[test]
    fn test_unreadable_env_file_is_reported() {
        let denied = dotenvy::Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(found_env_file(Err(denied)).is_err());

        let malformed = dotenvy::Error::LineParse("KEY VALUE".to_string(), 3);
        assert!(found_env_file(Err(malformed)).is_err());
    }

    #[test]
    fn test_env_lookup_missing() {
        assert_eq!(env_lookup("ADVISOR_UTILS_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_env_lookup_present() {
        // PATH is set in any test environment
        assert!(env_lookup("PATH").is_some());
    }
}
