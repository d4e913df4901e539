//! Temp-directory resolution.
//!
//! The scratch location is ambient host state, so it sits behind the [`TempDirProvider`]
//! capability: the configuration layer and tests can substitute a fixed directory for the
//! process environment.

use std::path::PathBuf;

/// Capability to resolve the host's designated scratch directory.
pub trait TempDirProvider: Send + Sync {
    /// Returns the scratch directory, or `None` if the host has none configured.
    fn resolve_temp_dir(&self) -> Option<PathBuf>;
}

/// Resolves the scratch directory from the `TEMP` environment variable.
///
/// An unset or empty variable resolves to `None`. No fallback to other conventional
/// locations is attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTempDir;

/// Environment variable holding the scratch directory path.
const TEMP_VAR: &str = "TEMP";

impl TempDirProvider for EnvTempDir {
    fn resolve_temp_dir(&self) -> Option<PathBuf> {
        std::env::var_os(TEMP_VAR).filter(|v| !v.is_empty()).map(PathBuf::from)
    }
}

/// Always resolves to one fixed directory.
///
/// Backs the `temp_dir` configuration override and test setups.
#[derive(Debug, Clone)]
pub struct FixedTempDir(PathBuf);

impl FixedTempDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl TempDirProvider for FixedTempDir {
    fn resolve_temp_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // set_var/remove_var mutate process-global state, so every test touching TEMP is
    // serialized and restores the previous value before returning.
    fn with_temp_var<R>(value: Option<&str>, body: impl FnOnce() -> R) -> R {
        let previous = std::env::var_os(TEMP_VAR);
        unsafe {
            match value {
                Some(v) => std::env::set_var(TEMP_VAR, v),
                None => std::env::remove_var(TEMP_VAR),
            }
        }
        let result = body();
        unsafe {
            match previous {
                Some(v) => std::env::set_var(TEMP_VAR, v),
                None => std::env::remove_var(TEMP_VAR),
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_env_provider_reads_temp_variable() {
        with_temp_var(Some("/scratch/area"), || {
            assert_eq!(EnvTempDir.resolve_temp_dir(), Some(PathBuf::from("/scratch/area")));
        });
    }

    #[test]
    #[serial]
    fn test_env_provider_unset_variable_resolves_to_none() {
        with_temp_var(None, || {
            assert_eq!(EnvTempDir.resolve_temp_dir(), None);
        });
    }

    #[test]
    #[serial]
    fn test_env_provider_empty_variable_resolves_to_none() {
        with_temp_var(Some(""), || {
            assert_eq!(EnvTempDir.resolve_temp_dir(), None);
        });
    }

    #[test]
    fn test_fixed_provider_ignores_environment() {
        let provider = FixedTempDir::new("/configured/dir");
        assert_eq!(provider.resolve_temp_dir(), Some(PathBuf::from("/configured/dir")));
    }
}
