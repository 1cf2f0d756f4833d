/// Version string shown by `--version`: crate version, git commit and build
/// date, the last two captured by the build script.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_version_starts_with_crate_version() {
        assert!(LONG_VERSION.starts_with(version()));
        assert!(LONG_VERSION.ends_with(')'));
    }
}
