use shadow_rs::shadow;

shadow!(build);

/// Log version info using the appropriate logging mechanism for the platform.
/// On Android, we use the `log` crate (which android_logger handles).
/// On other platforms, we use `tracing` (which our tracing_subscriber handles).
#[allow(dead_code)] // Allow auto-generated code containing unused build metadata
pub fn log_version_info(app_name: &str) {
    #[cfg(target_os = "android")]
    {
        log::info!("{}", short_version_info(app_name));
        log::info!(
            "Build date: {} ({})",
            build::BUILD_TIME_2822,
            build::BUILD_RUST_CHANNEL
        );
    }
    #[cfg(not(target_os = "android"))]
    {
        tracing::info!("{}", short_version_info(app_name));
        tracing::info!(
            "Build date: {} ({})",
            build::BUILD_TIME_2822,
            build::BUILD_RUST_CHANNEL
        );
    }
}

/// One line describing the running build, e.g. `Travel Guide 0.4.0 (main@abc1234+dirty)`
#[allow(dead_code)] // Allow auto-generated code containing unused build metadata
pub fn short_version_info(app_name: &str) -> String {
    format_version(
        app_name,
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
        build::GIT_CLEAN,
    )
}

fn format_version(app_name: &str, version: &str, branch: &str, commit: &str, clean: bool) -> String {
    let dirty = if clean { "" } else { "+dirty" };
    if commit.is_empty() {
        format!("{} {}{}", app_name, version, dirty)
    } else {
        format!("{} {} ({}@{}{})", app_name, version, branch, commit, dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_version() {
        assert_eq!(
            format_version("Travel Guide", "1.2.3", "main", "abc1234", true),
            "Travel Guide 1.2.3 (main@abc1234)"
        );
        assert_eq!(
            format_version("Travel Guide", "1.2.3", "dev", "abc1234", false),
            "Travel Guide 1.2.3 (dev@abc1234+dirty)"
        );
    }

    #[test]
    fn test_format_version_without_git() {
        assert_eq!(
            format_version("Travel Guide", "1.2.3", "", "", true),
            "Travel Guide 1.2.3"
        );
    }

    #[test]
    fn test_short_version_info_names_app() {
        assert!(short_version_info("Travel Guide").starts_with("Travel Guide "));
    }
}
