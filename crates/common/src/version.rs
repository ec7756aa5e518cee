use std::fmt::{self, Display};

use serde::Serialize;

/// Build metadata captured by a binary crate's `build.rs`.
///
/// The fields are filled in by [`build_info!`](crate::build_info), which reads the
/// `BUILD_PROFILE`, `BUILD_FEATURES`, `REPO_VERSION` and `BUILD_TIMESTAMP`
/// environment variables of the crate that invokes it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub build_profile: &'static str,
    pub build_features: &'static str,
    pub build_timestamp: &'static str,
    pub version: &'static str,
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} build, features: {}, built {})",
            self.version, self.build_profile, self.build_features, self.build_timestamp
        )
    }
}

#[macro_export]
macro_rules! build_info {
    () => {
        $crate::version::BuildInfo {
            build_profile: env!("BUILD_PROFILE"),
            build_features: env!("BUILD_FEATURES"),
            build_timestamp: env!("BUILD_TIMESTAMP"),
            version: env!("REPO_VERSION"),
        }
    };
}
