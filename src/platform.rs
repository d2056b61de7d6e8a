// Platform module: the store flavour a build targets and what it can open

use std::fmt;
use std::str::FromStr;

/// Store flavour. Chosen once per build, overridable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Apple App Store; listings are looked up to a numeric track id.
    Ios,
    /// Google Play; the application id is the store handle.
    Android,
}

/// The operations exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    StoreListing,
    DevPage,
    Collection,
    EditorChoicePage,
    Search,
    PluginVersion,
}

impl Operation {
    /// Name the operation is exposed under to calling applications.
    pub fn name(self) -> &'static str {
        match self {
            Operation::StoreListing => "openStoreListing",
            Operation::DevPage => "openDevPage",
            Operation::Collection => "openCollection",
            Operation::EditorChoicePage => "openEditorChoicePage",
            Operation::Search => "search",
            Operation::PluginVersion => "getPluginVersion",
        }
    }
}

impl Platform {
    /// Platform tag of the current build. Apple targets map to `Ios`;
    /// everything else behaves like Play.
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn supports(self, operation: Operation) -> bool {
        match (self, operation) {
            (_, Operation::StoreListing | Operation::PluginVersion) => true,
            (Platform::Android, _) => true,
            (Platform::Ios, _) => false,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => f.write_str("iOS"),
            Platform::Android => f.write_str("Android"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("unknown platform '{}'", other)),
        }
    }
}
