//! Standard paths used by Bootkit tools

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "BOOTKIT_CONFIG";

/// Standard Bootkit paths
pub struct Paths {
    /// Config directory (~/.config/bootkit)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("bootkit");

        Self { config }
    }

    /// Get the config file path, honouring `$BOOTKIT_CONFIG`
    pub fn config_file(&self) -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_namespaced() {
        let paths = Paths::new();
        assert!(paths.config.ends_with("bootkit"));
    }
}
