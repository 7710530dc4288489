use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config_with() first.")
        .clone()
}

/// Install an already-built configuration (CLI overrides applied, tests).
///
/// The first installed config wins for the lifetime of the process; later
/// calls are no-ops and return `false`.
pub fn init_config_with(config: StaticConfig) -> bool {
    CONFIG.set(Arc::new(config)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_config_wins() {
        let mut first = StaticConfig::default();
        first.server.port = 18080;
        let mut second = StaticConfig::default();
        second.server.port = 19090;

        // 同一测试进程内其他测试可能已安装配置
        let installed = init_config_with(first);
        assert!(!init_config_with(second));

        if installed {
            assert_eq!(get_config().server.port, 18080);
        }
        assert_ne!(get_config().server.port, 19090);
    }
}
