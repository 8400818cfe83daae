#[cfg(test)]
mod tests {
    use hoslog::api::{NominatimConfig, ServerConfig};
    use hoslog::libs::config::{join_address, split_address, ChartConfig, Config, EstimateConfig, LogInfo, CONFIG_FILE_NAME};
    use hoslog::libs::data_storage::DataStorage;
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests that redirect it take turns.
    static ENV_LOCK: Mutex<()> = const_mutex(());

    /// Points the platform data directory at a fresh temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chart, ChartConfig { width: 1000.0, height: 220.0, label_width: 120.0 });
        assert_eq!(config.estimate.average_speed_mph, 55.0);
        assert_eq!(config.geocoder, NominatimConfig::default());
        assert!(config.server.is_none());
        assert!(config.log_info.is_none());
    }

    #[test]
    fn test_default_log_info() {
        let info = Config::default().log_info();
        assert_eq!(info.truck_trailer, "TRK-2024-001 / TRL-2024-001");
        assert_eq!(info.carrier_name, "Acme Transport Solutions");
        assert_eq!(info.home_office, "123 Main Street, Suite 100\nSpringfield, IL 62701");
        assert_eq!(info.home_terminal, "456 Industrial Blvd\nSpringfield, IL 62702");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            chart: ChartConfig {
                width: 800.0,
                height: 200.0,
                label_width: 100.0,
            },
            estimate: EstimateConfig { average_speed_mph: 60.0 },
            geocoder: NominatimConfig {
                base_url: "http://localhost:8080".to_string(),
                ..NominatimConfig::default()
            },
            server: Some(ServerConfig {
                api_url: "https://planner.example.com".to_string(),
            }),
            log_info: Some(LogInfo {
                carrier_name: "Prairie Freight".to_string(),
                ..LogInfo::default()
            }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{"server": {"api_url": "http://localhost:8000"}}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.server.unwrap().api_url, "http://localhost:8000");
        assert_eq!(config.chart, ChartConfig::default());
        assert_eq!(config.geocoder.user_agent, "SpotterAI/1.0");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
    }

    #[test]
    fn test_chart_layout_from_config() {
        let layout = ChartConfig::default().layout();
        assert_eq!(layout.chart_width(), 880.0);
    }

    #[test]
    fn test_address_editing_round_trip() {
        let address = "123 Main Street, Suite 100\nSpringfield, IL 62701";
        let joined = join_address(address);
        assert_eq!(joined, "123 Main Street, Suite 100; Springfield, IL 62701");
        assert_eq!(split_address(&joined), address);
        assert_eq!(split_address("One line"), "One line");
    }
}
