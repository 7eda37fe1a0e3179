#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary text must either parse or be rejected; never panic.
    if let Ok(cfg) = cloverlog_config::LogConfig::from_ini_str(data) {
        // Recognized keys are the only way to leave the defaults.
        let map = cloverlog_config::parse_ini(data).unwrap_or_default();
        if !map.contains_key(cloverlog_config::KEY_SEPARATOR) {
            assert_eq!(cfg.separator, cloverlog_config::DEFAULT_SEPARATOR);
        }
        if !map.contains_key(cloverlog_config::KEY_FILE) {
            assert_eq!(cfg.file, std::path::PathBuf::from(cloverlog_config::DEFAULT_FILE));
        }
    }
});
