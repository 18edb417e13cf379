//! Logging initialization from factory configuration. All assertions about the global
//! subscriber live in a single test: integration test binaries share one process.

use firewisp_plugin::logging::{self, LoggingError};
use firewisp_plugin::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

struct InertPlugin;

impl PluginCore for InertPlugin {}

struct SilentFactory;

impl PluginFactory for SilentFactory {
    fn create_plugin(&self, _content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
        Ok(Arc::new(InertPlugin))
    }
}

struct FileLoggingFactory {
    log_path: PathBuf,
}

impl PluginFactory for FileLoggingFactory {
    fn create_plugin(&self, _content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
        Ok(Arc::new(InertPlugin))
    }

    fn logging_methods(&self, out: &mut Vec<LogMethod>) {
        out.push(LogMethod::File(self.log_path.clone()));
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

#[test]
fn initialization_follows_the_factory_configuration() {
    // The default configuration is an empty sink list: a successful no-op that installs nothing.
    let silent = PluginModule::new(Arc::new(SilentFactory));
    let mut methods = Vec::new();
    silent.factory().logging_methods(&mut methods);
    assert!(methods.is_empty());
    assert_eq!(silent.factory().log_level(), LogLevel::Info);
    logging::initialize(&silent).unwrap();

    // A configured file sink actually receives output.
    let log_path = std::env::temp_dir().join(format!(
        "firewisp-logging-test-{}.log",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&log_path);

    let module = PluginModule::new(Arc::new(FileLoggingFactory {
        log_path: log_path.clone(),
    }));
    logging::initialize(&module).unwrap();

    tracing::info!("the plugin says hello");
    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("the plugin says hello"));

    // Only one subscriber can own the process; a second configured install reports it.
    let again = PluginModule::new(Arc::new(FileLoggingFactory {
        log_path: log_path.clone(),
    }));
    assert!(matches!(
        logging::initialize(&again),
        Err(LoggingError::AlreadyInstalled)
    ));

    let _ = std::fs::remove_file(&log_path);
}
