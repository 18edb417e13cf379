//! A minimal example plugin: counts how many times the page has made it ready.

use firewisp_plugin::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct CounterPlugin {
    ready_count: AtomicUsize,
}

impl CounterPlugin {
    pub fn ready_count(&self) -> usize {
        self.ready_count.load(Ordering::Relaxed)
    }
}

impl PluginCore for CounterPlugin {
    fn on_plugin_ready(&self) {
        self.ready_count.fetch_add(1, Ordering::Relaxed);
    }
}

static DESCRIPTOR: StaticPluginDescriptor = StaticPluginDescriptor {
    name: "Counter Example",
    description: "Counts plugin readiness events",
    id: Some("org.firewisp.examples.counter"),
    vendor: Some("firewisp"),
    version: Some("0.1.0"),
    content_types: &[],
};

#[derive(Default)]
pub struct CounterPluginFactory;

impl PluginFactory for CounterPluginFactory {
    fn create_plugin(&self, _content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
        Ok(Arc::new(CounterPlugin {
            ready_count: AtomicUsize::new(0),
        }))
    }

    fn descriptor(&self) -> &dyn PluginDescriptor {
        &DESCRIPTOR
    }

    fn logging_methods(&self, out: &mut Vec<LogMethod>) {
        out.push(LogMethod::Console);
    }
}

firewisp_export_factory!(CounterPluginFactory::default);
