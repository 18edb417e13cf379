//! Exercises the active-plugin accounting the way a host binding layer would: instances are
//! created through a module and destroyed by dropping their handles.

use firewisp_plugin::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct InertPlugin;

impl PluginCore for InertPlugin {}

#[derive(Default)]
struct CountingFactory {
    descriptor: StaticPluginDescriptor,
    initialized: AtomicUsize,
    deinitialized: AtomicUsize,
    created: AtomicUsize,
}

impl PluginFactory for CountingFactory {
    fn create_plugin(&self, content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
        if content_type == "application/x-unbuildable" {
            return Err(FactoryError::ConstructionFailed("the unbuildable plugin"));
        }

        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(InertPlugin))
    }

    fn descriptor(&self) -> &dyn PluginDescriptor {
        &self.descriptor
    }

    fn global_plugin_initialize(&self) {
        self.initialized.fetch_add(1, Ordering::SeqCst);
    }

    fn global_plugin_deinitialize(&self) {
        self.deinitialized.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting_module() -> (Arc<CountingFactory>, PluginModule) {
    let factory = Arc::new(CountingFactory::default());
    let module = PluginModule::new(factory.clone());
    (factory, module)
}

#[test]
fn hooks_bracket_each_maximal_run_of_activity() {
    let (factory, module) = counting_module();

    // First run: three instances created in sequence.
    let first = module.create_plugin("application/x-test").unwrap();
    assert_eq!(module.active_plugin_count(), 1);
    let second = module.create_plugin("application/x-test").unwrap();
    assert_eq!(module.active_plugin_count(), 2);
    let third = module.create_plugin("application/x-test").unwrap();
    assert_eq!(module.active_plugin_count(), 3);

    // Initialization fired exactly once, at the first creation.
    assert_eq!(factory.initialized.load(Ordering::SeqCst), 1);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 0);

    drop(first);
    drop(second);
    assert_eq!(module.active_plugin_count(), 1);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 0);

    drop(third);
    assert_eq!(module.active_plugin_count(), 0);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 1);

    // Second run: the population may grow again, and the hooks fire again.
    let revived = module.create_plugin("application/x-test").unwrap();
    assert_eq!(module.active_plugin_count(), 1);
    assert_eq!(factory.initialized.load(Ordering::SeqCst), 2);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 1);

    drop(revived);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_creation_leaves_the_count_untouched() {
    let (factory, module) = counting_module();

    let result = module.create_plugin("application/x-unbuildable");
    assert!(matches!(result, Err(FactoryError::ConstructionFailed(_))));

    // No plugin was created: no count movement, no hook.
    assert_eq!(module.active_plugin_count(), 0);
    assert_eq!(factory.created.load(Ordering::SeqCst), 0);
    assert_eq!(factory.initialized.load(Ordering::SeqCst), 0);

    // A later successful creation still behaves normally.
    let plugin = module.create_plugin("application/x-test").unwrap();
    assert_eq!(module.active_plugin_count(), 1);
    assert_eq!(factory.initialized.load(Ordering::SeqCst), 1);
    drop(plugin);
}

#[test]
fn cloned_handles_share_one_active_slot() {
    let (factory, module) = counting_module();

    let plugin = module.create_plugin("application/x-test").unwrap();
    let clone = plugin.clone();
    assert_eq!(module.active_plugin_count(), 1);

    drop(plugin);
    // The internal callback graph still holds the instance.
    assert_eq!(module.active_plugin_count(), 1);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 0);

    drop(clone);
    assert_eq!(module.active_plugin_count(), 0);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 1);
}

#[test]
fn keeping_the_core_alive_does_not_keep_the_instance_active() {
    let (_factory, module) = counting_module();

    let plugin = module.create_plugin("application/x-test").unwrap();
    let core = plugin.core().clone();

    drop(plugin);
    assert_eq!(module.active_plugin_count(), 0);

    // The object itself is still usable by whoever kept the Arc.
    core.on_plugin_ready();
}

#[test]
fn concurrent_creations_yield_independent_handles() {
    let (factory, module) = counting_module();
    let module = Arc::new(module);

    let handles = Arc::new(Mutex::new(Vec::new()));
    let threads: Vec<_> = (0..8)
        .map(|_| {
            let module = module.clone();
            let handles = handles.clone();

            std::thread::spawn(move || {
                for _ in 0..10 {
                    let plugin = module.create_plugin("application/x-test").unwrap();
                    handles.lock().unwrap().push(plugin);
                }
            })
        })
        .collect();

    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(module.active_plugin_count(), 80);
    assert_eq!(factory.created.load(Ordering::SeqCst), 80);

    // The population never emptied, so initialization ran for the first creation only.
    assert_eq!(factory.initialized.load(Ordering::SeqCst), 1);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 0);

    handles.lock().unwrap().clear();
    assert_eq!(module.active_plugin_count(), 0);
    assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 1);
}

#[test]
fn global_module_is_installed_once() {
    let first = PluginModule::install(Arc::new(CountingFactory::default())).unwrap();
    assert!(PluginModule::global().is_some());
    assert!(std::ptr::eq(first, PluginModule::global().unwrap()));

    let second = PluginModule::install(Arc::new(CountingFactory::default()));
    assert!(matches!(second, Err(FactoryError::AlreadyInstalled)));

    // The original module stayed in place.
    assert!(std::ptr::eq(first, PluginModule::global().unwrap()));
}
