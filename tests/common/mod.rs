// Shared test helpers for integration tests
use anyhow::{anyhow, Result};
use pseudoloc::shim::backend::{LocaleBackend, LocaleCategory};
use std::sync::Mutex;

/// A stub backend that records every delegated call and applies the
/// English plural rule, standing in for the real localization library.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().expect("recording backend lock poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("recording backend lock poisoned").push(call);
    }
}

impl LocaleBackend for RecordingBackend {
    fn resolve_plural(
        &self,
        domain: Option<&str>,
        singular: &str,
        plural: &str,
        count: u64,
        category: Option<LocaleCategory>,
    ) -> Result<String> {
        self.record(format!(
            "resolve_plural(domain={:?}, singular={:?}, plural={:?}, count={}, category={:?})",
            domain, singular, plural, count, category
        ));
        Ok(if count == 1 { singular } else { plural }.to_string())
    }

    fn set_domain(&self, name: &str) -> Result<String> {
        self.record(format!("set_domain({:?})", name));
        Ok(name.to_string())
    }

    fn set_locale(&self, category: LocaleCategory, locale: &str) -> Result<String> {
        self.record(format!("set_locale({}, {:?})", category, locale));
        Ok(locale.to_string())
    }

    fn set_codeset(&self, domain: &str, codeset: &str) -> Result<String> {
        self.record(format!("set_codeset({:?}, {:?})", domain, codeset));
        Ok(codeset.to_string())
    }
}

/// A backend whose routines are all unavailable, for exercising the fatal
/// delegation-failure path.
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl LocaleBackend for UnavailableBackend {
    fn resolve_plural(
        &self,
        _domain: Option<&str>,
        _singular: &str,
        _plural: &str,
        _count: u64,
        _category: Option<LocaleCategory>,
    ) -> Result<String> {
        Err(anyhow!("plural resolution routine unavailable"))
    }

    fn set_domain(&self, _name: &str) -> Result<String> {
        Err(anyhow!("textdomain routine unavailable"))
    }

    fn set_locale(&self, _category: LocaleCategory, _locale: &str) -> Result<String> {
        Err(anyhow!("setlocale routine unavailable"))
    }

    fn set_codeset(&self, _domain: &str, _codeset: &str) -> Result<String> {
        Err(anyhow!("codeset routine unavailable"))
    }
}
