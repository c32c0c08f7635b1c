//! Command-line option source
//!
//! [`CliSource`] resolves the mode and sync engine first, since that is the
//! only step that can fail, and then translates every requested option
//! into the output repository.

use crate::engine::resolve_engine;
use crate::error::Result;
use crate::input::OptionInput;
use crate::schema::{SERVICE_OPTIONS, options, paths};
use crate::source::Source;
use stackcfg_store::{ConfigPath, Repository};

/// Source backed by user-supplied options.
#[derive(Debug, Clone)]
pub struct CliSource<I> {
    input: I,
}

impl<I: OptionInput> CliSource<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: OptionInput> Source for CliSource<I> {
    fn read(&self) -> Result<Repository> {
        // A toggle given for either key still counts as supplied: its text
        // form is an unknown mode, or an engine no mode accepts.
        let mode = self.input.option(options::MODE).map(|v| v.to_string());
        let sync_engine = self
            .input
            .option(options::SYNC_ENGINE)
            .map(|v| v.to_string());

        let selection = resolve_engine(mode.as_deref(), sync_engine.as_deref())?;

        let mut repository = Repository::new();
        selection.write_to(&mut repository);
        translate(&self.input, &mut repository);

        Ok(repository)
    }
}

/// Write every requested option into `out`.
///
/// Options that are absent, `false` or empty are treated as not requested
/// and write nothing. Keys outside the schema are never read.
pub fn translate(input: &impl OptionInput, out: &mut Repository) {
    for (option, service) in SERVICE_OPTIONS {
        if let Some(version) = input.truthy(option) {
            let service = ConfigPath::new(service);
            tracing::debug!(%service, "Enabling service");
            out.set(service.child("enabled"), true);
            out.set(service.child("version"), version);
        }
    }

    if input.is_set(options::WITH_SELENIUM) {
        out.set(paths::SELENIUM_ENABLED, true);
    }

    if let Some(image) = input.truthy(options::SELENIUM_IMAGE) {
        out.set(paths::SELENIUM_ENABLED, true);
        out.set(paths::SELENIUM_IMAGE, image);
    }

    if let Some(version) = input.truthy(options::SELENIUM_VERSION) {
        out.set(paths::SELENIUM_ENABLED, true);
        out.set(paths::SELENIUM_VERSION, version);
    }

    if input.is_set(options::NO_TMP_MOUNTS) {
        out.set(paths::TMP_MOUNTS, false);
    }

    if input.is_set(options::WITH_CRON) {
        out.set(paths::CRON_ENABLED, true);
    }

    if input.is_set(options::NO_VARNISH) {
        out.set(paths::SERVICES_VARNISH_ENABLED, false);
    }

    if input.is_set(options::WITH_XDEBUG) {
        out.set(paths::SERVICES_XDEBUG_ENABLED, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::RawOptions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_read_writes_mode_and_default_engine() {
        let options = RawOptions::new().with_value("mode", "developer");
        let repo = CliSource::new(&options).read().unwrap();
        assert_eq!(
            repo.as_value(),
            json!({"mode": "developer", "sync_engine": "native"})
        );
    }

    #[test]
    fn test_read_fails_before_translation() {
        let options = RawOptions::new()
            .with_value("mode", "production")
            .with_value("sync-engine", "bogus")
            .with_value("db", "10.4");

        let err = CliSource::new(&options).read().unwrap_err();
        assert!(matches!(err, Error::UnsupportedEngine { ref engine, .. } if engine == "bogus"));
    }

    #[test]
    fn test_engine_toggle_is_rejected_not_defaulted() {
        let options = RawOptions::new()
            .with_value("mode", "production")
            .with_flag("sync-engine");

        let err = CliSource::new(&options).read().unwrap_err();
        assert_eq!(
            err.to_string(),
            "File sync engine 'true' is not supported. Available: native"
        );
    }

    #[test]
    fn test_mode_toggle_is_an_unknown_mode() {
        let options = RawOptions::new()
            .with_flag("mode")
            .with_value("sync-engine", "bogus");

        let repo = CliSource::new(&options).read().unwrap();
        assert_eq!(
            repo.as_value(),
            json!({"mode": "true", "sync_engine": "bogus"})
        );
    }

    #[test]
    fn test_translate_ignores_unknown_keys() {
        let options = RawOptions::new()
            .with_value("mysql", "8.0")
            .with_flag("with-varnish")
            .with_value("expose-db-port", "3306");

        let mut repo = Repository::new();
        translate(&options, &mut repo);
        assert!(repo.is_empty(), "unexpected paths: {:?}", repo.paths());
    }

    #[test]
    fn test_translate_selenium_image_alone_enables() {
        let options = RawOptions::new().with_value("selenium-image", "selenium/standalone-chrome");
        let mut repo = Repository::new();
        translate(&options, &mut repo);
        assert_eq!(
            repo.as_value(),
            json!({"selenium": {"enabled": true, "image": "selenium/standalone-chrome"}})
        );
    }
}
