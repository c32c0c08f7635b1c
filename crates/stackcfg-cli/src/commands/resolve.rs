//! The `resolve` command

use stackcfg_source::schema::options;
use stackcfg_source::{CliSource, FileSource, OptionInput, OptionValue, Source, compose};
use stackcfg_store::Repository;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::Result;

fn text(value: &Option<String>) -> Option<OptionValue<'_>> {
    value.as_deref().map(OptionValue::Text)
}

// Unset toggles report `None` so they read the same as a missing flag
fn flag(set: bool) -> Option<OptionValue<'static>> {
    set.then_some(OptionValue::Flag(true))
}

impl OptionInput for ResolveArgs {
    fn option(&self, key: &str) -> Option<OptionValue<'_>> {
        match key {
            options::PHP => text(&self.php),
            options::NGINX => text(&self.nginx),
            options::DB => text(&self.db),
            options::EXPOSE_DB_PORT => text(&self.expose_db_port),
            options::REDIS => text(&self.redis),
            options::ES => text(&self.es),
            options::NODE => text(&self.node),
            options::RABBIT_MQ => text(&self.rmq),
            options::SELENIUM_VERSION => text(&self.selenium_version),
            options::SELENIUM_IMAGE => text(&self.selenium_image),
            options::MODE => text(&self.mode),
            options::SYNC_ENGINE => text(&self.sync_engine),
            options::WITH_CRON => flag(self.with_cron),
            options::NO_VARNISH => flag(self.no_varnish),
            options::WITH_SELENIUM => flag(self.with_selenium),
            options::NO_TMP_MOUNTS => flag(self.no_tmp_mounts),
            options::WITH_XDEBUG => flag(self.with_xdebug),
            _ => None,
        }
    }
}

/// Compose the configuration file (if any) with the command-line options.
pub fn resolve(args: &ResolveArgs) -> Result<Repository> {
    let mut sources: Vec<Box<dyn Source + '_>> = Vec::new();
    if let Some(path) = &args.config {
        tracing::debug!(?path, "Layering configuration file");
        sources.push(Box::new(FileSource::new(path)));
    }
    sources.push(Box::new(CliSource::new(args)));

    Ok(compose(sources)?)
}

pub fn render(repo: &Repository, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => repo.to_json_pretty()?,
        OutputFormat::Yaml => repo.to_yaml()?,
    })
}

/// Resolve and print the configuration.
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let repo = resolve(args)?;
    let output = render(&repo, args.format)?;
    println!("{}", output.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use stackcfg_source::schema;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_every_recognized_key_is_mapped() {
        let args = ResolveArgs {
            php: Some("8.1".into()),
            nginx: Some("1.19".into()),
            db: Some("10.4".into()),
            expose_db_port: Some("3306".into()),
            redis: Some("6.0".into()),
            es: Some("7.9".into()),
            node: Some("14".into()),
            rmq: Some("3.8".into()),
            selenium_version: Some("latest".into()),
            selenium_image: Some("selenium/standalone-chrome".into()),
            mode: Some("developer".into()),
            sync_engine: Some("native".into()),
            with_cron: true,
            no_varnish: true,
            with_selenium: true,
            no_tmp_mounts: true,
            with_xdebug: true,
            ..ResolveArgs::default()
        };

        for key in schema::options::ALL {
            assert!(args.option(key).is_some(), "{} is not mapped", key);
        }
        assert_eq!(args.option("unknown"), None);
    }

    #[test]
    fn test_unset_toggle_reads_as_absent() {
        let args = ResolveArgs::default();
        assert_eq!(args.option(options::WITH_CRON), None);
        assert_eq!(args.option(options::PHP), None);
    }

    #[test]
    fn test_resolve_without_file() {
        let args = ResolveArgs {
            mode: Some("production".into()),
            redis: Some("6.0".into()),
            ..ResolveArgs::default()
        };

        let repo = resolve(&args).unwrap();
        assert_eq!(
            repo.as_value(),
            json!({
                "mode": "production",
                "sync_engine": "native",
                "services": {"redis": {"enabled": true, "version": "6.0"}}
            })
        );
    }

    #[test]
    fn test_resolve_layers_file_under_options() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stack.yaml");
        fs::write(
            &path,
            "mode: developer\ncron:\n  enabled: false\nservices:\n  db:\n    enabled: true\n    version: '10.2'\n",
        )
        .unwrap();

        let args = ResolveArgs {
            db: Some("10.4".into()),
            with_cron: true,
            config: Some(path),
            ..ResolveArgs::default()
        };

        let repo = resolve(&args).unwrap();
        assert_eq!(repo.get("mode"), Some(&json!("developer")));
        assert_eq!(repo.get("cron.enabled"), Some(&json!(true)));
        assert_eq!(repo.get("services.db.version"), Some(&json!("10.4")));
    }

    #[test]
    fn test_resolve_unsupported_engine() {
        let args = ResolveArgs {
            mode: Some("production".into()),
            sync_engine: Some("mutagen".into()),
            ..ResolveArgs::default()
        };

        let err = resolve(&args).unwrap_err();
        assert!(matches!(err, CliError::Source(_)));
        assert_eq!(
            err.to_string(),
            "File sync engine 'mutagen' is not supported. Available: native"
        );
    }

    #[test]
    fn test_render_yaml() {
        let mut repo = Repository::new();
        repo.set("tmp_mounts", false);
        let output = render(&repo, OutputFormat::Yaml).unwrap();
        assert_eq!(output.trim(), "tmp_mounts: false");
    }
}
