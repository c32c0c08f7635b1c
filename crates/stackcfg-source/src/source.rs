//! Configuration sources and their composition

use crate::error::Result;
use stackcfg_store::Repository;

/// Anything that can produce a partial configuration.
pub trait Source {
    /// Read this source into a fresh repository.
    fn read(&self) -> Result<Repository>;
}

impl<S: Source + ?Sized> Source for &S {
    fn read(&self) -> Result<Repository> {
        (**self).read()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn read(&self) -> Result<Repository> {
        (**self).read()
    }
}

/// Read `sources` in order and deep merge them, later sources winning.
///
/// Stops at the first source that fails.
pub fn compose<I>(sources: I) -> Result<Repository>
where
    I: IntoIterator,
    I::Item: Source,
{
    let mut composed = Repository::new();
    for (layer, source) in sources.into_iter().enumerate() {
        let repo = source.read()?;
        tracing::debug!(layer, paths = repo.paths().len(), "Merging configuration source");
        composed.merge(&repo);
    }
    Ok(composed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    struct Fixed(Repository);

    impl Source for Fixed {
        fn read(&self) -> Result<Repository> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Source for Failing {
        fn read(&self) -> Result<Repository> {
            Err(Error::UnsupportedEngine {
                engine: "bogus".to_string(),
                mode: "production".to_string(),
                available: vec!["native".to_string()],
            })
        }
    }

    fn fixed(entries: &[(&str, serde_json::Value)]) -> Fixed {
        let mut repo = Repository::new();
        repo.set_many(entries.iter().map(|(p, v)| (*p, v.clone())));
        Fixed(repo)
    }

    #[test]
    fn test_compose_later_sources_win() {
        let defaults = fixed(&[("mode", json!("production")), ("cron.enabled", json!(false))]);
        let user = fixed(&[("cron.enabled", json!(true))]);

        let sources: Vec<Box<dyn Source>> = vec![Box::new(defaults), Box::new(user)];
        let repo = compose(sources).unwrap();

        assert_eq!(
            repo.as_value(),
            json!({"mode": "production", "cron": {"enabled": true}})
        );
    }

    #[test]
    fn test_compose_stops_on_error() {
        let sources: Vec<Box<dyn Source>> = vec![Box::new(fixed(&[])), Box::new(Failing)];
        assert!(matches!(
            compose(sources),
            Err(Error::UnsupportedEngine { .. })
        ));
    }

    #[test]
    fn test_compose_empty() {
        let sources: Vec<Fixed> = Vec::new();
        assert!(compose(sources).unwrap().is_empty());
    }
}
