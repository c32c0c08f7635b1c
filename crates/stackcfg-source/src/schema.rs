//! Option schema
//!
//! Static tables describing which raw options are recognized, where they
//! land in the output configuration and which sync engines each operating
//! mode accepts. Nothing here is mutable.

use std::fmt;

/// Recognized option keys.
pub mod options {
    pub const PHP: &str = "php";
    pub const NGINX: &str = "nginx";
    pub const DB: &str = "db";
    pub const EXPOSE_DB_PORT: &str = "expose-db-port";
    pub const REDIS: &str = "redis";
    pub const ES: &str = "es";
    pub const NODE: &str = "node";
    pub const RABBIT_MQ: &str = "rmq";
    pub const SELENIUM_VERSION: &str = "selenium-version";
    pub const SELENIUM_IMAGE: &str = "selenium-image";

    pub const MODE: &str = "mode";
    pub const SYNC_ENGINE: &str = "sync-engine";
    pub const WITH_CRON: &str = "with-cron";
    pub const NO_VARNISH: &str = "no-varnish";
    pub const WITH_SELENIUM: &str = "with-selenium";
    pub const NO_TMP_MOUNTS: &str = "no-tmp-mounts";
    pub const WITH_XDEBUG: &str = "with-xdebug";

    /// Every key the translator knows about. `expose-db-port` is accepted
    /// but has no effect on the output.
    pub const ALL: &[&str] = &[
        PHP,
        NGINX,
        DB,
        EXPOSE_DB_PORT,
        REDIS,
        ES,
        NODE,
        RABBIT_MQ,
        SELENIUM_VERSION,
        SELENIUM_IMAGE,
        MODE,
        SYNC_ENGINE,
        WITH_CRON,
        NO_VARNISH,
        WITH_SELENIUM,
        NO_TMP_MOUNTS,
        WITH_XDEBUG,
    ];
}

/// Output configuration paths.
pub mod paths {
    pub const MODE: &str = "mode";
    pub const SYNC_ENGINE: &str = "sync_engine";
    pub const TMP_MOUNTS: &str = "tmp_mounts";
    pub const CRON_ENABLED: &str = "cron.enabled";

    // Top level, not under `services`
    pub const PHP: &str = "php";

    pub const SERVICES_DB: &str = "services.db";
    pub const SERVICES_NGINX: &str = "services.nginx";
    pub const SERVICES_REDIS: &str = "services.redis";
    pub const SERVICES_ES: &str = "services.elasticsearch";
    pub const SERVICES_NODE: &str = "services.node";
    pub const SERVICES_RMQ: &str = "services.rabbitmq";

    pub const SERVICES_VARNISH_ENABLED: &str = "services.varnish.enabled";
    pub const SERVICES_XDEBUG_ENABLED: &str = "services.xdebug.enabled";

    pub const SELENIUM_ENABLED: &str = "selenium.enabled";
    pub const SELENIUM_IMAGE: &str = "selenium.image";
    pub const SELENIUM_VERSION: &str = "selenium.version";
}

/// Service options that enable a service and pin its version, paired with
/// the table they write `enabled` and `version` into. Everything but PHP
/// lives under `services`.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    (options::PHP, paths::PHP),
    (options::DB, paths::SERVICES_DB),
    (options::NGINX, paths::SERVICES_NGINX),
    (options::REDIS, paths::SERVICES_REDIS),
    (options::ES, paths::SERVICES_ES),
    (options::NODE, paths::SERVICES_NODE),
    (options::RABBIT_MQ, paths::SERVICES_RMQ),
];

pub const SYNC_ENGINE_DOCKER_SYNC: &str = "docker-sync";
pub const SYNC_ENGINE_MUTAGEN: &str = "mutagen";
pub const SYNC_ENGINE_NATIVE: &str = "native";

/// Operating modes with their own sync engine rules.
///
/// Any other mode string is passed through without engine validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Developer,
    Production,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Developer, Mode::Production];

    /// Look up a known mode by its exact identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "developer" => Some(Self::Developer),
            "production" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Production => "production",
        }
    }

    /// Engine used when none is requested.
    pub fn default_sync_engine(&self) -> &'static str {
        match self {
            Self::Developer | Self::Production => SYNC_ENGINE_NATIVE,
        }
    }

    /// Engines this mode accepts, in display order.
    pub fn sync_engines(&self) -> &'static [&'static str] {
        match self {
            Self::Developer => &[
                SYNC_ENGINE_DOCKER_SYNC,
                SYNC_ENGINE_MUTAGEN,
                SYNC_ENGINE_NATIVE,
            ],
            Self::Production => &[SYNC_ENGINE_NATIVE],
        }
    }

    pub fn supports(&self, engine: &str) -> bool {
        self.sync_engines().contains(&engine)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
