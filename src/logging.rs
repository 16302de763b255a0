use crate::config::{Environment, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// JSON in production, pretty everywhere else
    pub fn default_for(env: &Environment) -> Self {
        match env {
            Environment::Prod => Self::Json,
            Environment::Dev | Environment::Staging => Self::Pretty,
        }
    }
}

fn default_filter(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "tenderlot_web=debug,tower_http=debug,info",
        Environment::Staging => "tenderlot_web=debug,tower_http=info,info",
        Environment::Prod => "tenderlot_web=info,tower_http=info,warn",
    }
}

pub fn init_logging(settings: &Settings) {
    let env = &settings.env;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(env).into());

    let format = settings
        .log_format
        .unwrap_or_else(|| LogFormat::default_for(env));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
        LogFormat::Compact => registry.with(fmt_layer.compact()).init(),
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).init(),
    }

    tracing::info!(?format, "Logging initialized for {:?} environment", env);
}
