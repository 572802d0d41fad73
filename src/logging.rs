use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::formatter::CustomFormatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Filter used when `RUST_LOG` is unset: info for the library and the calling
/// binary, warn for everything else.
fn default_directives(binary: &str) -> String {
    let library = env!("CARGO_CRATE_NAME");
    if binary == library {
        format!("warn,{library}=info")
    } else {
        format!("warn,{library}=info,{binary}=info")
    }
}

/// Configure and initialize logging for the demos.
///
/// `binary` is the calling binary's crate name, usually `env!("CARGO_CRATE_NAME")`.
pub fn setup_logging(binary: &str) {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(binary)));

        let subscriber = FmtSubscriber::builder()
            .with_target(true)
            .event_format(CustomFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_include_binary() {
        assert_eq!(default_directives("parallax"), "warn,isowalk=info,parallax=info");
        assert_eq!(default_directives("sprites"), "warn,isowalk=info,sprites=info");
        assert_eq!(default_directives("isowalk"), "warn,isowalk=info");
    }

    #[test]
    fn test_default_directives_parse() {
        for binary in ["isowalk", "parallax", "sprites"] {
            assert!(EnvFilter::try_new(default_directives(binary)).is_ok());
        }
    }
}
