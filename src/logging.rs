use tracing::{warn, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "usage_icons=info";

/// Build the log filter.
///
/// A valid `RUST_LOG` is used as-is. Otherwise the default directive applies,
/// refined by the config's `log_filter`. Unusable input is skipped and
/// described in the returned warnings, to be logged once a subscriber exists.
pub fn env_filter(
    rust_log: Option<&str>,
    config_directive: Option<&str>,
) -> (EnvFilter, Vec<String>) {
    let mut warnings = Vec::new();

    if let Some(env) = rust_log.filter(|s| !s.trim().is_empty()) {
        match EnvFilter::try_new(env) {
            Ok(filter) => return (filter, warnings),
            Err(e) => warnings.push(format!("Ignoring invalid RUST_LOG {:?}: {}", env, e)),
        }
    }

    let mut filter = EnvFilter::new(DEFAULT_DIRECTIVE);
    if let Some(raw) = config_directive {
        match raw.parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => warnings.push(format!("Ignoring invalid log_filter {:?}: {}", raw, e)),
        }
    }

    (filter, warnings)
}

/// Formatting subscriber writing through `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Emit warnings collected before logging was set up.
pub fn report(warnings: &[String]) {
    for message in warnings {
        warn!("{}", message);
    }
}

/// In-memory log sink for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
