use env_logger::Env;
use std::io::Write;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Installs a logger for the test binary, once. `RUST_LOG` overrides the default `trace` level.
pub fn enable_logging() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}:{} - {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.module_path().unwrap_or("midi_messages"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .is_test(true)
            .init()
    })
}
