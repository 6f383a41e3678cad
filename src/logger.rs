use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the logger. `RUST_LOG` takes precedence over `default_level`.
///
/// Each line carries the level, the module path and the line number of the call site.
pub fn initialize_logger(default_level: LevelFilter) {
    let env = Env::default().default_filter_or(default_level.as_str());
    let mut builder = Builder::from_env(env);

    builder.format(|buf, record| {
        let path = record.module_path().unwrap_or("");
        let line = match record.line() {
            Some(l) => l.to_string(),
            None => "".to_string(),
        };
        writeln!(
            buf,
            "[{} {}:{}] {}",
            record.level(),
            path,
            line,
            record.args()
        )
    });

    if let Err(err) = builder.try_init() {
        log::debug!("keeping the logger that is already installed: {}", err);
    }
}
