use log::LevelFilter;
use std::io::Write;

/// Installs the process logger. Later calls are no-ops so tests can call it freely.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .try_init();
}
