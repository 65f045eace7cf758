// Standard library
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// 3rd party crates
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directory the per-run log files land in.
const LOG_DIR: &str = "logs";

/// Run timestamp used for the log file name.
const LOG_STAMP_FORMAT: &str = "%Y_%m_%d_%H-%M-%S";

/// `LEVEL: TIMESTAMP: message`, identical on console and file.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{}: {}: ",
            event.metadata().level(),
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logging context for one run: the subscriber wiring plus the path of the
/// file it writes to. Constructed in `main`, lives as long as the run.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates `logs/` if absent, opens the timestamped run log, and installs a
/// subscriber that mirrors every line to the file and the console.
pub fn init(level: &str) -> io::Result<RunLog> {
    fs::create_dir_all(LOG_DIR)?;

    let stamp = Local::now().format(LOG_STAMP_FORMAT);
    let path = PathBuf::from(LOG_DIR).join(format!("{}.log", stamp));
    let file = File::create(&path)?;

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hickory_proto=error".parse().unwrap())
        .add_directive("hickory_resolver=error".parse().unwrap());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .event_format(LineFormat)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .with(fmt::layer().event_format(LineFormat).with_writer(io::stdout))
        .init();

    Ok(RunLog { path })
}
