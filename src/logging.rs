use crate::FailResult;

use ::std::fmt;
use ::log::{Level, LevelFilter};

/// Install the global logger.
///
/// Call once, before the first use of a log macro.
pub fn init(verbose: bool) -> FailResult<()>
{Ok({
    use ::std::time::Instant;

    let start = Instant::now();
    ::fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_nanos() / 1_000_000,
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(match verbose {
            true => LevelFilter::Trace,
            false => LevelFilter::Info,
        })
        .chain(::std::io::stdout())
        .apply()?;
})}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ::ansi_term::Colour::Red.bold(),
            Level::Warn  => ::ansi_term::Colour::Red.normal(),
            Level::Info  => ::ansi_term::Colour::Cyan.bold(),
            Level::Debug => ::ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ::ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
