use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(about = "Evaluate a postfix (reverse polish) math expression")]
pub struct Options {
    /// Expression to evaluate, e.g. "3 4 + 2 *". Tokens are separated by
    /// a single space. Read from stdin when omitted.
    pub expression: Option<String>,

    /// Output verbosity.
    /// Default: errors.
    /// -v: warnings.
    /// -vv: info.
    /// -vvv: debug.
    /// -vvvv: trace.
    #[structopt(short, parse(from_occurrences))]
    pub verbosity: u8,
}

impl Options {
    pub fn filter_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
