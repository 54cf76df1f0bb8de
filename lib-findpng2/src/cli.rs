use structopt::StructOpt;

/// The crawl knobs, reusable between library consumers and the command
/// line. See `Default` implementation for default values on fields.
#[derive(Debug, Clone, StructOpt)]
pub struct Profile {
    /// The number of worker threads to be run. Each worker owns its own
    /// HTTP client handle.
    #[structopt(short = "t", long = "threads", default_value = "1")]
    pub workers: usize,
    /// How many valid pngs to collect before stopping the crawl.
    #[structopt(short = "m", long = "max-pngs", default_value = "50")]
    pub target: usize,
}

impl Default for Profile {
    fn default() -> Profile {
        Profile {
            workers: 1,
            target: 50,
        }
    }
}
