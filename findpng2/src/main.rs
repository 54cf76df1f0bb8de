//! The `findpng2` binary: argument handling, output files and the final
//! timing line. Everything interesting happens in `lib-findpng2`.

use ansi_term::Color::Red;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use structopt::StructOpt;
use url::Url;

use lib_findpng2::{init_logger, CrawlMaster, HttpConfiguration, Profile};

/// Crawls the web from a seed page and reports the first pngs it finds.
#[derive(Debug, StructOpt)]
#[structopt(name = "findpng2")]
struct Cli {
    #[structopt(flatten)]
    profile: Profile,
    /// Also write every visited url to this file, one per line.
    #[structopt(short = "v", long = "logfile")]
    logfile: Option<PathBuf>,
    /// Log at debug level instead of info.
    #[structopt(long)]
    verbose: bool,
    /// The absolute http(s) url the crawl starts from.
    seed_url: String,
}

fn main() {
    let cli = Cli::from_args();

    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}: {:#}", Red.bold().paint("error"), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), anyhow::Error> {
    if cli.profile.workers == 0 {
        anyhow::bail!("at least one worker thread is required ('-t')");
    }

    let seed: Url = cli.seed_url.parse().context("invalid seed url")?;
    if seed.scheme() != "http" && seed.scheme() != "https" {
        anyhow::bail!("seed url must be http or https, got `{}`", seed);
    }

    let started = Instant::now();

    let master = CrawlMaster::new(HttpConfiguration::default());
    let report = master.start(seed, &cli.profile)?;

    write_lines("./png_urls.txt", report.pngs.iter().map(Url::as_str))
        .context("writing png_urls.txt")?;

    if let Some(logfile) = &cli.logfile {
        write_lines(logfile, report.visited.iter().map(String::as_str))
            .with_context(|| format!("writing {}", logfile.display()))?;
    }

    println!(
        "findpng2 execution time: {:.6} seconds",
        started.elapsed().as_secs_f64(),
    );

    Ok(())
}

fn write_lines<'a>(
    path: impl AsRef<Path>,
    lines: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()
}
