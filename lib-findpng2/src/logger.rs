use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

pub fn init_logger(is_verbose: bool) -> log4rs::Handle {
    let pattern = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{M}:{L} {T}] {h({l})} {m}{n}");

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(pattern))
        .build();

    let root_level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(console)))
        .logger(Logger::builder().build("html5ever", log::LevelFilter::Error))
        .logger(Logger::builder().build("selectors", log::LevelFilter::Error))
        .logger(Logger::builder().build("hyper", log::LevelFilter::Error))
        .logger(Logger::builder().build("reqwest", log::LevelFilter::Error))
        .logger(Logger::builder().build("cookie_store", log::LevelFilter::Error))
        .build(Root::builder().appender("stderr").build(root_level))
        .expect("could not config logger");

    log4rs::init_config(config).expect("could not start logger")
}
