//! This example decodes a configuration pack and prints the image URL of
//! every page.

use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let path = env::args().nth(1).unwrap_or_else(|| "pack.txt".to_string());
    let prefix = env::args().nth(2).unwrap_or_default();

    let blob = std::fs::read_to_string(path)?;
    let pack = publus::decode(&blob)?;

    for page in publus::generate_pages(&pack, &prefix)? {
        println!("{}\t{}", page.index, page.url);
    }

    Ok(())
}

#[cfg(feature = "logging")]
static LOGGER: SimpleLogger = SimpleLogger;

#[cfg(feature = "logging")]
struct SimpleLogger;

#[cfg(feature = "logging")]
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::LevelFilter::Debug
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("{}", record.args());
    }

    fn flush(&self) {}
}
