//! This example unscrambles a downloaded page image, given the URL it was
//! requested with.

use publus::{HookSettings, OutputFormat};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let (Some(url), Some(input)) = (args.next(), args.next()) else {
        eprintln!("usage: unscramble <url> <image>");
        return Ok(());
    };

    let body = std::fs::read(input)?;
    let settings = HookSettings {
        format: OutputFormat::Png,
    };

    match publus::intercept(&url, &body, &settings)? {
        Some(response) => std::fs::write("out.png", response.body)?,
        None => eprintln!("the URL carries no fragment, nothing to do"),
    }

    Ok(())
}
