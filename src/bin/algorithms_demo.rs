use algorithms::demo::{self, DemoConfig};
use log::debug;
use std::env;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [array_size] [max_value] [seed]
    let config = DemoConfig::from_args(env::args().skip(1));
    debug!("demo configuration: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    demo::run(&config, stdin.lock(), stdout.lock())?;

    Ok(())
}
