use clap::Parser;

use pathmaster::{get_executable_path, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arg {
    /// Print the directory containing the executable instead of the path
    /// of the executable itself
    #[arg(short, long, default_value_t = false)]
    directory: bool,
}

fn log_setup() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(
            "PATHMASTER_LOG_LEVEL", "info")
        ).target(env_logger::Target::Stdout).init();
}

fn main() -> Result<()> {
    log_setup();
    let arg = Arg::parse();
    let path = get_executable_path().map_err(|e|{
        log::error!("Failed to get the executable path: {}", e);
        e
    })?;
    if arg.directory {
        // A canonical path to a file always has a parent
        if let Some(directory) = path.parent() {
            println!("{}", directory.display())
        }
    } else {
        println!("{}", path.display())
    }
    Ok(())
}
