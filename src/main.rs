use clap::Parser;
use clyper::{cli::Cli, clipboard::SystemClipboard, dispatch, prompt::Console};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = dispatch::run(cli, &mut Console, &mut SystemClipboard) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
