use std::process::{ExitCode};
use clap::{Parser};
use img2texture::io::cli::{Args};

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();
    match img2texture::img2texture(&args.image, &args.name, args.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("img2texture: {}", e);
            ExitCode::FAILURE
        },
    }
}
