//! sdfont-gen - Command-line entry point

use std::path::Path;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, factor] = args.as_slice() else {
        eprintln!("usage: sdfont-gen <font.fnt> <scale-factor>");
        std::process::exit(2);
    };

    let factor: i32 = factor
        .parse()
        .with_context(|| format!("scale factor must be an integer, got '{factor}'"))?;

    let output = sdfont_gen::run(Path::new(input), factor)?;
    println!("{}", output.display());
    Ok(())
}
