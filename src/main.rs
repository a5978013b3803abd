use clap::Parser;

mod charset;
mod config;
mod report;

#[derive(Parser, Debug)]
#[command(
    name = "encprobe",
    version,
    about = "Report the process default text encoding and create an encoded probe file"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    let config = config::ProbeConfig::from_env();
    let mut stdout = std::io::stdout().lock();
    report::run_report(&config, &mut stdout)?;
    Ok(())
}
