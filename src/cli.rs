use monthpicker::Cli;

fn main() -> anyhow::Result<()> {
    // The picker owns the terminal, so only warnings reach stderr by default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Cli::run()
}
