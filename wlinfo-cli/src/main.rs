use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    wlinfo_cli::run()
}
