use anyhow::Result;
use argh::FromArgs;
use intro_exercises::Runner;
use intro_exercises::io_adapters::TerminalInput;

#[derive(FromArgs)]
/// Count the distinct characters two strings have in common.
struct Args {}

fn main() -> Result<()> {
    intro_exercises::logging::init();
    let _args: Args = argh::from_env();

    let mut input = TerminalInput::new()?;
    Runner::default().run("matching", &mut input, &mut std::io::stdout())
}
