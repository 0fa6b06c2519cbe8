use buildprep_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_configure, run_prepare,
};
use buildprep_lib::error::BuildPrepError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), BuildPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Configure(params) => run_configure(params).await?,
        ResolvedCommand::Prepare(params) => run_prepare(params).await?,
    }

    Ok(())
}
