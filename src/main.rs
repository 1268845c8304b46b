use clap::Parser;
use kounti::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args.log_path();
    if let Err(err) = kounti::logging::init_tracing(&log_path) {
        eprintln!("kounti: logging disabled: {err:#}");
    }

    let store = args.build_store();
    tracing::info!(
        base = %store.state().block_type,
        blocks = store.state().block_count,
        theme = %store.state().theme,
        "session started"
    );

    let state = kounti::ui::run(store)?;
    tracing::info!(
        base = %state.block_type,
        value = ?state.value(),
        "session ended"
    );
    Ok(())
}
