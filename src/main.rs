use anyhow::Result;
use pawnstorm::uci::UciHandler;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("pawnstorm {} ready", env!("CARGO_PKG_VERSION"));

    let mut uci = UciHandler::new();
    uci.run()
}
