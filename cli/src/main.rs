mod cmd;

use anyhow::Result;

/// Command adapter over the annotation library and the package hub.
///
/// Verbs are matched exactly against `argv[1]`; operands are positional.
/// Unrecognized verbs produce no output and exit 0. There are no flags.
fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    let Some(verb) = args.get(1) else {
        anyhow::bail!("missing command (expected info, load, download_model, or nlp)");
    };

    log::debug!("dispatching {verb}");
    match verb.as_str() {
        "info" => cmd::info::run(),
        "load" => cmd::load::run(&args[2..]),
        "download_model" => cmd::download::run(&args[2..]),
        "nlp" => cmd::annotate::run(&args[2..]),
        _ => Ok(()),
    }
}
