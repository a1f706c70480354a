use std::process::ExitCode;

use book_icon::{generate_icons_with, BatchConfig, StyleProfile};

fn run() -> book_icon::Result<()> {
    let config = BatchConfig::default();

    // The style is fixed at compile time; logging its JSON form under
    // RUST_LOG=debug shows which preset produced the files on disk.
    match StyleProfile::from(&config.style).to_json() {
        Ok(json) => log::debug!("style: {json}"),
        Err(e) => log::warn!("could not serialize style: {e}"),
    }

    generate_icons_with(&config, |icon| {
        println!("✓ Generated {} ({} bytes)", icon.file_name(), icon.bytes);
    })?;
    println!("\n✓ All icons generated successfully!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
