/// Native entry point: check a page configuration file and summarize it.
///
/// Usage: `folio-native [config.json]` or `folio-native --defaults` to print
/// the built-in configuration.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use folio::PageConfig;

    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--defaults") {
        return match PageConfig::new().to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize defaults: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match arg.as_ref().map(PathBuf::from) {
        Some(path) => match PageConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                folio::logging::init(log::LevelFilter::Info);
                log::error!("Invalid configuration {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => PageConfig::new(),
    };

    folio::logging::init(config.log_level.to_level_filter());
    match &arg {
        Some(path) => log::info!("Loaded configuration from {}", path),
        None => log::info!("No configuration given, checking built-in defaults"),
    }

    for key in config.keybindings.conflicts() {
        log::warn!("Key '{}' is bound to more than one gallery action", key);
    }

    println!("Scroll target: #{}", config.scroll.target_section);
    println!(
        "Reveal: threshold {}, root margin '{}', transition '{}'",
        config.reveal.threshold,
        config.reveal.root_margin(),
        config.reveal.transition()
    );
    println!(
        "Keys: close '{}', previous '{}', next '{}'",
        config.keybindings.close, config.keybindings.previous, config.keybindings.next
    );
    println!("Galleries: {}", config.galleries.len());
    for (id, images) in config.galleries.iter() {
        println!("  {} ({} images)", id, images.len());
        for image in images {
            if image.alt.trim().is_empty() {
                log::warn!("Image {} in gallery '{}' has no alt text", image.src, id);
            }
            println!("    {}  {}", image.src, image.alt);
        }
    }

    ExitCode::SUCCESS
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
