use dioxus::prelude::*;
use listings_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use listings_config::{Config, DEFAULT_SITE_NAME};
use ui::App;
use ui::components::ErrorScreen;

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "listings-dioxus".to_string())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("listings starting up");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [data-path]", program_name());
        process::exit(1);
    }
    let data_arg = args.get(1).map(String::as_str);
    let from_config = data_arg.is_none();

    let data_path: PathBuf = match Config::resolve_data_path(data_arg) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("Error: No data path provided and no config file found");
            eprintln!("Usage: {} <data-path>", program_name());
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <data-path>", program_name());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_data_dir(&data_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Data path '{}'{} is invalid: {e}",
            data_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!("Using data path {}", data_path.display());
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-resolve using the same rules as main; the launcher takes a plain fn
    let data_arg = env::args().nth(1);
    let site_name = Config::load()
        .ok()
        .flatten()
        .map(|config| config.site_name)
        .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

    match Config::resolve_data_path(data_arg.as_deref()) {
        Ok(Some(data_path)) => rsx! {
            App { data_path, site_name }
        },
        Ok(None) => rsx! {
            ErrorScreen {
                title: "No data directory",
                message: "Pass a data path or create a config file",
                details: Some(Config::config_path().display().to_string()),
            }
        },
        Err(e) => rsx! {
            ErrorScreen {
                title: "Config error",
                message: "Failed to load configuration",
                details: Some(e.to_string()),
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("listings")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
