fn main() {
    record_store_cli::main();
}

mod record_store_cli {
    use colored::Colorize;
    use record_store::{
        config::Config,
        example_flow::ExampleFlow,
        fs_ops::folder_ops::create_folder,
        logger::logging_configuration,
        RecordStore,
    };
    use std::{env, path::PathBuf};

    const DEFAULT_CONFIG_PATH: &str = "config.json";

    pub fn main() {
        let args: Vec<String> = env::args().collect();
        let version = env!("CARGO_PKG_VERSION");
        let config_path = handle_args(&args, version);
        println!("{}", "Starting record store example...".green().bold());

        let config = Config::load(&config_path);
        logging_configuration::log_configure(&config);
        log::info!("Version: {}", version.green());
        log::info!(
            "Workspace: {}, store file: {}",
            config.workspace_dir.to_string_lossy(),
            config.store_file_name
        );

        if !config.workspace_dir.exists() {
            if let Err(error) = create_folder(&config.workspace_dir) {
                log::error!("Cannot prepare the workspace: {}", error);
            }
        }

        let store = RecordStore::new();
        let outcomes = ExampleFlow::new(&config.workspace_dir, &config.store_file_name, &store).run();
        for outcome in &outcomes {
            println!("{}", outcome.status_line());
        }
        let failed = outcomes.iter().filter(|outcome| outcome.result.is_err()).count();
        if failed > 0 {
            log::warn!("{} of {} steps failed", failed, outcomes.len());
        }
    }

    // --version exits immediately, --config selects the settings file
    fn handle_args(args: &[String], version: &str) -> PathBuf {
        match args.get(1).map(String::as_str) {
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
            Some("--version") | Some("-v") if args.len() == 2 => {
                println!("{version}");
                std::process::exit(0)
            }
            Some("--config") | Some("-c") if args.len() == 3 => PathBuf::from(&args[2]),
            Some(_) => {
                eprintln!("usage: record_store [--version | --config <path>]");
                std::process::exit(1)
            }
        }
    }
}
