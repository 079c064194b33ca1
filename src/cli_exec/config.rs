use super::*;

pub(super) fn handle_config_command(runtime: &Runtime, command: ConfigCommands) -> Result<()> {
    let store = runtime.open_store()?;
    match command {
        ConfigCommands::Show { json } => {
            let cfg = runtime.config(&store)?;
            if json {
                print_json(&cfg, "config")?;
            } else {
                println!("base_url: {}", cfg.base_url);
                match cfg.timeout_secs {
                    Some(secs) => println!("timeout: {}s", secs),
                    None => println!("timeout: off"),
                }
                println!("state_dir: {}", store.root().display());
            }
        }
        ConfigCommands::SetUrl { url } => {
            let cfg = store.read_config()?.with_base_url(url);
            store.write_config(&cfg)?;
            println!("base_url: {}", cfg.base_url);
        }
        ConfigCommands::SetTimeout { secs } => {
            let mut cfg = store.read_config()?;
            cfg.timeout_secs = secs;
            store.write_config(&cfg)?;
            match secs {
                Some(secs) => println!("timeout: {}s", secs),
                None => println!("timeout: off"),
            }
        }
    }
    Ok(())
}
