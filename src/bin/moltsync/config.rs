use std::env;
use std::path::PathBuf;

use moltsync::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(|dir| dir.to_path_buf())) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        Some(path) => path,
        None => {
            println!("No {} found. Using built-in defaults", CFG_FILE_NAME);
            return Ok(Config::default());
        }
    };

    println!("Reading config from {}", config_path.display());
    read_config(&config_path).map_err(|e| e.to_string())
}
