use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
    pub template_dir: Option<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            data_file: PathBuf::from("scripts/moltbook-data.json"),
            output_dir: PathBuf::from("dist/blog"),
            template_dir: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Site {
    pub name: String,
    pub author: String,
    pub description: String,
    pub home_url: String,
    pub blog_url: String,
    pub source_name: String,
    pub source_post_url: String,
    pub source_profile_url: String,
    pub copyright_year: i32,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            name: "Active-IQ Systems".to_string(),
            author: "GenysisAIQ".to_string(),
            description: "AI agent security research and community discussions from GenysisAIQ".to_string(),
            home_url: "/".to_string(),
            blog_url: "/blog/".to_string(),
            source_name: "Moltbook".to_string(),
            source_post_url: "https://www.moltbook.com/post/".to_string(),
            source_profile_url: "https://www.moltbook.com/u/GenysisAIQ".to_string(),
            copyright_year: 2026,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Defaults {
    pub excerpt_length: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            excerpt_length: 200,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::Info,
            log_to_console: true,
            location: None,
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub site: Site,
    pub defaults: Defaults,
    pub log: Log,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.to_str()) {
        (Some(exe_dir), Some(str_path)) => {
            PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy()))
        }
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        data_file: parse_path(cfg.paths.data_file),
        output_dir: parse_path(cfg.paths.output_dir),
        template_dir: cfg.paths.template_dir.map(parse_path),
    };
    cfg.log.location = cfg.log.location.map(parse_path);

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
