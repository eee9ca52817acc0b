use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pexels::Options;

pub const CONFIG_FILE: &str = "config.json";
pub const ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: PathBuf,
    pub query: String,
    pub per_page: u32,
    pub page: u32,
    pub client: Options,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("data.json"),
            query: "high".to_string(),
            per_page: 15,
            page: 1,
            client: Default::default(),
        }
    }
}

impl Config {
    /// Loads `config.json` from `config_folder`, writing the defaults there
    /// first if it does not exist. A `.env` file in the folder is loaded into
    /// the process environment when present.
    pub fn load<P: AsRef<Path>>(config_folder: P) -> io::Result<Self> {
        let config_folder = config_folder.as_ref();

        if !config_folder.exists() {
            fs::create_dir_all(config_folder)?;
        }

        let env_path = config_folder.join(ENV_FILE);
        if env_path.exists() {
            dotenvy::from_path(&env_path).map_err(|err| match err {
                dotenvy::Error::Io(err) => err,

                err => io::Error::new(io::ErrorKind::InvalidData, err),
            })?;
        }

        let config_path = config_folder.join(CONFIG_FILE);
        if !config_path.exists() {
            info!(
                path = %config_path.display(),
                "Writing default configuration, edit it to change the search"
            );

            let config = Config::default();
            let content = serde_json::to_string_pretty(&config)
                .map_err(|err| Into::<io::Error>::into(err))?;

            fs::write(&config_path, &content)?;

            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)?;

        serde_json::from_str(&content).map_err(|err| Into::<io::Error>::into(err))
    }
}
