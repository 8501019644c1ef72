use anyhow::{anyhow, Context as AnyhowContext, Result};
use core::fmt;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{env, fs::create_dir_all, fs::write, fs::File, path::Path};
use url::Url;

pub const CONFIG_ENV_VAR: &str = "MFTRIMCFG";
const CONFIG_FILE_NAME: &str = "mftrim_config.yaml";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Config {
    pub active_context: String,
    pub contexts: Vec<Context>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Context {
    pub name: String,
    pub api_url: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn empty() -> Config {
        Config {
            active_context: String::new(),
            contexts: Vec::new(),
        }
    }

    pub fn from(path: Option<&str>) -> Result<Config> {
        let path = eval_config_path(path)?;
        log::info!("Loading configuration file: {}", &path);

        let file = File::open(&path).context(format!(
            "Unable to open configuration file {}. Add a context with `mftrim config add`",
            path
        ))?;
        let config: Config =
            serde_yaml::from_reader(file).context("Invalid configuration file.")?;

        Ok(config)
    }

    /// Adds a context, replacing any existing one with the same name.
    /// The first context added becomes the active one.
    pub fn add_context(&mut self, context: Context) {
        if self.contains_context(&context.name) {
            log::info!("Replacing existing context {}", &context.name);
            self.contexts.retain(|c| c.name != context.name);
        } else if self.contexts.is_empty() {
            self.active_context = context.name.clone();
        }
        self.contexts.push(context);
    }

    pub fn get_context(&self, name: &Option<String>) -> Result<&Context> {
        let name = name.as_deref().unwrap_or(&self.active_context);
        self.contexts
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| anyhow!("Context {} does not exist in config file.", name))
    }

    pub fn contains_context(&self, name: &str) -> bool {
        self.contexts.iter().any(|c| c.name == name)
    }

    pub fn list_contexts(&self) -> Vec<String> {
        self.contexts
            .iter()
            .map(|c| {
                if c.name == self.active_context {
                    format!("{} (active)", c.name)
                } else {
                    c.name.clone()
                }
            })
            .collect()
    }

    pub fn set_active_context(&mut self, name: String) -> Result<()> {
        if self.contains_context(&name) {
            log::info!("Switched active context to: {}", &name);
            self.active_context = name;
            Ok(())
        } else {
            Err(anyhow!("Context {} does not exist in config file.", name))
        }
    }

    pub fn write(&self, path: Option<&str>) -> Result<()> {
        let path = eval_config_path(path)?;
        if let Some(parent) = Path::new(&path).parent() {
            create_dir_all(parent).context("Failed to create parent directory of configuration")?;
        }

        log::info!("Saving config file: {}", &path);
        write(&path, serde_yaml::to_string(&self)?)
            .context(format!("Unable to write config file :{}", path))
    }

    pub fn delete_context(&mut self, name: &str) -> Result<()> {
        if self.contains_context(name) {
            self.contexts.retain(|c| c.name != name);

            if self.active_context == name {
                self.active_context = self
                    .contexts
                    .first()
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
            }
            Ok(())
        } else {
            Err(anyhow!("Context {} does not exist in config file.", name))
        }
    }

    pub fn rename_context(&mut self, name: String, new_name: String) -> Result<()> {
        if self.contains_context(&new_name) {
            Err(anyhow!(
                "Context {} already exists in config file.",
                new_name
            ))
        } else if let Some(ctx) = self.contexts.iter_mut().find(|c| c.name == name) {
            ctx.name = new_name.clone();

            if self.active_context == name {
                self.active_context = new_name;
            }
            Ok(())
        } else {
            Err(anyhow!("Context {} does not exist in config file.", name))
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            serde_yaml::to_string(&self).unwrap_or_else(|_| {
                "Cannot deserialize the config. The file may be corrupted.".to_string()
            })
        )
    }
}

impl Context {
    pub fn new(name: String, api_url: Url) -> Self {
        Context {
            name,
            api_url,
            token: None,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// use the provided config path or `$MFTRIMCFG` value if set
// otherwise will default to $XDG_CONFIG_HOME
// fall back to `$HOME/.config` if XDG var is not set.
fn eval_config_path(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) => Ok(p.to_string()),
        None => match env::var(CONFIG_ENV_VAR) {
            Ok(p) => Ok(p),
            Err(_) => config_dir()
                .map(|dir| dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned())
                .ok_or_else(|| anyhow!("Error accessing config file, please try using --config")),
        },
    }
}
