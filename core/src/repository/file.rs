use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::trace;

use crate::model::config::Config;
use crate::repository::traits::ConfigRepository;

const DEFAULT_DIR_NAME: &str = ".periodism";
const DEFAULT_FILE_NAME: &str = "config.json";

#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    /// Uses `~/.periodism/config.json` when no base directory is given.
    /// Nothing is created until the first save.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };

        Ok(FileConfigRepository {
            file_path: dir.join(DEFAULT_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<Config> {
        if !self.file_path.exists() {
            trace!(path = %self.file_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed config file {}", self.file_path.display()))?;
        trace!(path = %self.file_path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn save(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.file_path.parent() {
            fs::create_dir_all(dir)?; // Ensure the directory exists
        }
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::OutputFormat;
    use crate::model::period::PeriodType;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("periodism-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = temp_dir("missing");
        let repo = FileConfigRepository::new(Some(dir.clone())).unwrap();
        assert_eq!(repo.load().unwrap(), Config::default());
        assert!(!dir.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = temp_dir("save");
        let repo = FileConfigRepository::new(Some(dir.clone())).unwrap();
        let config = Config {
            default_period: PeriodType::SingleQuarter,
            output: OutputFormat::Json,
        };

        repo.save(&config).unwrap();
        assert_eq!(repo.load().unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_FILE_NAME), "not json").unwrap();

        let repo = FileConfigRepository::new(Some(dir.clone())).unwrap();
        assert!(repo.load().is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
