use crate::model::config::Config;
use anyhow::Result;

pub trait ConfigRepository {
    fn load(&self) -> Result<Config>;
    fn save(&self, config: &Config) -> Result<()>;
}
