use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let path = Config::init()?.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));

    Ok(())
}
