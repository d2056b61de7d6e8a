// Version command for reporting the plugin version

use crate::ui;

pub fn version(json: bool) -> anyhow::Result<()> {
    let version = native_market::plugin_version();

    if json {
        ui::line(&serde_json::to_string_pretty(&version)?);
    } else {
        ui::line(&version.version);
    }
    Ok(())
}
