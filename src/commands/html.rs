use anyhow::Result;

use crate::commands::load;
use crate::config::Config;
use crate::data_provider::F1DataProvider;
use crate::markup::render_container;
use crate::panel::PanelKind;

/// Fetch a panel once and print the container markup the dashboard embeds
pub async fn run(client: &dyn F1DataProvider, kind: PanelKind, config: &Config) -> Result<()> {
    let loaded = load(client, kind, &config.display()).await;
    print!("{}", render_container(kind, &loaded.content));
    loaded.check()
}
