//! Card grid fetch command.

use std::time::Duration;

use console::style;

use crate::client::CardClient;
use crate::config::Settings;
use crate::models::TravelKind;
use crate::server::render_cards_fragment;

/// Fetch a collection from the server and print its card grid fragment.
pub async fn cmd_cards(settings: &Settings, kind: TravelKind) -> anyhow::Result<()> {
    let client = CardClient::new(
        &settings.server_url,
        Duration::from_secs(settings.request_timeout),
    )?;

    let view = client.fetch(kind).await?;
    eprintln!(
        "{} {} card(s) from {}",
        style("→").cyan(),
        view.card_count(),
        client.cards_url(kind)
    );

    let html = render_cards_fragment(view)?;
    println!("{}", html);
    Ok(())
}
