//! End-to-end tests: a real server on a local port, driven by `CardClient`.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use travel_journal::cards::CardsView;
use travel_journal::client::{CardClient, ClientError};
use travel_journal::models::{NewTravel, TravelKind};
use travel_journal::server::{render_cards_fragment, serve_on, AppState};
use travel_journal::store::TravelStore;

async fn start_server(store: TravelStore) -> (String, Arc<TravelStore>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let store = Arc::new(store);
    let state = AppState {
        store: store.clone(),
        assets_dir: std::env::temp_dir(),
    };
    tokio::spawn(serve_on(listener, state));
    (format!("http://{}", addr), store)
}

#[tokio::test]
async fn fetch_seeded_travel_ideas() {
    let (url, _store) = start_server(TravelStore::seeded()).await;
    let client = CardClient::new(&url, Duration::from_secs(5)).unwrap();

    let view = client.fetch(TravelKind::Next).await.unwrap();
    assert_eq!(view.card_count(), 5);
    let CardsView::Grid(grid) = &view else {
        panic!("expected a grid");
    };
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[0].cards[0].title, "Europe");
    assert_eq!(grid.rows[0].cards[1].title, "Las Vegas");

    let html = render_cards_fragment(view).unwrap();
    assert!(html.contains("cardRow2"));
}

#[tokio::test]
async fn fetch_empty_past_travels_gives_empty_state() {
    let (url, _store) = start_server(TravelStore::seeded()).await;
    let client = CardClient::new(&url, Duration::from_secs(5)).unwrap();

    let view = client.fetch(TravelKind::Past).await.unwrap();
    assert!(!view.show_add_button());
    let html = render_cards_fragment(view).unwrap();
    assert!(html.contains("emptyContent"));
    assert!(html.contains("/PastTravelForm"));
}

#[tokio::test]
async fn fetch_sees_added_entries() {
    let (url, store) = start_server(TravelStore::new()).await;
    store
        .add(
            TravelKind::Past,
            NewTravel {
                place: "Marrakesh".to_string(),
                description: "Souks".to_string(),
            },
        )
        .await
        .unwrap();

    let client = CardClient::new(&url, Duration::from_secs(5)).unwrap();
    let view = client.fetch(TravelKind::Past).await.unwrap();
    assert_eq!(view.card_count(), 1);
    assert!(view.show_add_button());
}

#[tokio::test]
async fn fetch_error_status_is_error() {
    let (url, _store) = start_server(TravelStore::seeded()).await;
    // Same server, but card paths resolve under a prefix nothing routes.
    let client = CardClient::new(&format!("{}/journal", url), Duration::from_secs(5)).unwrap();

    match client.fetch(TravelKind::Next).await {
        Err(ClientError::Status { url, status }) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert!(url.ends_with("/journal/TravelIdeasCards"));
        }
        Err(e) => panic!("expected a status error, got {}", e),
        Ok(view) => panic!("expected a status error, got {} cards", view.card_count()),
    }
}
