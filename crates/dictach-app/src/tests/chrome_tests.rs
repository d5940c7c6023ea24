use std::time::Duration;

use dictach_core::{NavigationError, NavigationPort, ScreenId};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::chrome::{ChannelNav, chrome_loop};
use crate::types::{AppEvent, ChromeEvent};

#[tokio::test]
async fn test_nav_queues_chrome_events() {
    let (tx, rx) = kanal::bounded_async::<ChromeEvent>(8);
    let nav = ChannelNav::new(tx);
    let screen = ScreenId::new("word-1-2");

    nav.set_title(&screen, "Spanish / Hola").unwrap();
    nav.pop(&screen).unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        ChromeEvent::SetTitle {
            screen: screen.clone(),
            text: "Spanish / Hola".to_string(),
        }
    );
    assert_eq!(rx.recv().await.unwrap(), ChromeEvent::Pop { screen });
}

#[tokio::test]
async fn test_nav_reports_full_and_closed_queues() {
    let (tx, rx) = kanal::bounded_async::<ChromeEvent>(1);
    let nav = ChannelNav::new(tx);
    let screen = ScreenId::new("dictionary-1");

    nav.set_title(&screen, "one").unwrap();
    assert_eq!(nav.set_title(&screen, "two"), Err(NavigationError::Full));

    drop(rx);
    assert_eq!(nav.pop(&screen), Err(NavigationError::Closed));
}

#[tokio::test]
async fn test_chrome_loop_reports_pops_back_to_app() {
    let (chrome_tx, chrome_rx) = kanal::bounded_async::<ChromeEvent>(8);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();
    let chrome = tokio::spawn(chrome_loop(chrome_rx, app_tx, cancel.clone()));

    let screen = ScreenId::new("word-1-2");
    chrome_tx
        .send(ChromeEvent::Pop {
            screen: screen.clone(),
        })
        .await
        .unwrap();

    let event = timeout(Duration::from_secs(2), app_rx.recv())
        .await
        .expect("pop reported in time")
        .unwrap();
    assert_eq!(event, AppEvent::Popped(screen));

    cancel.cancel();
    let result = timeout(Duration::from_secs(2), chrome).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}
