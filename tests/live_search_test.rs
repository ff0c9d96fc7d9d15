use anyhow::Result;
use beer_live_search::core::widgets::{beer_search, brewery_search};
use beer_live_search::{HttpSearchBackend, Outcome, StalePolicy};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn beers_json() -> serde_json::Value {
    serde_json::json!([
        {"id": "anchor_brewing-anchor_steam", "name": "Anchor Steam", "brewery": "anchor_brewing"},
        {"id": "anchor_brewing-liberty_ale", "name": "Liberty Ale", "brewery": "anchor_brewing"},
        {"id": "bells_brewery-two_hearted_ale", "name": "Two Hearted Ale", "brewery": "bells_brewery"}
    ])
}

#[tokio::test]
async fn test_beer_table_gets_one_row_per_result_in_order() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "A");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(beers_json());
    });

    let search = beer_search(HttpSearchBackend::new(server.base_url()));
    let outcome = search.on_input("A").await;

    api_mock.assert();
    assert_eq!(outcome, Outcome::Applied { rows: 3 });

    let table = search.snapshot().await;
    assert_eq!(table.selector(), "#beer-table");
    let ids: Vec<&str> = table.rows().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            "anchor_brewing-anchor_steam",
            "anchor_brewing-liberty_ale",
            "bells_brewery-two_hearted_ale"
        ]
    );

    let html = table.rows()[2].html();
    assert!(html.contains("<a href=\"/beers/show/bells_brewery-two_hearted_ale\">Two Hearted Ale</a>"));
    assert!(html.contains("<a href=\"/breweries/show/bells_brewery\">To Brewery</a>"));
    assert!(html.contains("href=\"/beers/edit/bells_brewery-two_hearted_ale\">Edit</a>"));
    assert!(html.contains("href=\"/beers/delete/bells_brewery-two_hearted_ale\">Delete</a>"));
    Ok(())
}

#[tokio::test]
async fn test_empty_response_clears_table() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "A");
        then.status(200).json_body(beers_json());
    });
    let empty_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "Zz");
        then.status(200).json_body(serde_json::json!([]));
    });

    let search = beer_search(HttpSearchBackend::new(server.base_url()));
    search.on_input("A").await;
    assert_eq!(search.row_count().await, 3);

    assert_eq!(search.on_input("Zz").await, Outcome::Applied { rows: 0 });
    empty_mock.assert();
    assert_eq!(search.snapshot().await.to_html(), "<tbody></tbody>");
    Ok(())
}

#[tokio::test]
async fn test_empty_value_is_still_searched() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/breweries/search")
            .query_param("value", "");
        then.status(200)
            .json_body(serde_json::json!([{"id": "anchor_brewing", "name": "Anchor Brewing"}]));
    });

    let search = brewery_search(HttpSearchBackend::new(server.base_url()));
    assert_eq!(search.on_input("").await, Outcome::Applied { rows: 1 });
    api_mock.assert();

    let table = search.snapshot().await;
    assert_eq!(table.selector(), "#brewery-table");
    assert_eq!(
        table.rows()[0].html(),
        "<tr><td><a href=\"/beers/show/anchor_brewing\">Anchor Brewing</a></td>\
         <td><a class=\"btn btn-small btn-danger\" href=\"/beers/delete/anchor_brewing\">Delete</a></td></tr>"
    );
    Ok(())
}

#[tokio::test]
async fn test_server_error_leaves_table_unchanged() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "A");
        then.status(200).json_body(beers_json());
    });
    let failing_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "An");
        then.status(500);
    });

    let search = beer_search(HttpSearchBackend::new(server.base_url()));
    search.on_input("A").await;
    let before = search.snapshot().await;

    assert_eq!(search.on_input("An").await, Outcome::Dropped);
    failing_mock.assert();
    assert_eq!(search.snapshot().await, before);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_dropped_silently() -> Result<()> {
    let backend = HttpSearchBackend::new("http://127.0.0.1:9")
        .with_timeout(Some(Duration::from_secs(2)));
    let search = beer_search(backend);

    assert_eq!(search.on_input("A").await, Outcome::Dropped);
    assert_eq!(search.row_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_typing_fires_one_request_per_keystroke() -> Result<()> {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "L");
        then.status(200).json_body(beers_json());
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "Li");
        then.status(200).json_body(serde_json::json!([
            {"id": "anchor_brewing-liberty_ale", "name": "Liberty Ale", "brewery": "anchor_brewing"}
        ]));
    });

    let search = Arc::new(beer_search(HttpSearchBackend::new(server.base_url())));
    let mut field = search.field();
    assert_eq!(field.selector(), "#beer-search");

    for handle in search.type_text(&mut field, "Li") {
        handle.await?;
    }

    first.assert_hits(1);
    second.assert_hits(1);
    assert_eq!(field.value(), "Li");
    Ok(())
}

#[tokio::test]
async fn test_slow_earlier_response_does_not_overwrite_newer_results() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "L");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(beers_json());
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "Li");
        then.status(200).json_body(serde_json::json!([
            {"id": "anchor_brewing-liberty_ale", "name": "Liberty Ale", "brewery": "anchor_brewing"}
        ]));
    });

    let search = Arc::new(beer_search(HttpSearchBackend::new(server.base_url())));
    let mut field = search.field();
    let mut outcomes = Vec::new();
    for handle in search.type_text(&mut field, "Li") {
        outcomes.push(handle.await?);
    }

    assert_eq!(outcomes, vec![Outcome::Stale, Outcome::Applied { rows: 1 }]);
    let table = search.snapshot().await;
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].id(), "anchor_brewing-liberty_ale");
    Ok(())
}

#[tokio::test]
async fn test_overwrite_policy_keeps_last_arrival() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "L");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(beers_json());
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/beers/search")
            .query_param("value", "Li");
        then.status(200).json_body(serde_json::json!([]));
    });

    let search = Arc::new(
        beer_search(HttpSearchBackend::new(server.base_url()))
            .with_stale_policy(StalePolicy::Overwrite),
    );
    let mut field = search.field();
    for handle in search.type_text(&mut field, "Li") {
        handle.await?;
    }

    // 較慢的舊回應最後抵達並覆蓋表格
    assert_eq!(search.row_count().await, 3);
    Ok(())
}
