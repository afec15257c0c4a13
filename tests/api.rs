//! End-to-end tests against an in-process mock of the tag catalog
//! endpoint.
//!
//! The mock serves a deterministic 20-tag catalog from the crate's own
//! encoder, so every test exercises the real client, the real HTTP
//! stack, and the real decoder together.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use url::Url;

use barbershop_tags::encode::{encode_query_result, encode_tag_list};
use barbershop_tags::{
    ClientConfig, HttpConfig, RemoteFile, SortOrder, Tag, TagError, TagQuery, TagsClient,
};

const FILE_PAYLOAD: &[u8] = b"ID3\x03rickroll-learning-track";

/// Twenty tags with pairwise-distinct titles, dates, ratings, download
/// counts, and classic indexes, so every sort order has one correct
/// answer.
fn catalog() -> Vec<Tag> {
    (0..20)
        .map(|i| {
            let mut tag = Tag::fixture();
            tag.id = 100 + i as i64;
            tag.title = format!("Tag {:02}", (i * 7) % 20);
            tag.posted = NaiveDate::from_ymd_opt(2020, 1 + (i % 12) as u32, 1 + i as u32)
                .unwrap();
            tag.stamp = NaiveDate::from_ymd_opt(2021, 1, 1 + i as u32)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            tag.rating = ((i * 13) % 50) as f64 / 10.0;
            tag.rating_count = 10 + i as u32;
            tag.downloaded = (((i * 11) % 20) as u32 + 1) * 100;
            tag.classic_index = Some(((i * 3) % 20) as u32 + 1);
            tag
        })
        .collect()
}

fn xml(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

async fn api(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("action").map(String::as_str) == Some("rate") {
        let valid = params.get("id").is_some_and(|s| s.parse::<i64>().is_ok())
            && params
                .get("rating")
                .and_then(|s| s.parse::<u8>().ok())
                .is_some_and(|r| (1..=5).contains(&r));
        return if valid {
            "ok".into_response()
        } else {
            "rating rejected".into_response()
        };
    }

    if let Some(id) = params.get("id") {
        let id: i64 = id.parse().unwrap_or(-1);
        let hits: Vec<Tag> = catalog().into_iter().filter(|t| t.id == id).collect();
        return xml(encode_tag_list(&hits));
    }

    if params.get("q").map(String::as_str) == Some("teapot") {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let mut tags = catalog();
    if let Some(q) = params.get("q") {
        let q = q.to_lowercase();
        tags.retain(|t| t.title.to_lowercase().contains(&q));
    }
    match params.get("Sortby").map(String::as_str) {
        Some("Title") => tags.sort_by(|a, b| a.title.cmp(&b.title)),
        Some("Posted") => tags.sort_by(|a, b| b.posted.cmp(&a.posted)),
        Some("stamp") => tags.sort_by(|a, b| b.stamp.cmp(&a.stamp)),
        Some("Rating") => tags.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        Some("Downloaded") => tags.sort_by(|a, b| b.downloaded.cmp(&a.downloaded)),
        Some("Classic") => tags.sort_by_key(|t| t.classic_index),
        _ => {}
    }

    let available = tags.len() as u32;
    if available == 0 {
        return xml(encode_query_result(0, &[]));
    }

    let start = params
        .get("start")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1)
        .saturating_sub(1);
    let n = params
        .get("n")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let page: Vec<Tag> = tags.into_iter().skip(start).take(n).collect();
    xml(encode_query_result(available, &page))
}

async fn file() -> Response {
    FILE_PAYLOAD.to_vec().into_response()
}

async fn serve() -> SocketAddr {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let app = Router::new()
        .route("/api.php", get(api))
        .route("/files/demo.mp3", get(file));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn test_client(addr: SocketAddr) -> TagsClient {
    let cfg = ClientConfig {
        endpoint: Url::parse(&format!("http://{addr}/api.php")).unwrap(),
        client_name: Some("barbershop-tags-tests".to_string()),
        http: HttpConfig::default(),
    };
    TagsClient::new(cfg).unwrap()
}

#[tokio::test]
async fn fetch_by_id_returns_the_matching_tag() {
    let client = test_client(serve().await);
    let tag = client.get_tag_by_id(105).await.unwrap();
    assert_eq!(tag.id, 105);
    assert!(tag.title.starts_with("Tag "));
    assert!(tag.key.is_some());
    assert_eq!(tag.videos.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn fetch_by_id_on_unknown_id_is_no_tags_found() {
    let client = test_client(serve().await);
    let err = client.get_tag_by_id(999_999).await.unwrap_err();
    assert!(matches!(err, TagError::NoTagsFound));
}

#[tokio::test]
async fn query_surfaces_exactly_the_requested_count() {
    let client = test_client(serve().await);
    let result = client.query(&TagQuery::new().number(15)).await.unwrap();
    assert_eq!(result.tags.len(), 15);
    assert_eq!(result.available, 20);
}

#[tokio::test]
async fn query_start_offset_pages_past_earlier_records() {
    let client = test_client(serve().await);
    let first = client.query(&TagQuery::new().number(10)).await.unwrap();
    let rest = client
        .query(&TagQuery::new().number(10).start_index(15))
        .await
        .unwrap();
    assert_eq!(rest.tags.len(), 5);
    assert_eq!(rest.available, 20);
    assert!(rest.tags.iter().all(|t| !first.tags.contains(t)));
}

#[tokio::test]
async fn empty_result_set_is_no_tags_found() {
    let client = test_client(serve().await);
    let err = client
        .query(&TagQuery::new().search("xyzzy"))
        .await
        .unwrap_err();
    assert!(matches!(err, TagError::NoTagsFound));
}

#[tokio::test]
async fn every_sort_order_comes_back_pre_sorted() {
    let client = test_client(serve().await);
    for order in SortOrder::ALL {
        let result = client
            .query(&TagQuery::new().number(20).sort(order))
            .await
            .unwrap();
        assert_eq!(result.tags.len(), 20, "sort {order:?}");

        let mut resorted = result.tags.clone();
        match order {
            SortOrder::ByTitle => resorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortOrder::ByPosted => resorted.sort_by(|a, b| b.posted.cmp(&a.posted)),
            SortOrder::ByStamp => resorted.sort_by(|a, b| b.stamp.cmp(&a.stamp)),
            SortOrder::ByRating => resorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOrder::ByDownloaded => {
                resorted.sort_by(|a, b| b.downloaded.cmp(&a.downloaded))
            }
            SortOrder::ByClassicIndex => resorted.sort_by_key(|t| t.classic_index),
        }
        // Tag equality is id-based, so this compares record order.
        assert_eq!(resorted, result.tags, "sort {order:?}");
    }
}

#[tokio::test]
async fn rate_succeeds_on_literal_ok_body() {
    let client = test_client(serve().await);
    client.rate(105, 5).await.unwrap();
}

#[tokio::test]
async fn rate_with_any_other_body_is_an_http_error() {
    let client = test_client(serve().await);
    let err = client.rate(105, 9).await.unwrap_err();
    assert!(matches!(err, TagError::Http(_)));
}

#[tokio::test]
async fn non_200_status_is_a_transport_error() {
    let client = test_client(serve().await);
    let err = client
        .query(&TagQuery::new().search("teapot"))
        .await
        .unwrap_err();
    assert!(matches!(err, TagError::Http(_)));
}

#[tokio::test]
async fn remote_file_fetch_populates_the_payload_once() {
    let addr = serve().await;
    let client = test_client(addr);

    let mut file = RemoteFile::new(
        Url::parse(&format!("http://{addr}/files/demo.mp3")).unwrap(),
        None,
    );
    assert!(!file.is_fetched());

    client.fetch_file(&mut file).await.unwrap();
    assert_eq!(file.data.as_deref(), Some(FILE_PAYLOAD));

    // Second fetch is a no-op on an already-populated reference.
    client.fetch_file(&mut file).await.unwrap();
    assert_eq!(file.data.as_deref(), Some(FILE_PAYLOAD));
}

#[tokio::test]
async fn records_survive_the_full_wire_round_trip() {
    let client = test_client(serve().await);
    let expected = &catalog()[3];
    let tag = client.get_tag_by_id(expected.id).await.unwrap();

    assert_eq!(tag.title, expected.title);
    assert_eq!(tag.rating, expected.rating);
    assert_eq!(tag.posted, expected.posted);
    assert_eq!(tag.stamp, expected.stamp);
    assert_eq!(tag.key, expected.key);
    assert_eq!(tag.classic_index, expected.classic_index);
    assert_eq!(tag.sheet_music, expected.sheet_music);
    assert_eq!(tag.videos, expected.videos);
}
