//! End-to-end checks of page record assembly through the public API.

use chrono::NaiveDate;
use indexer::models::{Config, QueueItem};
use indexer::pipeline::PageAssembler;
use indexer::services::{FixedClock, SitemapIndex, page_hash};

const HOST: &str = "www.consumerfinance.gov";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Owning a Home</title>
    <link rel="stylesheet" href="/wp-content/themes/cfgov/style.css">
</head>
<body>
    <header class="o-header">
        <a class="m-global-search" href="/search/">Search</a>
        <img class="o-header__logo" src="/static/logo.png">
    </header>
    <main class="content">
        <div class="o-well m-list">
            <a href="/owning-a-home/">Start</a>
            <a href="https://www.example.org/">External</a>
            <a>No target</a>
            <img src="/static/house.jpg" alt="House">
            <ul class="m-list__item"><li><a href="/owning-a-home/">Again</a></li></ul>
        </div>
    </main>
    <footer class="o-footer">
        <a href="/privacy/">Privacy</a>
        <img src="/static/footer.png">
    </footer>
</body>
</html>"#;

fn assembler() -> PageAssembler<SitemapIndex, FixedClock> {
    let mut config = Config::default();
    config.crawler.host = HOST.to_string();
    let sitemap: SitemapIndex = ["/owning-a-home/"].into_iter().collect();
    let clock = FixedClock(
        NaiveDate::from_ymd_opt(2019, 11, 4)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap(),
    );
    PageAssembler::new(&config, sitemap, clock).unwrap()
}

fn queue_item() -> QueueItem {
    serde_json::from_value(serde_json::json!({
        "url": format!("https://{HOST}/owning-a-home/"),
        "protocol": "https",
        "host": HOST,
        "port": 443,
        "path": "/owning-a-home/",
        "depth": 1,
        "fetched": true,
        "stateData": {
            "contentType": "text/html; charset=utf-8",
            "code": 200
        }
    }))
    .unwrap()
}

#[test]
fn test_full_page_record() {
    let record = assembler().assemble(&queue_item(), PAGE.as_bytes()).unwrap();

    assert_eq!(record.title, "Owning a Home");
    assert_eq!(
        record.content_links,
        vec!["/owning-a-home/", "https://www.example.org/", "/owning-a-home/"]
    );
    assert_eq!(record.content_images, vec!["/static/house.jpg"]);
    assert_eq!(
        record.meta_tags,
        vec![
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
        ]
    );
    assert_eq!(
        record.components,
        vec!["o-header", "m-global-search", "o-well", "m-list", "o-footer"]
    );
    assert!(record.has_wordpress_content);
    assert_eq!(record.page_hash, page_hash(PAGE.as_bytes()));
    assert_eq!(record.sitemap, "true");
    assert_eq!(record.timestamp, "2019-11-04 14:07:09");
}

#[test]
fn test_record_json_extends_queue_item() {
    let record = assembler().assemble(&queue_item(), PAGE.as_bytes()).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["protocol"], "https");
    assert_eq!(json["port"], 443);
    assert_eq!(json["depth"], 1);
    assert_eq!(json["stateData"]["code"], 200);
    assert_eq!(json["title"], "Owning a Home");
    assert_eq!(json["hasWordPressContent"], true);
    assert_eq!(json["sitemap"], "true");
    for field in [
        "components",
        "contentLinks",
        "contentImages",
        "metaTags",
        "pageHash",
        "timestamp",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn test_identical_input_identical_record() {
    let assembler = assembler();
    let first = assembler.assemble(&queue_item(), PAGE.as_bytes()).unwrap();
    let second = assembler
        .assemble(&queue_item(), PAGE.to_string().as_bytes())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pdf_never_produces_record() {
    let mut item = queue_item();
    item.state_data.as_mut().unwrap().content_type = Some("application/pdf".to_string());
    assert!(assembler().assemble(&item, PAGE.as_bytes()).is_none());
    assert!(assembler().assemble(&item, b"%PDF-1.4").is_none());
}
