//! Full-pipeline tests for the search scraper through a stub page source

use async_trait::async_trait;
use ebay_scout::{
    FetchError, FetchPage, ParsingError, ScrapeConfig, ScrapeError, SearchQuery, SearchScraper,
    ebay, search_url,
};
use std::collections::HashMap;

/// Canned response for one URL
enum StubPage {
    Body(String),
    Status(u16),
}

/// Page source backed by a URL → response map; unknown URLs answer 404
struct StubFetcher {
    pages: HashMap<String, StubPage>,
}

impl StubFetcher {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    fn with_body(mut self, url: &str, body: &str) -> Self {
        self.pages
            .insert(url.to_string(), StubPage::Body(body.to_string()));
        self
    }

    fn with_status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), StubPage::Status(status));
        self
    }
}

#[async_trait]
impl FetchPage for StubFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        match self.pages.get(url) {
            Some(StubPage::Body(body)) => Ok(body.clone()),
            Some(StubPage::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

fn scraper_with(fetcher: StubFetcher) -> SearchScraper {
    SearchScraper::with_fetcher(Box::new(fetcher), &ScrapeConfig::default()).unwrap()
}

fn wrapper(name: &str, link: &str, price: &str, image: &str) -> String {
    format!(
        r#"<div class="s-item__wrapper">
             <a class="s-item__link" href="{link}">
               <h3 class="s-item__title">{name}</h3>
             </a>
             <span class="SECONDARY_INFO">Pre-Owned</span>
             <span class="s-item__price">{price}</span>
             <img class="s-item__image-img" src="{image}">
           </div>"#
    )
}

#[tokio::test]
async fn search_extracts_listings_in_page_order() {
    let query = SearchQuery::new("vintage camera").unwrap();
    let page = format!(
        "<html><body>{}{}</body></html>",
        wrapper(
            "Vintage Camera A",
            "https://www.ebay.com/itm/1",
            "$40.00",
            "https://i.ebayimg.com/thumbs/a.jpg"
        ),
        wrapper(
            "Vintage Camera B",
            "https://www.ebay.com/itm/2",
            "$55.00",
            "https://i.ebayimg.com/thumbs/b.jpg"
        ),
    );
    let scraper = scraper_with(StubFetcher::new().with_body(&search_url(&query), &page));

    let results = scraper.search(&query).await.unwrap();

    assert_eq!(results.len(), 2);
    let listings = results.listings();
    assert_eq!(listings[0].name, "Vintage Camera A");
    assert_eq!(listings[0].detail_link, "https://www.ebay.com/itm/1");
    assert_eq!(listings[0].condition.as_deref(), Some("Pre-Owned"));
    assert_eq!(listings[0].price, "$40.00");
    assert_eq!(listings[0].image_url, "https://i.ebayimg.com/thumbs/a.jpg");
    assert_eq!(listings[1].name, "Vintage Camera B");
}

#[tokio::test]
async fn placeholder_image_is_resolved_from_detail_page() {
    let query = SearchQuery::new("drone").unwrap();
    let page = format!(
        "<html><body>{}</body></html>",
        wrapper(
            "Camera Drone",
            "https://www.ebay.com/itm/77",
            "$120.00",
            ebay::PLACEHOLDER_IMAGE
        )
    );
    let detail =
        r#"<html><body><img id="icImg" src="https://i.ebayimg.com/images/real.jpg"></body></html>"#;
    let scraper = scraper_with(
        StubFetcher::new()
            .with_body(&search_url(&query), &page)
            .with_body("https://www.ebay.com/itm/77", detail),
    );

    let results = scraper.search(&query).await.unwrap();

    assert_eq!(
        results.listings()[0].image_url,
        "https://i.ebayimg.com/images/real.jpg"
    );
}

#[tokio::test]
async fn failed_detail_fetch_keeps_placeholder_and_other_listings() {
    let query = SearchQuery::new("drone").unwrap();
    let page = format!(
        "<html><body>{}{}</body></html>",
        wrapper(
            "Lazy Drone",
            "https://www.ebay.com/itm/88",
            "$99.00",
            ebay::PLACEHOLDER_IMAGE
        ),
        wrapper(
            "Eager Drone",
            "https://www.ebay.com/itm/89",
            "$150.00",
            "https://i.ebayimg.com/thumbs/eager.jpg"
        ),
    );
    // No mapping for the detail page: the secondary fetch answers 404.
    let scraper = scraper_with(StubFetcher::new().with_body(&search_url(&query), &page));

    let results = scraper.search(&query).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results.listings()[0].image_url, ebay::PLACEHOLDER_IMAGE);
    assert_eq!(
        results.listings()[1].image_url,
        "https://i.ebayimg.com/thumbs/eager.jpg"
    );
}

#[tokio::test]
async fn detail_page_without_primary_image_keeps_placeholder() {
    let query = SearchQuery::new("drone").unwrap();
    let page = format!(
        "<html><body>{}</body></html>",
        wrapper(
            "Lazy Drone",
            "https://www.ebay.com/itm/90",
            "$99.00",
            ebay::PLACEHOLDER_IMAGE
        )
    );
    let scraper = scraper_with(
        StubFetcher::new()
            .with_body(&search_url(&query), &page)
            .with_body(
                "https://www.ebay.com/itm/90",
                "<html><body><p>Item ended</p></body></html>",
            ),
    );

    let results = scraper.search(&query).await.unwrap();

    assert_eq!(results.listings()[0].image_url, ebay::PLACEHOLDER_IMAGE);
}

#[tokio::test]
async fn non_200_status_is_a_typed_fetch_error() {
    let query = SearchQuery::new("anything").unwrap();
    let scraper = scraper_with(StubFetcher::new().with_status(&search_url(&query), 503));

    let err = scraper.search(&query).await.unwrap_err();
    match err {
        ScrapeError::Fetch(FetchError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected status failure, got: {other}"),
    }
}

#[tokio::test]
async fn search_or_empty_degrades_failures_to_empty_results() {
    let query = SearchQuery::new("anything").unwrap();

    let scraper = scraper_with(StubFetcher::new().with_status(&search_url(&query), 503));
    assert!(scraper.search_or_empty(&query).await.is_empty());

    let scraper = scraper_with(StubFetcher::new().with_body(
        &search_url(&query),
        "<html><body><p>Please sign in</p></body></html>",
    ));
    assert!(scraper.search_or_empty(&query).await.is_empty());
}

#[tokio::test]
async fn page_without_wrappers_is_a_typed_parsing_error() {
    let query = SearchQuery::new("anything").unwrap();
    let scraper = scraper_with(StubFetcher::new().with_body(
        &search_url(&query),
        "<html><body><p>No markup we recognize</p></body></html>",
    ));

    let err = scraper.search(&query).await.unwrap_err();
    assert!(matches!(
        err,
        ScrapeError::Parsing(ParsingError::NoListings { .. })
    ));
}

#[tokio::test]
async fn results_never_exceed_ten_listings() {
    let query = SearchQuery::new("popular item").unwrap();
    let wrappers: String = (0..25)
        .map(|i| {
            wrapper(
                &format!("Item {i}"),
                &format!("https://www.ebay.com/itm/{i}"),
                "$1.00",
                "https://i.ebayimg.com/thumbs/x.jpg",
            )
        })
        .collect();
    let page = format!("<html><body>{wrappers}</body></html>");
    let scraper = scraper_with(StubFetcher::new().with_body(&search_url(&query), &page));

    let results = scraper.search(&query).await.unwrap();

    assert_eq!(results.len(), 10);
    assert_eq!(results.listings()[9].name, "Item 9");
}

#[tokio::test]
async fn price_bounds_reach_the_fetched_url() {
    let query = SearchQuery::new("drone")
        .unwrap()
        .with_price_bounds(Some(100.0), Some(300.0));
    let url = search_url(&query);
    assert!(url.contains("_udlo=100") && url.contains("_udhi=300"));

    let page = format!(
        "<html><body>{}</body></html>",
        wrapper(
            "Budget Drone",
            "https://www.ebay.com/itm/5",
            "$120.00",
            "https://i.ebayimg.com/thumbs/d.jpg"
        )
    );
    let scraper = scraper_with(StubFetcher::new().with_body(&url, &page));

    let results = scraper.search(&query).await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn serialized_results_keep_the_record_shape() {
    let query = SearchQuery::new("camera").unwrap();
    let page = r#"<html><body>
        <div class="s-item__wrapper">
          <a class="s-item__link" href="https://www.ebay.com/itm/3">
            <h3 class="s-item__title">Bare Camera</h3>
          </a>
          <span class="s-item__price">$10.00</span>
          <img class="s-item__image-img" src="https://i.ebayimg.com/thumbs/c.jpg">
        </div>
    </body></html>"#;
    let scraper = scraper_with(StubFetcher::new().with_body(&search_url(&query), page));

    let results = scraper.search(&query).await.unwrap();
    let value = serde_json::to_value(results.listings()).unwrap();

    // condition was absent in the markup, so the key is omitted entirely
    let first = value[0].as_object().unwrap();
    assert!(!first.contains_key("condition"));
    assert_eq!(first["name"], "Bare Camera");
    assert_eq!(first["price"], "$10.00");
}
