//! End-to-end lifecycle: ground a template, execute its navigational path
//! against a mock browser, scrape across a paginated result set, close.

use std::sync::Once;
use trawl::{
    EngineError, GroundedExpression, PathTemplate, SOURCE_URL_ATTRIBUTE, ValueError,
};
use trawl_engine::mock::{MockNavigator, MockPage, MockSession, RecordingQuery};
use trawl_value::mock::MockNode;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A search form leading to two pages of results, the first carrying a
/// next link.
fn search_site() -> MockSession {
    let page_two = MockPage::new("results-2")
        .with_node(MockNode::element("h2", "Result C"))
        .with_node(MockNode::element("h2", "Result D"));
    let page_one = MockPage::new("results-1")
        .with_node(MockNode::element("h2", "Result A"))
        .with_node(MockNode::element("h2", "Result B"))
        .with_node(
            MockNode::element("a", "next")
                .with_attr("rel", "next")
                .with_attr("target", "results-2"),
        )
        .with_target("results-2", page_two);
    let form = MockPage::new("form")
        .with_node(MockNode::element("input", "").with_attr("name", "q").with_attr("target", "results-1"))
        .with_target("results-1", page_one);
    MockSession::new().with_page("http://example.com/search", form)
}

fn search_template() -> PathTemplate {
    PathTemplate::new("http://example.com/search")
        .with_database("queries")
        .with_next_link("next")
        .with_scrape_path("next", "/next-click::a[@rel='next']")
        .with_scrape_path("heading", "/download-click::h2")
}

#[test]
fn grounded_expression_full_lifecycle() {
    init_logging();
    let session = search_site();
    let closes = session.close_counter();

    let mut grounded = GroundedExpression::ground(
        &search_template(),
        "/form-submit::input[@name='q']",
        session,
    );

    let (page, attributes) = grounded.execute_query().expect("navigation should succeed");
    assert_eq!(page.name, "results-1");
    assert_eq!(
        attributes.get(SOURCE_URL_ATTRIBUTE).map(String::as_str),
        Some("http://example.com/search")
    );

    let mut query = RecordingQuery::default();
    let output = grounded
        .scrape_results::<MockNavigator, _>(&page, &attributes, &mut query)
        .expect("scraping should succeed");

    // Both result pages were scraped, in pagination order, with the
    // next-link partitioned out of the data paths.
    assert_eq!(query.scraped, ["results-1", "results-2"]);
    assert!(output.contains("results-1 [heading]"));
    assert!(output.contains("results-2 [heading]"));

    grounded.close();
    grounded.close();
    assert_eq!(closes.get(), 1);
}

#[test]
fn failed_navigation_still_allows_close() {
    init_logging();
    let session = search_site();
    let closes = session.close_counter();

    let mut grounded = GroundedExpression::ground(
        &search_template(),
        // The form page has no <form> element, so this step cannot match.
        "/form-submit::form",
        session,
    );
    let err = grounded.execute_query().unwrap_err();
    assert!(matches!(err, EngineError::Value(ValueError::Cast { .. })));

    grounded.close();
    assert_eq!(closes.get(), 1);
}

#[test]
fn abandoned_expression_releases_session_on_drop() {
    init_logging();
    let session = search_site();
    let closes = session.close_counter();
    {
        let _grounded =
            GroundedExpression::ground(&search_template(), "/form-submit::input", session);
        // Abandoned without execute_query or close.
    }
    assert_eq!(closes.get(), 1);
}
