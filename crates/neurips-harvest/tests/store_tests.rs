//! Dataset store and append-flow tests.

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use neurips_harvest::client::PageClient;
use neurips_harvest::config::Config;
use neurips_harvest::harvest::Harvester;
use neurips_harvest::models::{Paper, PaperStub};
use neurips_harvest::store::DatasetStore;

fn paper(title: &str, year: i32) -> Paper {
    let stub = PaperStub::new(
        title,
        vec!["Prior Author".to_string()],
        format!("https://papers.nips.cc/paper/{year}/{title}.html"),
    )
    .with_year(year);
    Paper::from_stub(stub, format!("Abstract of {title}."))
}

#[test]
fn test_round_trip_is_stable() {
    let dir = TempDir::new().unwrap();
    let store = DatasetStore::new(dir.path().join("neurips.json"));

    let papers = vec![paper("alpha", 1990), paper("beta", 1991)];
    store.save(&papers).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, papers);

    store.save(&loaded).unwrap();
    assert_eq!(store.load().unwrap(), papers);
}

#[test]
fn test_dataset_is_pretty_printed_json_array() {
    let dir = TempDir::new().unwrap();
    let store = DatasetStore::new(dir.path().join("neurips.json"));
    store.save(&vec![paper("alpha", 1990)]).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert!(contents.starts_with('['));
    assert!(contents.contains("\n  "), "expected indented output");
    assert!(contents.contains("\"abstract\""));
}

#[tokio::test]
async fn test_add_appends_harvested_year_after_existing_papers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/2020"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><div class=\"container-fluid\"><ul>\
             <li><a href=\"/paper/2020/new-one.html\">New One</a> <i>N. Author</i></li>\
             <li><a href=\"/paper/2020/new-two.html\">New Two</a> <i>M. Author</i></li>\
             </ul></div></body></html>",
        ))
        .mount(&server)
        .await;
    for href in ["/paper/2020/new-one.html", "/paper/2020/new-two.html"] {
        Mock::given(method("GET"))
            .and(path(href))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><h4>Abstract</h4><p>Fresh.</p></body></html>",
            ))
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let store = DatasetStore::new(dir.path().join("neurips.json"));
    let existing = vec![paper("old-one", 1987), paper("old-two", 1988), paper("old-three", 1989)];
    store.save(&existing).unwrap();

    // The `add` flow: load, harvest one year, append, save.
    let config = Config::for_testing(&server.uri());
    let client = PageClient::new(&config).unwrap();
    let harvester = Harvester::new(client, &config);

    let mut papers = store.load().unwrap();
    let added = harvester.harvest_year(2020).await.unwrap();
    papers.extend(added.clone());
    store.save(&papers).unwrap();

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), existing.len() + added.len());
    assert_eq!(&saved[..existing.len()], &existing[..]);
    assert_eq!(&saved[existing.len()..], &added[..]);
    assert!(saved[existing.len()..].iter().all(|p| p.year == 2020));
}

#[test]
fn test_create_replaces_prior_dataset_wholesale() {
    let dir = TempDir::new().unwrap();
    let store = DatasetStore::new(dir.path().join("neurips.json"));

    store.save(&vec![paper("stale", 1999)]).unwrap();
    store.save(&vec![paper("fresh-one", 1987), paper("fresh-two", 1988)]).unwrap();

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|p| p.title.starts_with("fresh")));
}
