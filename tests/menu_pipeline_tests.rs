use pour_over_menu::{
    parse_csv, records_from_text, resolve, visible, CachedSource, Category, FileSource,
    HttpSource, Language, MenuSource, OfflineCache, Record, RecordLoader, UiState,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

// Test fixtures - sample data for testing

const SCENARIO_SHEET: &str = "name,category,is_sold_out\nEthiopia,estate,false\nBrazil,estate,true\n";

fn bundled_sheet() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/data/beans.csv")).unwrap()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

// Tests for loading

#[tokio::test]
async fn test_load_and_filter_sold_out_scenario() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", SCENARIO_SHEET).unwrap();

    let records = RecordLoader::new(FileSource::new(temp_file.path())).load().await;
    assert_eq!(records.len(), 2);

    let shown = visible(&records, &UiState::new(None));
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].get("name"), "Ethiopia");
}

#[tokio::test]
async fn test_load_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bundled_sheet()))
        .mount(&mock_server)
        .await;

    let records = RecordLoader::new(HttpSource::new(mock_server.uri())).load().await;
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].get("name_en"), "Esmeralda Geisha");
    assert_eq!(records[1].get("taste"), "佛手柑, 水蜜桃\\n\"絲滑\"口感");
}

#[tokio::test]
async fn test_http_failure_gives_empty_menu() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let records = RecordLoader::new(HttpSource::new(mock_server.uri())).load().await;
    assert!(records.is_empty());
    assert!(visible(&records, &UiState::new(Some(Language::English))).is_empty());
}

#[tokio::test]
async fn test_offline_copy_used_when_server_fails() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SCENARIO_SHEET))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let source = CachedSource::new(
        HttpSource::new(mock_server.uri()),
        OfflineCache::new(temp_dir.path()),
    );
    let loader = RecordLoader::new(source);

    let live = loader.load().await;
    let offline = loader.load().await;
    assert_eq!(live.len(), 2);
    assert_eq!(live, offline);
    assert!(loader.source().cache().contains(&loader.source().describe()));
}

// Tests for parsing

#[test]
fn test_quoted_fields_round_trip() {
    let rows = vec![
        vec!["name", "note"],
        vec!["Kenya, Nyeri", "says \"wow\"\nand more"],
        vec!["a\r\nb", ",,,"],
    ];
    let text = rows
        .iter()
        .map(|row| row.iter().map(|f| quote(f)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(parse_csv(&text), rows);
}

#[test]
fn test_escaped_quotes_and_embedded_newline() {
    let rows = parse_csv("\"hello, \"\"world\"\"\n\",done\n");
    assert_eq!(rows, vec![vec!["hello, \"world\"", "done"]]);
}

#[test]
fn test_bundled_sheet_skips_comment_header() {
    let records = records_from_text(&bundled_sheet());
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.contains_column("flavor_tags_ja")));
}

// Tests for localization and filtering

#[test]
fn test_flavor_tags_fall_back_to_english() {
    let record: Record = [("flavor_tags_en", "Floral|Citrus"), ("flavor_tags_zh", "")]
        .into_iter()
        .collect();

    assert_eq!(
        resolve(&record, "flavor_tags", Some(Language::Japanese)),
        "Floral|Citrus"
    );

    let state = UiState::new(Some(Language::English)).with_query("cit");
    let records = vec![record];
    assert_eq!(visible(&records, &state).len(), 1);
}

#[test]
fn test_fallback_order_under_missing_language() {
    let both: Record = [("name_en", "Geisha"), ("name_zh", "瑰夏")].into_iter().collect();
    let zh_only: Record = [("name_zh", "瑰夏")].into_iter().collect();

    assert_eq!(resolve(&both, "name", None), "Geisha");
    assert_eq!(resolve(&both, "name", Some(Language::Korean)), "Geisha");
    assert_eq!(resolve(&zh_only, "name", Some(Language::Cantonese)), "瑰夏");
    assert_eq!(resolve(&Record::default(), "name", Some(Language::Korean)), "");
}

#[test]
fn test_sold_out_hidden_for_every_tab_and_query() {
    let records = records_from_text(&bundled_sheet());
    let base = UiState::new(Some(Language::Japanese));

    for category in Category::ALL {
        for query in ["", "brazil", "cocoa", "可可", "1"] {
            let state = base.with_category(category).with_query(query);
            let shown = visible(&records, &state);
            assert!(shown.iter().all(|r| !r.is_sold_out()));
            assert_eq!(shown, visible(&records, &state));
        }
    }
}

#[test]
fn test_order_preserved_and_featured_kept() {
    let records = records_from_text(&bundled_sheet());
    let shown = visible(&records, &UiState::new(None));

    let names: Vec<&str> = shown.iter().map(|r| r.get("name_en")).collect();
    assert_eq!(names, vec!["Yirgacheffe Konga", "Esmeralda Geisha", "Champion Lot"]);
    assert!(shown.iter().any(|r| r.is_featured()));
}

#[test]
fn test_japanese_tags_searchable() {
    let records = records_from_text(&bundled_sheet());
    let state = UiState::new(Some(Language::Japanese)).with_query("ジャスミン");
    let shown = visible(&records, &state);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].get("name_en"), "Yirgacheffe Konga");
}
