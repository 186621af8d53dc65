use std::time::Duration;

use tableview::config::{ActivationPolicy, PagerMount, TableConfig};
use tableview::error::ConfigError;
use tableview::layout::{PageSize, PageSizeOption, PagerControl, PagerLayout, TemplateRegistry};
use tableview::pager::PageState;

// ============================================================================
// TableConfig
// ============================================================================

#[test]
fn test_defaults() {
    let config = TableConfig::default();
    assert_eq!(config.pager_mount, PagerMount::BeforeTable);
    assert_eq!(config.template, None);
    assert_eq!(config.default_page_size, 10);
    assert_eq!(config.sort_delay_duration(), Duration::from_millis(50));
    assert_eq!(config.activation, ActivationPolicy::LatestWins);
    assert_eq!(config.page_size_options.len(), 4);
}

#[test]
fn test_from_json() {
    let config = TableConfig::from_json(
        r#"{
            "pager_mount": "before_table",
            "template": "compact",
            "page_size_options": [
                { "label": "×5", "size": "5" },
                { "label": "Everything", "size": "all" }
            ],
            "default_page_size": 5,
            "sort_delay_ms": 0,
            "activation": "queue"
        }"#,
    )
    .unwrap();

    assert_eq!(config.template.as_deref(), Some("compact"));
    assert_eq!(config.page_size_options[0].size, PageSize::Rows(5));
    assert_eq!(config.page_size_options[1].size, PageSize::All);
    assert_eq!(config.default_page_size, 5);
    assert_eq!(config.sort_delay_ms, 0);
    assert_eq!(config.activation, ActivationPolicy::Queue);
}

#[test]
fn test_from_json_rejects_bad_page_size_option() {
    let result = TableConfig::from_json(r#"{ "page_size_options": [{ "label": "x", "size": "0" }] }"#);
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn test_from_attributes() {
    let config = TableConfig::from_attributes([
        ("data-pager-id", "pager-slot"),
        ("data-pager-template-id", ""),
        ("class", "wide"),
    ]);
    assert_eq!(config.pager_mount, PagerMount::Container("pager-slot".into()));
    assert_eq!(config.template, None);
}

#[test]
fn test_builder() {
    let config = TableConfig::new()
        .mount("side")
        .template("t")
        .page_size(20)
        .sort_delay(Duration::from_millis(5))
        .activation(ActivationPolicy::Queue);
    assert_eq!(config.pager_mount, PagerMount::Container("side".into()));
    assert_eq!(config.template.as_deref(), Some("t"));
    assert_eq!(config.default_page_size, 20);
    assert_eq!(config.sort_delay_ms, 5);
}

#[test]
fn test_json_roundtrip_of_defaults() {
    let json = serde_json::to_string(&TableConfig::default()).unwrap();
    assert!(json.contains(r#""size":"all""#));
    assert_eq!(TableConfig::from_json(&json).unwrap(), TableConfig::default());
}

// ============================================================================
// Pager Layout
// ============================================================================

#[test]
fn test_page_size_parse() {
    assert_eq!("10".parse::<PageSize>().unwrap(), PageSize::Rows(10));
    assert_eq!("ALL".parse::<PageSize>().unwrap(), PageSize::All);
    assert!(matches!("0".parse::<PageSize>(), Err(ConfigError::InvalidPageSize(_))));
    assert!("-1".parse::<PageSize>().is_err());
}

#[test]
fn test_builtin_layout() {
    let layout = PagerLayout::builtin();
    assert_eq!(layout.controls().len(), 6);
    assert!(layout.has(PagerControl::Display));
    assert!(layout.has(PagerControl::PageSize));
}

#[test]
fn test_parse_layout_errors() {
    assert!(matches!(PagerLayout::parse("   "), Err(ConfigError::EmptyTemplate)));
    assert!(matches!(
        PagerLayout::parse("first jump"),
        Err(ConfigError::UnknownControl(token)) if token == "jump"
    ));
}

#[test]
fn test_render_layout() {
    let state = PageState {
        page_size: 20,
        current_page: 2,
        total_count: 45,
        total_pages: 3,
    };
    let options = PageSizeOption::builtin();
    assert_eq!(PagerLayout::builtin().render(&state, &options), "« ‹ [2/3] › » ×20");

    let custom = PagerLayout::parse("display size").unwrap();
    assert_eq!(custom.render(&PageState { page_size: 7, ..state }, &options), "[2/3] ×7");
}

#[test]
fn test_template_registry() {
    let mut templates = TemplateRegistry::new();
    templates.register("nav", "first last").unwrap();
    assert!(templates.register("bad", "sideways").is_err());

    assert_eq!(templates.resolve(None).unwrap(), PagerLayout::builtin());
    assert_eq!(
        templates.resolve(Some("nav")).unwrap().controls(),
        &[PagerControl::First, PagerControl::Last]
    );
    assert!(matches!(
        templates.resolve(Some("bad")),
        Err(ConfigError::UnknownTemplate(id)) if id == "bad"
    ));
}

#[test]
fn test_error_display() {
    let error = ConfigError::UnknownTemplate("compact".into());
    assert_eq!(error.to_string(), "pager layout template 'compact' is not registered");
}
