use tableview::header::{ColumnMap, ColumnRange, HeaderCell, SortState, parse_span};

#[test]
fn test_colspan_aware_starts() {
    let headers = vec![
        HeaderCell::new("A"),
        HeaderCell::new("B").span(3),
        HeaderCell::new("C"),
    ];
    let map = ColumnMap::build(&headers);

    assert_eq!(map.range(0), Some(ColumnRange::new(0, 1)));
    assert_eq!(map.range(1), Some(ColumnRange::new(1, 3)));
    assert_eq!(map.range(2), Some(ColumnRange::new(4, 1)));
}

#[test]
fn test_unsortable_header_consumes_span() {
    let headers = vec![
        HeaderCell::new("A").span(2).unsortable(),
        HeaderCell::new("B"),
    ];
    let map = ColumnMap::build(&headers);

    assert_eq!(map.range(0), None);
    assert_eq!(map.range(1), Some(ColumnRange::new(2, 1)));
    assert_eq!(map.sortable_headers().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_out_of_range_header() {
    let map = ColumnMap::build(&[HeaderCell::new("A")]);
    assert_eq!(map.range(5), None);
    assert!(ColumnMap::build(&[]).is_empty());
}

#[test]
fn test_zero_span_counts_as_one() {
    let header = HeaderCell::new("A").span(0);
    assert_eq!(header.span, 1);

    assert_eq!(parse_span("3"), 3);
    assert_eq!(parse_span("0"), 1);
    assert_eq!(parse_span("wide"), 1);
    assert_eq!(parse_span(""), 1);
}

#[test]
fn test_range_positions() {
    let range = ColumnRange::new(4, 2);
    assert_eq!(range.positions().collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn test_sort_state_markers() {
    assert_eq!(SortState::default(), SortState::Unsorted);
    assert!(!SortState::Unsorted.is_active());
    assert!(SortState::Descending.is_active());
    assert_eq!(SortState::Ascending.marker(), "▲");
}
