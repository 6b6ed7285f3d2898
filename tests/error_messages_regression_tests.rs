//! Exact failure messages for every check family
use layout_assert::session::MISSING_ROOT_MESSAGE;
use layout_assert::{
    Condition, Edge, Element, MarginRange, PageSize, Padding, Rectangle, Session, SizeProperty,
    Units, ValidationFault,
};

fn page() -> PageSize {
    PageSize::new(2000, 1000).expect("page")
}

fn rect(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(x, y, width, height).expect("rectangle")
}

fn under_test() -> Element {
    Element::new(rect(100, 200, 400, 200)).named("under test")
}

fn specifying(x: i32, y: i32, width: i32, height: i32) -> Element {
    Element::new(rect(x, y, width, height)).named("specifying")
}

fn unnamed(x: i32, y: i32, width: i32, height: i32) -> Element {
    Element::new(rect(x, y, width, height))
}

fn messages(session: &mut Session) -> Vec<String> {
    session
        .conclude()
        .messages()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_left_offset_differs_while_right_matches() {
    let other = specifying(105, 200, 395, 200);
    let mut session = Session::for_element(page(), under_test());
    session.is_left_aligned_with(&other).unwrap();
    session.is_right_aligned_with(&other).unwrap();
    assert_eq!(
        messages(&mut session),
        vec!["Element 'under test' has not the same left offset as element 'specifying'"]
    );
}

#[test]
fn test_chunk_offset_uses_indexed_labels() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(100, 200, 400, 200), unnamed(105, 200, 395, 200)],
    );
    session.are_left_aligned().unwrap();
    session.are_right_aligned().unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element #1:[(100,200) - 400x200] has not the same left offset as element #2:[(105,200) - 395x200]"
        ]
    );
}

#[test]
fn test_relative_margin_defaults_to_non_negative() {
    let other = specifying(105, 200, 400, 200);
    let mut session = Session::for_element(page(), under_test());
    session
        .is_right_of_with_margin(&other, MarginRange::default())
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Left element aligned not properly. Expected margin should be greater or equal to 0px. Actual margin is -405px"
        ]
    );
}

#[test]
fn test_relative_margin_range() {
    // 10px gap below the subject
    let below = specifying(100, 410, 400, 50);
    let mut session = Session::for_element(page(), under_test());
    session
        .is_above_with_margin(&below, MarginRange::new(5, 10).unwrap())
        .unwrap();
    session
        .is_above_with_margin(&below, MarginRange::new(20, 30).unwrap())
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Below element aligned not properly. Expected margin should be between 20px and 30px. Actual margin is 10px"
        ]
    );
}

#[test]
fn test_unconstrained_relative_position_reports_alignment() {
    let beside = specifying(520, 210, 100, 100);
    let mut session = Session::for_element(page(), under_test());
    session.is_left_of(&beside).unwrap();
    session.is_above(&beside).unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Right element aligned not properly",
            "Below element aligned not properly",
        ]
    );
}

#[test]
fn test_width_mismatch() {
    let mut session = Session::for_element(page(), under_test());
    session
        .has_equal_width_as(&specifying(105, 200, 405, 200))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' has not the same width as element 'specifying'. Width of 'under test' is 400px. Width of element is 405px"
        ]
    );
}

#[test]
fn test_size_equality_when_difference_expected() {
    let mut session = Session::for_element(page(), under_test());
    session
        .has_different_size_as(&specifying(0, 0, 400, 200))
        .unwrap();
    session
        .has_different_height_as(&specifying(0, 0, 400, 300))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' has the same size as element 'specifying'. Size of 'under test' is 400px x 200px. Size of element is 400px x 200px"
        ]
    );
}

#[test]
fn test_chunk_size_reports_both_sides() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(100, 200, 400, 200), unnamed(105, 200, 405, 200)],
    );
    session.have_same(SizeProperty::Width).unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element #1 has different width. Element width is: [400, 200]",
            "Element #2 has different width. Element width is: [405, 200]",
        ]
    );
}

#[test]
fn test_chunk_same_size_when_difference_expected() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(0, 0, 50, 60), unnamed(100, 0, 50, 70)],
    );
    session.have_different(SizeProperty::Width).unwrap();
    session.have_different(SizeProperty::Height).unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element #1 has same width. Element width is: [50, 60]",
            "Element #2 has same width. Element width is: [50, 70]",
        ]
    );
}

#[test]
fn test_overlap_and_containment_against_distant_container() {
    let container = specifying(1100, 1200, 500, 400);
    let subject = under_test();
    assert!(!subject.rectangle().overlaps(container.rectangle()));

    let mut session = Session::for_element(page(), subject);
    session.is_overlapping(&container).unwrap();
    session.is_not_overlapping(&container).unwrap();
    session.is_inside_of(&container, "specifying").unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' is not overlapped with element 'specifying' but should be",
            "Element 'under test' is not inside of 'specifying'",
        ]
    );
}

#[test]
fn test_overlap_when_separation_expected() {
    let mut session = Session::for_element(page(), under_test());
    session
        .is_not_overlapping(&specifying(105, 200, 395, 200))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec!["Element 'under test' is overlapped with element 'specifying' but should not"]
    );
}

#[test]
fn test_chunk_inside_uses_property_description() {
    let container = specifying(1100, 1200, 500, 400);
    let mut session = Session::for_chunk(page(), vec![unnamed(100, 200, 400, 200)]);
    session.are_inside_of(&container, "specifying").unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'with properties: tag=[null], id=[null], class=[null], text=[], coord=[100,200], size=[400,200]' is not inside of 'specifying'"
        ]
    );
}

#[test]
fn test_padding_lists_all_sides() {
    let container = specifying(1100, 1200, 500, 400);
    let mut session = Session::for_element(page(), under_test());
    session
        .is_inside_of_with_padding(&container, Padding::new(5, 6, 7, 8))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Padding of element 'under test' is incorrect. Expected padding: top[5], right[6], bottom[7], left[8]. Actual padding: top[-1000], right[1100], bottom[1200], left[-1000]"
        ]
    );
}

#[test]
fn test_padding_satisfied() {
    let container = specifying(90, 190, 420, 220);
    let mut session = Session::for_element(page(), under_test());
    session
        .is_inside_of_with_padding(&container, Padding::new(10, 10, 10, 10))
        .unwrap();
    assert!(session.validate());
}

#[test]
fn test_offset_bounds() {
    let mut session = Session::for_element(page(), under_test());
    session.max_offset(190, 2000, 2000, 2000).unwrap();
    session.min_offset(0, 1510, 0, 0).unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Expected top offset of element 'under test' to be less or equal to 190px. Actual top offset is: 200px",
            "Expected right offset of element 'under test' to be greater or equal to 1510px. Actual right offset is: 1500px",
        ]
    );
}

#[test]
fn test_offset_bounds_in_percent() {
    let mut session = Session::for_element(page(), under_test());
    session
        .change_metrics_units_to(Units::Percent)
        .and_then(|s| s.max_offset(10, 100, 100, 100))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec!["Expected top offset of element 'under test' to be less or equal to 100px. Actual top offset is: 200px"]
    );
}

#[test]
fn test_centering() {
    let mut session = Session::for_element(page(), under_test());
    session.is_centered_on_page_horizontally().unwrap();
    session.is_centered_on_page_vertically().unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' has not equal left and right offset. Left offset is 100px, right is 1500px",
            "Element 'under test' has not equal top and bottom offset. Top offset is 200px, bottom is 600px",
        ]
    );
}

#[test]
fn test_dimension_conditions() {
    let mut session = Session::for_element(page(), under_test());
    session.min_width(1000).unwrap();
    session
        .has_width(Condition::between(1000, 2000).unwrap())
        .unwrap();
    session.has_height(Condition::exact(200)).unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Expected width of element 'under test' to be greater or equal to 1000px. Actual width is: 400px",
            "Expected width of element 'under test' to be between 1000px and 2000px. Actual width is: 400px",
        ]
    );
}

#[test]
fn test_chunk_overlap_reports_each_element_once() {
    let mut session = Session::for_chunk(
        page(),
        vec![
            unnamed(0, 0, 100, 100),
            unnamed(50, 50, 100, 100),
            unnamed(60, 60, 10, 10),
        ],
    );
    session.are_not_overlapped_with_each_other().unwrap();
    let verdict = session.conclude();
    assert_eq!(
        verdict.messages(),
        vec!["Elements are overlapped", "Elements are overlapped"]
    );
    let primary = verdict.errors[0].primary.as_ref().unwrap();
    assert_eq!(primary.rectangle, rect(0, 0, 100, 100));
}

#[test]
fn test_missing_root_makes_checks_no_ops() {
    let mut session = Session::new(page(), None);
    session.is_centered_on_page_horizontally().unwrap();
    session.min_width(10_000).unwrap();
    assert_eq!(messages(&mut session), vec![MISSING_ROOT_MESSAGE]);
}

#[test]
fn test_concluded_session_rejects_checks() {
    let mut session = Session::for_element(page(), under_test());
    assert!(session.validate());
    assert_eq!(
        session.min_width(1).unwrap_err(),
        ValidationFault::SessionConcluded
    );
}

#[test]
fn test_empty_comparison_list_is_a_fault() {
    let mut session = Session::for_element(page(), under_test());
    assert!(matches!(
        session.has_same_offset_as(Edge::Left, &[]),
        Err(ValidationFault::EmptyElementList(_))
    ));
}

#[test]
fn test_verdict_serializes_snapshots() {
    let mut session = Session::for_element(page(), under_test());
    session
        .is_left_aligned_with(&specifying(105, 200, 395, 200))
        .unwrap();
    let json = serde_json::to_value(session.conclude()).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["errors"][0]["primary"]["label"], "specifying");
    assert_eq!(json["errors"][0]["secondary"]["rectangle"]["x"], 100);
}

#[test]
fn test_sessions_can_move_between_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<Session>();
}

fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Element {
    Element::new(Rectangle::from_corners(x1, y1, x2, y2).expect("corners"))
}

#[test]
fn test_top_and_bottom_alignment_with_named_element() {
    let mut session = Session::for_element(page(), under_test());
    session
        .is_top_aligned_with(&from_corners(100, 205, 500, 400).named("specifying"))
        .unwrap();
    session
        .is_bottom_aligned_with(&from_corners(100, 200, 500, 405).named("specifying"))
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' has not the same top offset as element 'specifying'",
            "Element 'under test' has not the same bottom offset as element 'specifying'",
        ]
    );
}

#[test]
fn test_top_and_bottom_alignment_with_unnamed_list() {
    let mut session = Session::for_element(page(), under_test());
    session
        .has_same_offset_as(Edge::Top, &[from_corners(100, 205, 500, 400)])
        .unwrap();
    session
        .has_same_offset_as(Edge::Bottom, &[from_corners(100, 200, 500, 405)])
        .unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'under test' has not the same top offset as element 'with properties: tag=[null], id=[null], class=[null], text=[], coord=[100,205], size=[400,195]'",
            "Element 'under test' has not the same bottom offset as element 'with properties: tag=[null], id=[null], class=[null], text=[], coord=[100,200], size=[400,205]'",
        ]
    );
}

#[test]
fn test_chunk_top_and_bottom_alignment() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(100, 200, 400, 200), from_corners(100, 205, 500, 400)],
    );
    session.are_top_aligned().unwrap();
    assert_eq!(
        messages(&mut session),
        vec!["Element #1:[(100,200) - 400x200] has not the same top offset as element #2:[(100,205) - 400x195]"]
    );

    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(100, 200, 400, 200), from_corners(100, 200, 500, 405)],
    );
    session.are_bottom_aligned().unwrap();
    assert_eq!(
        messages(&mut session),
        vec!["Element #1:[(100,200) - 400x200] has not the same bottom offset as element #2:[(100,200) - 400x205]"]
    );
}

#[test]
fn test_chunk_centering_uses_property_description() {
    let mut session = Session::for_chunk(page(), vec![unnamed(100, 200, 400, 200)]);
    session.are_centered_on_page_horizontally().unwrap();
    session.are_centered_on_page_vertically().unwrap();
    assert_eq!(
        messages(&mut session),
        vec![
            "Element 'with properties: tag=[null], id=[null], class=[null], text=[], coord=[100,200], size=[400,200]' has not equal left and right offset. Left offset is 100px, right is 1500px",
            "Element 'with properties: tag=[null], id=[null], class=[null], text=[], coord=[100,200], size=[400,200]' has not equal top and bottom offset. Top offset is 200px, bottom is 600px",
        ]
    );
}

#[test]
fn test_chunk_centering_passes_for_centered_elements() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(800, 400, 400, 200), unnamed(900, 450, 200, 100)],
    );
    session.are_centered_on_page_horizontally().unwrap();
    session.are_centered_on_page_vertically().unwrap();
    assert!(session.validate());
}

#[test]
fn test_chunk_expected_to_overlap() {
    let mut session = Session::for_chunk(
        page(),
        vec![
            unnamed(0, 0, 100, 100),
            unnamed(50, 50, 100, 100),
            unnamed(500, 500, 10, 10),
        ],
    );
    session.are_overlapped_with_each_other().unwrap();
    let verdict = session.conclude();
    // each element is reported once, against the first element it misses
    assert_eq!(
        verdict.messages(),
        vec!["Elements are not overlapped", "Elements are not overlapped"]
    );
    let first = &verdict.errors[0];
    assert_eq!(first.primary.as_ref().unwrap().rectangle, rect(0, 0, 100, 100));
    assert_eq!(first.secondary.as_ref().unwrap().rectangle, rect(500, 500, 10, 10));
    let second = &verdict.errors[1];
    assert_eq!(second.primary.as_ref().unwrap().rectangle, rect(50, 50, 100, 100));
}

#[test]
fn test_chunk_expected_to_overlap_passes() {
    let mut session = Session::for_chunk(
        page(),
        vec![unnamed(0, 0, 100, 100), unnamed(50, 50, 100, 100), unnamed(60, 60, 10, 10)],
    );
    session.are_overlapped_with_each_other().unwrap();
    assert!(session.validate());
}
