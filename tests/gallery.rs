use chrono::NaiveDate;
use legio::gallery::{
    advance, handle_event, project, Catalog, CategoryFilter, Direction, Event, FilterState, GalleryState, SortKey,
};
use legio::{Category, ContentItem, ItemId, LegioError, NavigationError};

fn pair() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            ItemId(1),
            "Legion Formation",
            Category::Formations,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .with_likes(245),
        ContentItem::new(
            ItemId(2),
            "Authentic Armor",
            Category::Equipment,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .with_likes(189),
    ]
}

fn ids(items: &[&ContentItem]) -> Vec<u64> {
    items.iter().map(|item| item.id.0).collect()
}

#[test]
fn popular_then_search_narrows() {
    let items = pair();

    let all = project(&items, &FilterState::default(), SortKey::Popular);
    assert_eq!(ids(&all), vec![1, 2]);

    let armor = project(&items, &FilterState::new("armor", CategoryFilter::All), SortKey::Popular);
    assert_eq!(ids(&armor), vec![2]);
}

#[test]
fn reprojecting_is_identity() {
    let catalog = Catalog::builtin();
    for key in SortKey::ALL {
        let filter = FilterState::new("", CategoryFilter::All);
        let first: Vec<ContentItem> = project(catalog.items(), &filter, key).into_iter().cloned().collect();
        let second = project(&first, &filter, key);
        assert_eq!(ids(&second), first.iter().map(|i| i.id.0).collect::<Vec<_>>(), "{key}");
    }
}

#[test]
fn stepping_through_everything_comes_back() {
    let catalog = Catalog::builtin();
    let shown = project(catalog.items(), &FilterState::default(), SortKey::Views);
    let start = shown[0].id;

    let mut focus = start;
    for _ in 0..shown.len() {
        focus = advance(&shown, focus, Direction::Next).unwrap();
    }
    assert_eq!(focus, start);

    let last = advance(&shown, start, Direction::Previous).unwrap();
    assert_eq!(last, shown[shown.len() - 1].id);
}

#[test]
fn filtering_out_the_focus_closes_the_lightbox() {
    let mut state = GalleryState::new();
    handle_event(&mut state, &Event::Loaded(Catalog::builtin())).unwrap();
    handle_event(&mut state, &Event::Open(ItemId(2))).unwrap();
    assert!(state.compute_viewmodel().lightbox.is_some());

    handle_event(&mut state, &Event::CategorySelected(CategoryFilter::Only(Category::Education))).unwrap();
    assert_eq!(state.focused(), None);
    assert!(state.compute_viewmodel().lightbox.is_none());

    let err = handle_event(&mut state, &Event::Next).unwrap_err();
    assert!(matches!(err, LegioError::Navigation(NavigationError::NothingFocused)));
}

#[test]
fn opening_outside_projection_is_rejected() {
    let mut state = GalleryState::new();
    handle_event(&mut state, &Event::Loaded(Catalog::builtin())).unwrap();
    handle_event(&mut state, &Event::SearchChanged("armor".to_string())).unwrap();

    let err = handle_event(&mut state, &Event::Open(ItemId(1))).unwrap_err();
    assert!(matches!(
        err,
        LegioError::Navigation(NavigationError::FocusNotInProjection(ItemId(1)))
    ));
}

#[test]
fn catalog_rejects_bad_input() {
    let unknown = r#"[{"id": 1, "title": "Feast", "category": "cooking", "date": "June 2024"}]"#;
    assert!(matches!(Catalog::from_json(unknown), Err(LegioError::Catalog(_))));

    let duplicate = r#"[
        {"id": 4, "title": "A", "category": "events", "date": "2024-06"},
        {"id": 4, "title": "B", "category": "events", "date": "2024-06-15"}
    ]"#;
    assert!(matches!(Catalog::from_json(duplicate), Err(LegioError::Catalog(_))));
}
