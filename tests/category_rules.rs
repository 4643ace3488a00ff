use chrono::Duration;
use folio_core::domain::category::{CategoryId, NewCategory};
use folio_core::domain::errors::DomainError;

mod support;

use support::fixed_now;

#[test]
fn empty_name_is_rejected() {
    for blank in ["", "   ", "\t"] {
        let err = NewCategory::create(blank, fixed_now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
}

#[test]
fn news_is_created_active() {
    let category = NewCategory::create("News", fixed_now())
        .unwrap()
        .into_category(CategoryId::new(1).unwrap());
    assert_eq!(category.category_name.as_str(), "News");
    assert!(!category.is_archived);
    assert!(category.modified_on.is_none());
}

#[test]
fn edit_renames_and_archives() {
    let mut category = NewCategory::create("News", fixed_now())
        .unwrap()
        .into_category(CategoryId::new(1).unwrap());
    let later = fixed_now() + Duration::minutes(1);

    category.update("News - edited", true, later).unwrap();

    assert_eq!(category.category_name.as_str(), "News - edited");
    assert!(category.is_archived);
    assert_eq!(category.modified_on, Some(later));
}

#[test]
fn repeated_edit_is_idempotent_apart_from_timestamp() {
    let mut category = NewCategory::create("News", fixed_now())
        .unwrap()
        .into_category(CategoryId::new(1).unwrap());
    category.update("Politics", true, fixed_now()).unwrap();
    let snapshot = category.clone();

    let later = fixed_now() + Duration::hours(1);
    category.update("Politics", true, later).unwrap();

    assert_eq!(category.category_name, snapshot.category_name);
    assert_eq!(category.is_archived, snapshot.is_archived);
    assert_eq!(category.created_on, snapshot.created_on);
    assert_eq!(category.modified_on, Some(later));
}

#[test]
fn rejected_edit_leaves_category_untouched() {
    let mut category = NewCategory::create("News", fixed_now())
        .unwrap()
        .into_category(CategoryId::new(1).unwrap());
    let before = category.clone();

    assert!(category.update("", true, fixed_now()).is_err());
    assert_eq!(category, before);
}
