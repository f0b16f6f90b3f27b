use apractool::error::Error;
use apractool::validate::validate_name;

#[test]
fn test_accepts_well_formed_names() {
    for name in ["Foo", "NS.Foo", "NS.Sub.Foo", "my_view2", "A.B"] {
        assert!(validate_name(name).is_ok(), "{} should be accepted", name);
    }
}

#[test]
fn test_length_bounds() {
    assert!(validate_name(&"a".repeat(3)).is_ok());
    assert!(validate_name(&"a".repeat(50)).is_ok());

    let too_long = "a".repeat(51);
    for name in ["", "ab", too_long.as_str()] {
        match validate_name(name) {
            Err(Error::InvalidNameError { name: rejected }) => assert_eq!(rejected, name),
            other => panic!("Expected InvalidNameError for '{}', got {:?}", name, other),
        }
    }
}

#[test]
fn test_rejects_foreign_characters() {
    for name in ["Foo-Bar", "Foo Bar", "NS/Foo", "Fóo", "Foo$"] {
        assert!(
            matches!(validate_name(name), Err(Error::InvalidNameError { .. })),
            "{} should be rejected",
            name
        );
    }
}

#[test]
fn test_rejects_trailing_separator() {
    assert!(matches!(validate_name("NS.Foo."), Err(Error::EmptyFileNameError { .. })));
    assert!(matches!(validate_name("..."), Err(Error::EmptyFileNameError { .. })));
}
