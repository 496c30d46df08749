use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollrigError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollrigError::trigger("x")
            .to_string()
            .contains("trigger error:")
    );
    assert!(
        ScrollrigError::property("x")
            .to_string()
            .contains("property error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollrigError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
