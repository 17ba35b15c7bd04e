use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SeedArtError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SeedArtError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SeedArtError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SeedArtError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
