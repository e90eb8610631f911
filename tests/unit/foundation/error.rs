use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FilterBoothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FilterBoothError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        FilterBoothError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FilterBoothError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        FilterBoothError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FilterBoothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
