use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProsvgError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ProsvgError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ProsvgError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(ProsvgError::render("x").to_string().contains("render error:"));
    assert!(ProsvgError::encode("x").to_string().contains("encode error:"));
    assert!(
        ProsvgError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProsvgError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
