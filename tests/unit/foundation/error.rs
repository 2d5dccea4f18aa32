use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ClampError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ClampError::parse("x").to_string().contains("parse error:"));
    assert!(
        ClampError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}
