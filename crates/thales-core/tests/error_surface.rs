use thales_core::{ErrorInfo, ThalesError};

#[test]
fn error_payloads_render_code_context_and_hint() {
    let err = ThalesError::Construction(
        ErrorInfo::new("dep-check-budget", "construction dependency checks failed 100 times")
            .with_context("max_attempts", 100)
            .with_hint("loosen the goal or change the seed"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("dep-check-budget"));
    assert!(rendered.contains("max_attempts=100"));
    assert!(rendered.contains("loosen the goal"));
    assert_eq!(err.info().code, "dep-check-budget");
}

#[test]
fn errors_roundtrip_through_serde() {
    let err = ThalesError::Parse(
        ErrorInfo::new("unknown-point", "token names no point in the graph")
            .with_context("token", "zz"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let back: ThalesError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
