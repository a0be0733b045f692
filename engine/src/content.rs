use std::collections::HashMap;

/// Builtin scenarios keyed by id. Values are the raw file text; the
/// extension tells the format.
pub fn builtin_scenarios() -> HashMap<&'static str, (&'static str, &'static str)> {
    HashMap::from([
        (
            "skirmish",
            ("skirmish.yaml", include_str!("../content/scenarios/skirmish.yaml")),
        ),
        (
            "lopsided",
            ("lopsided.json", include_str!("../content/scenarios/lopsided.json")),
        ),
    ])
}
