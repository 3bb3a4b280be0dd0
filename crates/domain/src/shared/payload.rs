use std::collections::BTreeMap;

/// Filter fields sent verbatim as query parameters. Ordered so the rendered
/// query string is stable.
pub type Query = BTreeMap<String, String>;

/// A company record as an untyped JSON object. No schema is enforced on the
/// client, the server validates it.
pub type Record = serde_json::Map<String, serde_json::Value>;
