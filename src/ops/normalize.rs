//! Flattens the OPS biblio-search payload into view records.
//!
//! OPS serves XML transcoded to JSON, so any repeated element may arrive as
//! absent, a single object, or an array. Every repeated-element read goes
//! through [`as_items`] so the three shapes are handled in one place.

use serde_json::Value;

/// Flat per-patent summary derived from one exchange document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PatentRecord {
    pub doc_number: String,
    pub country: String,
    pub kind: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub applicants: Vec<String>,
    pub inventors: Vec<String>,
}

/// Normalize a raw search payload into an ordered list of records.
///
/// Missing or non-list document collections yield an empty list, never an
/// error. Document order is preserved; no deduplication.
pub fn normalize(raw: &Value) -> Vec<PatentRecord> {
    let docs = raw
        .get("ops:world-patent-data")
        .and_then(|v| v.get("ops:biblio-search"))
        .and_then(|v| v.get("ops:search-result"))
        .and_then(|v| v.get("exchange-documents"))
        .and_then(|v| v.as_array());

    let Some(docs) = docs else {
        return Vec::new();
    };

    docs.iter()
        .map(|doc| normalize_document(doc.get("exchange-document").unwrap_or(doc)))
        .collect()
}

/// Total hit count reported by OPS, when present. The attribute arrives as
/// a string in the transcoded payload.
pub fn total_result_count(raw: &Value) -> Option<u64> {
    let count = raw
        .get("ops:world-patent-data")?
        .get("ops:biblio-search")?
        .get("@total-result-count")?;
    count
        .as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| count.as_u64())
}

fn normalize_document(ex: &Value) -> PatentRecord {
    let biblio = ex.get("bibliographic-data");
    let parties = biblio.and_then(|b| b.get("parties"));

    let titles = as_items(biblio.and_then(|b| b.get("invention-title")));
    let title = prefer_english(&titles)
        .and_then(text_of)
        .unwrap_or("No Title")
        .to_string();

    let abstracts = as_items(ex.get("abstract"));
    let abstract_text = prefer_english(&abstracts)
        .and_then(|entry| as_items(entry.get("p")).first().copied())
        .and_then(text_of)
        .unwrap_or("No Abstract")
        .to_string();

    let applicants = party_names(
        parties
            .and_then(|p| p.get("applicants"))
            .and_then(|a| a.get("applicant")),
        "applicant-name",
    );
    let inventors = party_names(
        parties
            .and_then(|p| p.get("inventors"))
            .and_then(|i| i.get("inventor")),
        "inventor-name",
    );

    PatentRecord {
        doc_number: attr(ex, "@doc-number"),
        country: attr(ex, "@country"),
        kind: attr(ex, "@kind"),
        title,
        abstract_text,
        applicants,
        inventors,
    }
}

/// The XML-to-JSON transcoding collapses single repeated elements into a
/// bare object: treat {absent/null, single, array} uniformly as a sequence.
fn as_items(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

/// Prefer the entry tagged `@lang == "en"`, else the first entry.
fn prefer_english<'a>(items: &[&'a Value]) -> Option<&'a Value> {
    items
        .iter()
        .find(|entry| entry.get("@lang").and_then(|l| l.as_str()) == Some("en"))
        .or_else(|| items.first())
        .copied()
}

/// Element text lives under `$` in the transcoded payload.
fn text_of(value: &Value) -> Option<&str> {
    value.get("$").and_then(|v| v.as_str())
}

fn attr(value: &Value, name: &str) -> String {
    value
        .get(name)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn party_names(container: Option<&Value>, name_key: &str) -> Vec<String> {
    as_items(container)
        .into_iter()
        .map(|entry| {
            entry
                .get(name_key)
                .and_then(|n| n.get("name"))
                .and_then(text_of)
                .unwrap_or("Unknown")
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(documents: Value) -> Value {
        json!({
            "ops:world-patent-data": {
                "ops:biblio-search": {
                    "@total-result-count": "42",
                    "ops:search-result": {
                        "exchange-documents": documents
                    }
                }
            }
        })
    }

    #[test]
    fn test_single_object_title() {
        let raw = wrap(json!([{
            "exchange-document": {
                "@doc-number": "123", "@country": "EP", "@kind": "A1",
                "bibliographic-data": {
                    "invention-title": {"@lang": "en", "$": "Widget"}
                }
            }
        }]));
        let records = normalize(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Widget");
        assert_eq!(records[0].doc_number, "123");
        assert_eq!(records[0].country, "EP");
        assert_eq!(records[0].kind, "A1");
    }

    #[test]
    fn test_title_prefers_english_regardless_of_position() {
        let raw = wrap(json!([{
            "exchange-document": {
                "bibliographic-data": {
                    "invention-title": [
                        {"@lang": "de", "$": "Gerät"},
                        {"@lang": "en", "$": "Widget"}
                    ]
                }
            }
        }]));
        assert_eq!(normalize(&raw)[0].title, "Widget");
    }

    #[test]
    fn test_title_falls_back_to_first_without_english() {
        let raw = wrap(json!([{
            "exchange-document": {
                "bibliographic-data": {
                    "invention-title": [
                        {"@lang": "de", "$": "Gerät"},
                        {"@lang": "fr", "$": "Appareil"}
                    ]
                }
            }
        }]));
        assert_eq!(normalize(&raw)[0].title, "Gerät");
    }

    #[test]
    fn test_missing_title_and_abstract_fallbacks() {
        let raw = wrap(json!([{"exchange-document": {"bibliographic-data": {}}}]));
        let records = normalize(&raw);
        assert_eq!(records[0].title, "No Title");
        assert_eq!(records[0].abstract_text, "No Abstract");
        assert!(records[0].applicants.is_empty());
        assert!(records[0].inventors.is_empty());
    }

    #[test]
    fn test_abstract_paragraph_shapes() {
        // Single abstract, single paragraph object.
        let raw = wrap(json!([{
            "exchange-document": {
                "abstract": {"@lang": "en", "p": {"$": "A widget."}}
            }
        }]));
        assert_eq!(normalize(&raw)[0].abstract_text, "A widget.");

        // Array of abstracts, paragraph array, English not first.
        let raw = wrap(json!([{
            "exchange-document": {
                "abstract": [
                    {"@lang": "de", "p": [{"$": "Ein Gerät."}]},
                    {"@lang": "en", "p": [{"$": "A widget."}, {"$": "More."}]}
                ]
            }
        }]));
        assert_eq!(normalize(&raw)[0].abstract_text, "A widget.");
    }

    #[test]
    fn test_party_shapes_and_unknown_fallback() {
        let raw = wrap(json!([{
            "exchange-document": {
                "bibliographic-data": {
                    "parties": {
                        "applicants": {
                            "applicant": [
                                {"applicant-name": {"name": {"$": "ACME"}}},
                                {"applicant-name": {}}
                            ]
                        },
                        "inventors": {
                            "inventor": {"inventor-name": {"name": {"$": "Doe J."}}}
                        }
                    }
                }
            }
        }]));
        let records = normalize(&raw);
        assert_eq!(records[0].applicants, vec!["ACME", "Unknown"]);
        assert_eq!(records[0].inventors, vec!["Doe J."]);
    }

    #[test]
    fn test_missing_collection_yields_empty_list() {
        assert!(normalize(&json!({})).is_empty());
        assert!(normalize(&json!({"ops:world-patent-data": {}})).is_empty());
        // A non-array collection is treated as no results.
        let raw = wrap(json!({"exchange-document": {}}));
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn test_document_order_preserved_and_idempotent() {
        let raw = wrap(json!([
            {"exchange-document": {"@doc-number": "1"}},
            {"exchange-document": {"@doc-number": "2"}},
            {"exchange-document": {"@doc-number": "1"}}
        ]));
        let first = normalize(&raw);
        let numbers: Vec<_> = first.iter().map(|r| r.doc_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "1"]);
        assert_eq!(normalize(&raw), first);
    }

    #[test]
    fn test_total_result_count() {
        let raw = wrap(json!([]));
        assert_eq!(total_result_count(&raw), Some(42));
        assert_eq!(total_result_count(&json!({})), None);
    }
}
