use serde::{Deserialize, Serialize};

use crate::traits::SearchHit;

/// One candidate evidence passage from the vector store, normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub id: String,
    pub text: String,
    /// Raw distance from the vector store, >= 0.
    pub distance: f64,
    /// Derived at normalization time: clamp(1 - distance, 0, 1).
    pub confidence: f64,
    pub document_id: String,
    pub document_year: Option<i32>,
    pub document_type: Option<String>,
    pub title: Option<String>,
    pub section: Option<String>,
    pub subsection: Option<String>,
    /// Raw metadata passed through from the store.
    pub metadata: serde_json::Value,
}

impl RetrievedChunk {
    /// Normalize a raw search hit into a chunk.
    ///
    /// Document id and year come from metadata when present; otherwise they
    /// are recovered by parsing ids of the form `<docid>_<year>_chunk<k>`.
    pub fn from_search_hit(hit: SearchHit) -> Self {
        let meta = &hit.metadata;
        let str_field = |key: &str| {
            meta.get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let meta_year = meta
            .get("document_year")
            .or_else(|| meta.get("year"))
            .and_then(|v| v.as_i64())
            .map(|y| y as i32);

        let (parsed_id, parsed_year) = parse_chunk_id(&hit.id);

        let document_id = str_field("document_id").unwrap_or(parsed_id);
        let document_year = meta_year.or(parsed_year);
        let document_type = str_field("document_type").or_else(|| str_field("category"));

        let confidence = (1.0 - hit.distance).clamp(0.0, 1.0);

        Self {
            id: hit.id,
            text: hit.text,
            distance: hit.distance,
            confidence,
            document_id,
            document_year,
            document_type,
            title: str_field("title"),
            section: str_field("section"),
            subsection: str_field("subsection"),
            metadata: hit.metadata,
        }
    }

    /// `documentId_year` key used for precision/recall matching against
    /// relevant-document lists. Falls back to the bare document id when
    /// the chunk carries no year.
    pub fn normalized_document_key(&self) -> String {
        match self.document_year {
            Some(year) => format!("{}_{}", self.document_id, year),
            None => self.document_id.clone(),
        }
    }
}

/// Recover `(document_id, year)` from ids like `rules_2024_chunk3`.
///
/// The year is the last segment that parses as a plausible 4-digit year;
/// trailing `chunk<k>` segments are dropped from the document id.
fn parse_chunk_id(id: &str) -> (String, Option<i32>) {
    let segments: Vec<&str> = id.split('_').collect();
    let mut year = None;
    let mut id_end = segments.len();

    for (i, seg) in segments.iter().enumerate().rev() {
        if seg.starts_with("chunk") && seg[5..].chars().all(|c| c.is_ascii_digit()) {
            id_end = id_end.min(i);
            continue;
        }
        if year.is_none() {
            if let Ok(y) = seg.parse::<i32>() {
                if (1900..=2100).contains(&y) {
                    year = Some(y);
                    id_end = id_end.min(i);
                }
            }
        }
    }

    let document_id = if id_end == 0 {
        id.to_string()
    } else {
        segments[..id_end].join("_")
    };
    (document_id, year)
}
