use super::super::domain::RetrievalHit;

/// Ceiling on distinct source labels taken from one retrieval batch.
pub(crate) const MAX_SOURCES: usize = 10;

/// Ceiling on supporting sources attributed to one symptom.
pub(crate) const MAX_SOURCES_PER_SYMPTOM: usize = 3;

/// Normalize a raw source label for display: drop file extensions,
/// turn separators into spaces, title-case each word.
pub(crate) fn clean_source_name(raw: &str) -> String {
    let stripped = raw.replace(".pdf", "").replace(".txt", "").replace(".md", "");
    let spaced = stripped.replace(['_', '-'], " ");

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Pair each labeled hit's cleaned source name with its content text.
/// Hits without any recognizable label cannot support attribution and
/// are skipped.
pub(crate) fn labeled_sources(hits: &[RetrievalHit]) -> Vec<(String, &str)> {
    hits.iter()
        .filter_map(|hit| {
            hit.source_label()
                .map(|label| (clean_source_name(label), hit.content.as_str()))
        })
        .take(MAX_SOURCES)
        .collect()
}

/// Labels of hits whose content mentions the symptom phrase or any word
/// of it, capped per symptom.
pub(crate) fn relevant_sources(symptom: &str, labeled: &[(String, &str)]) -> Vec<String> {
    let symptom_lower = symptom.to_lowercase();
    let words: Vec<&str> = symptom_lower.split_whitespace().collect();

    let mut relevant: Vec<String> = Vec::new();
    for (label, content) in labeled {
        let content_lower = content.to_lowercase();
        let mentions = content_lower.contains(&symptom_lower)
            || words.iter().any(|word| content_lower.contains(word));

        if mentions && !relevant.contains(label) {
            relevant.push(label.clone());
        }

        if relevant.len() >= MAX_SOURCES_PER_SYMPTOM {
            break;
        }
    }

    relevant
}
