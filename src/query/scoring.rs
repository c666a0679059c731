//! Scoring functions for search operations

/// Inverse document frequency with add-one smoothing
///
/// # Arguments
/// * `total_docs` - Total number of documents in the index
/// * `document_frequency` - How many documents contain the term
///
/// # Returns
/// Weight that discounts terms appearing in many documents. The smoothing
/// keeps a term that appears in every document at weight 1.0 instead of 0,
/// so term frequency still differentiates such matches.
pub fn idf(total_docs: usize, document_frequency: usize) -> f32 {
    if document_frequency == 0 || total_docs == 0 {
        return 0.0;
    }
    1.0 + (total_docs as f32 / document_frequency as f32).ln()
}

/// Per-term contribution to a document's score
pub fn tf_idf(term_frequency: u32, idf: f32) -> f32 {
    term_frequency as f32 * idf
}
