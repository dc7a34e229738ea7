use crate::dto::products::{OneOrMany, ProductInput};

/// Pre-save hook: a bare `facets.events` label becomes a one-element list.
///
/// Leaves an absent value absent and an existing list untouched, so running
/// it again is a no-op.
pub fn normalize_facets(input: &mut ProductInput) {
    let Some(facets) = input.facets.as_mut() else {
        return;
    };
    if let Some(events) = facets.events.take() {
        facets.events = Some(OneOrMany::Many(events.into_vec()));
    }
}
