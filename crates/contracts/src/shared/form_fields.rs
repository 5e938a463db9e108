//! Form field naming shared by every registration form component.
//!
//! Segments like `["performance", "appearances", "0", "participant", "given_name"]`
//! become:
//! - id:   `performance_appearances_0_participant_given_name`
//! - name: `performance[appearances][0][participant][given_name]`

/// DOM id: segments sanitized and joined with `_`
pub fn form_field_id<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| sanitize_id_segment(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Submission name: first segment bare, the rest in brackets
pub fn form_field_name<S: AsRef<str>>(segments: &[S]) -> String {
    let mut iter = segments.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut name = first.as_ref().to_string();
    for segment in iter {
        name.push('[');
        name.push_str(segment.as_ref());
        name.push(']');
    }
    name
}

// "birthdate(3i)" -> "birthdate_3i"
fn sanitize_id_segment(segment: &str) -> String {
    let replaced: String = segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    replaced.trim_matches('_').to_string()
}
