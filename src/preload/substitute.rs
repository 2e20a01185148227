use crate::types::ParamMap;
use memchr::memchr;

/// Replaces every `:name` token in the declared values with the matching
/// route parameter.
///
/// This is plain substring replacement, so a token embedded in a longer
/// literal (`":id-comments"`) is replaced too. Longer names are substituted
/// first so that `:idx` is not clobbered by `:id`.
pub fn substitute_params(declared: Option<&ParamMap>, route_params: &ParamMap) -> Option<ParamMap> {
    let declared = declared?;

    let mut names: Vec<(&String, &String)> = route_params.iter().collect();
    names.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let substituted = declared
        .iter()
        .map(|(key, value)| {
            let mut value = value.clone();
            for (name, replacement) in &names {
                let token = format!(":{name}");
                if value.contains(&token) {
                    value = value.replace(&token, replacement);
                }
            }
            (key.clone(), value)
        })
        .collect();

    Some(substituted)
}

/// Whether any value still contains a `:`.
///
/// Any leftover colon counts, including ones that came from a route
/// parameter value or were never meant as a placeholder.
pub fn has_unsubstituted_param(params: &ParamMap) -> bool {
    params
        .values()
        .any(|value| memchr(b':', value.as_bytes()).is_some())
}
