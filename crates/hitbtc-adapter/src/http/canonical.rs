/*
[INPUT]:  ParameterMap (insertion-ordered scalars)
[OUTPUT]: Query-string encoding, byte-exact and order-preserving
[POS]:    HTTP layer - canonicalization shared by URLs, bodies and signatures
[UPDATE]: When the exchange's percent-encoding rules change
*/

use std::borrow::Cow;

use crate::types::ParameterMap;

/// Encode parameters as `k1=v1&k2=v2`.
///
/// Keys keep their insertion order. Keys and values are percent-encoded per
/// RFC 3986: everything except `A-Z a-z 0-9 - _ . ~` is escaped, space
/// included (`%20`). An empty map yields an empty string.
pub fn encode(params: &ParameterMap) -> String {
    let mut out = String::new();
    for (index, (key, value)) in params.iter().enumerate() {
        if index > 0 {
            out.push('&');
        }
        out.push_str(&urlencoding::encode(key));
        out.push('=');
        out.push_str(&urlencoding::encode(&value.to_string()));
    }
    out
}

/// Percent-encode one URL path segment (symbol, currency, id).
///
/// Same escaping as [`encode`], so `/`, `?` and spaces cannot change the
/// signed path.
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
