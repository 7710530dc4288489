//! Address → map-search URL derivation

use url::Url;

/// Append `?api=1&query=<address>` to `base`, form-encoding the address
/// (spaces become `+`). Pure string work: the address is not checked.
pub fn build_map_search_url(base: &str, address: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .clear()
        .append_pair("api", "1")
        .append_pair("query", address);
    Ok(url.into())
}
