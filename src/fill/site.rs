/// Supported application sites, by registrable domain.
const SITES: [(&str, &str); 6] = [
    ("anz.com.au", "ANZ"),
    ("anz.com", "ANZ"),
    ("nab.com.au", "NAB"),
    ("commbank.com.au", "Commonwealth Bank"),
    ("westpac.com.au", "Westpac"),
    ("americanexpress.com", "American Express"),
];

/// Institution name for a hostname, matching the domain itself or any subdomain.
pub fn detect_site(host: &str) -> Option<&'static str> {
    let host = host.trim().trim_end_matches('.').to_lowercase();

    SITES
        .iter()
        .find(|(domain, _)| host == *domain || host.ends_with(&format!(".{}", domain)))
        .map(|(_, name)| *name)
}

/// Hostname part of a URL (`https://user@host:443/path` -> `host`).
pub fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    let host = host_port.split(':').next()?;

    if host.is_empty() { None } else { Some(host) }
}

pub fn detect_site_for_url(url: &str) -> Option<&'static str> {
    host_of(url).and_then(detect_site)
}
