//! Splitting a fully-qualified name into registrable root and host label

const MAX_LABEL_LEN: usize = 63;

/// A name split at its registrable domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSplit {
    /// Registrable domain, e.g. `example.com`
    pub root: String,
    /// Labels left of the root, e.g. `_acme-challenge.www`
    pub host: String,
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Split `full` into root domain and host label.
///
/// The root is the registrable domain according to the Public Suffix List.
/// Returns `None` when the name is malformed or has no host part.
pub fn split_domain(full: &str) -> Option<DomainSplit> {
    let name = full.trim().trim_end_matches('.').to_ascii_lowercase();
    if !name.split('.').all(is_valid_label) {
        return None;
    }

    let root = psl::domain_str(&name)?;
    // `root` is a suffix of `name`; anything left of it is the host
    let host = name.strip_suffix(root)?.strip_suffix('.')?;
    if host.is_empty() {
        return None;
    }

    Some(DomainSplit {
        root: root.to_string(),
        host: host.to_string(),
    })
}
