//! Validation for the `[[sites]]` list.

use std::collections::HashSet;

use crate::schema::{PwaConfig, SiteOption};

use super::helpers::validate_non_empty;

pub(crate) fn validate_sites(errors: &mut Vec<String>, config: &PwaConfig) {
    if config.sites.is_empty() {
        errors.push("sites must list at least one site".into());
        return;
    }

    let mut seen = HashSet::new();
    for (i, site) in config.sites.iter().enumerate() {
        validate_non_empty(errors, &format!("sites[{i}].label"), &site.label);
        if !(site.url.starts_with("https://") || site.url.starts_with("http://")) {
            errors.push(format!(
                "sites[{i}].url = {:?} must start with http:// or https://",
                site.url
            ));
        }
        if !seen.insert(site.url.as_str()) {
            errors.push(format!("sites[{i}].url = {:?} is listed twice", site.url));
        }
    }
}

/// Pairs `(i, j)` where site `j`'s URL contains site `i`'s URL.
///
/// When the active URL is site `j`'s, both toggles show `on`. Not an error,
/// but worth a warning at load time.
pub fn overlapping_sites(sites: &[SiteOption]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in sites.iter().enumerate() {
        for (j, b) in sites.iter().enumerate() {
            if i != j && !a.url.is_empty() && a.url != b.url && b.url.contains(&a.url) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
