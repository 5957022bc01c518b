//! Reference normalization.
//!
//! A reference renders as `"{type}: ({organization}) {text}"`, with the text
//! linked only when an href resolves.

use crate::feed::Reference;

const DOI_RESOLVER: &str = "https://doi.org/";

/// Display form of a [`Reference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    /// Raw type label, shown as the prefix.
    pub kind: String,
    pub organization: Option<String>,
    pub text: String,
    /// Link target; `None` renders `text` as plain text.
    pub href: Option<String>,
}

impl ReferenceLink {
    pub fn from_reference(reference: &Reference) -> Self {
        let text = reference
            .property("text")
            .unwrap_or(reference.value.as_str())
            .to_string();

        let href = match reference.kind.as_str() {
            "link" => Some(reference.value.clone()),
            "doi" => Some(format!("{}{}", DOI_RESOLVER, reference.value)),
            _ => reference.property("href").map(str::to_string),
        }
        .filter(|href| !href.is_empty());

        Self {
            kind: reference.kind.clone(),
            organization: reference
                .organization
                .clone()
                .filter(|organization| !organization.is_empty()),
            text,
            href,
        }
    }

    /// Text preceding the (possibly linked) reference text.
    pub fn prefix(&self) -> String {
        match &self.organization {
            Some(organization) => format!("{}: ({})", self.kind, organization),
            None => format!("{}:", self.kind),
        }
    }
}

pub fn reference_links(references: &[Reference]) -> Vec<ReferenceLink> {
    references.iter().map(ReferenceLink::from_reference).collect()
}
