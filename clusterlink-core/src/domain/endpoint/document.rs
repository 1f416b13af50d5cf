// clusterlink-core/src/domain/endpoint/document.rs

use crate::domain::error::DomainError;
use std::fmt;

/// Address the kernel client must reach the cluster gateway on.
///
/// Only emptiness is rejected. Anything else (including a public address or
/// a typo) is the caller's responsibility and ends up verbatim in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget(String);

impl EndpointTarget {
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(DomainError::EmptyEndpoint);
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A session-configuration document.
///
/// The schema is opaque on purpose: the only thing we know about it is that
/// the gateway host appears as a literal placeholder somewhere in it. Content
/// is kept as raw bytes so comparisons and copies are byte-exact, whatever
/// the encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDocument {
    content: Vec<u8>,
}

impl EndpointDocument {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Number of literal, non-overlapping occurrences of `placeholder`.
    pub fn occurrences(&self, placeholder: &str) -> usize {
        match_offsets(&self.content, placeholder.as_bytes()).len()
    }

    /// Returns a new document where every literal `placeholder` is replaced by the target.
    /// This function is PURE : the receiver is left untouched.
    pub fn retarget(&self, placeholder: &str, target: &EndpointTarget) -> EndpointDocument {
        let needle = placeholder.as_bytes();
        let offsets = match_offsets(&self.content, needle);
        if offsets.is_empty() {
            return self.clone();
        }

        let replacement = target.as_str().as_bytes();
        let mut out = Vec::with_capacity(
            self.content.len() + offsets.len() * replacement.len().saturating_sub(needle.len()),
        );
        let mut cursor = 0;
        for start in offsets {
            out.extend_from_slice(&self.content[cursor..start]);
            out.extend_from_slice(replacement);
            cursor = start + needle.len();
        }
        out.extend_from_slice(&self.content[cursor..]);
        EndpointDocument::new(out)
    }
}

/// Left-to-right, non-overlapping match offsets. An empty needle never matches.
fn match_offsets(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    if needle.is_empty() {
        return offsets;
    }
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..].starts_with(needle) {
            offsets.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    offsets
}

impl From<Vec<u8>> for EndpointDocument {
    fn from(content: Vec<u8>) -> Self {
        Self::new(content)
    }
}

impl From<String> for EndpointDocument {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const SAMPLE: &str = r#"{
  "kernel_python_credentials" : {
    "url": "http://localhost:8998"
  },
  "kernel_scala_credentials" : {
    "url": "http://localhost:8998"
  }
}"#;

    #[test]
    fn test_target_rejects_blank_address() {
        assert!(matches!(
            EndpointTarget::new("   "),
            Err(DomainError::EmptyEndpoint)
        ));
        assert!(matches!(
            EndpointTarget::new(""),
            Err(DomainError::EmptyEndpoint)
        ));
    }

    #[test]
    fn test_target_keeps_garbage_verbatim() -> Result<()> {
        // No host syntax validation: whatever the operator typed is used.
        let target = EndpointTarget::new(" not a host!! ")?;
        assert_eq!(target.as_str(), "not a host!!");
        Ok(())
    }

    #[test]
    fn test_retarget_replaces_every_occurrence() -> Result<()> {
        let doc = EndpointDocument::new(SAMPLE);
        let target = EndpointTarget::new("ip-172-31-58-190.ec2.internal")?;

        let updated = doc.retarget("localhost", &target);

        assert_eq!(doc.occurrences("localhost"), 2);
        assert_eq!(updated.occurrences("localhost"), 0);
        assert_eq!(updated.occurrences("ip-172-31-58-190.ec2.internal"), 2);
        assert!(
            std::str::from_utf8(updated.as_bytes())?
                .contains("http://ip-172-31-58-190.ec2.internal:8998")
        );
        Ok(())
    }

    #[test]
    fn test_retarget_is_pure() -> Result<()> {
        let doc = EndpointDocument::new(SAMPLE);
        let target = EndpointTarget::new("10.0.0.12")?;

        let _ = doc.retarget("localhost", &target);

        assert_eq!(doc.as_bytes(), SAMPLE.as_bytes());
        Ok(())
    }

    #[test]
    fn test_retarget_without_placeholder_is_identity() -> Result<()> {
        let doc = EndpointDocument::new("{\"url\": \"http://10.0.0.1:8998\"}");
        let target = EndpointTarget::new("10.0.0.12")?;

        assert_eq!(doc.retarget("localhost", &target), doc);
        assert_eq!(doc.retarget("", &target), doc);
        Ok(())
    }

    #[test]
    fn test_retarget_leaves_non_utf8_bytes_intact() -> Result<()> {
        let mut raw = vec![0xef, 0xbb, 0xbf];
        raw.extend_from_slice(b"{\"url\": \"http://localhost:8998\", \"tag\": \"");
        raw.extend_from_slice(&[0xff, 0xfe]);
        raw.extend_from_slice(b"\"}");
        let doc = EndpointDocument::new(raw.clone());
        let target = EndpointTarget::new("10.0.0.12")?;

        let updated = doc.retarget("localhost", &target);

        let mut expected = vec![0xef, 0xbb, 0xbf];
        expected.extend_from_slice(b"{\"url\": \"http://10.0.0.12:8998\", \"tag\": \"");
        expected.extend_from_slice(&[0xff, 0xfe]);
        expected.extend_from_slice(b"\"}");
        assert_eq!(updated.as_bytes(), expected.as_slice());
        assert_eq!(doc.as_bytes(), raw.as_slice());
        Ok(())
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let doc = EndpointDocument::new("aaaa");
        assert_eq!(doc.occurrences("aa"), 2);
        assert_eq!(doc.occurrences("aaa"), 1);
        assert_eq!(doc.occurrences(""), 0);
    }
}
