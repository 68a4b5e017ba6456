//! Request → report encoding

use crate::error::{ReportError, Result};
use crate::flags::FlagSet;
use crate::kind::VocabularyKind;
use crate::report::{ErrorReport, RawReportRequest};
use crate::vocabulary::{Catalog, Vocabulary};

/// How a request field that is empty (after space removal) is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyFieldPolicy {
    /// The empty field is one empty token, which no vocabulary defines,
    /// so encoding fails with an unknown identifier error
    #[default]
    Reject,
    /// The empty field encodes as the empty set
    MatchNone,
}

/// Encodes [`RawReportRequest`]s against a catalog
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'c> {
    catalog: &'c Catalog,
    empty_fields: EmptyFieldPolicy,
}

impl<'c> Encoder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            empty_fields: EmptyFieldPolicy::default(),
        }
    }

    /// Set the policy for empty request fields
    #[must_use]
    pub fn empty_fields(self, policy: EmptyFieldPolicy) -> Self {
        Self {
            empty_fields: policy,
            ..self
        }
    }

    /// Encode a request into an unsaved report with an empty message.
    ///
    /// Error classes are checked before resource types, and encoding stops at
    /// the first token that is not in its vocabulary.
    pub fn encode(&self, request: &RawReportRequest) -> Result<ErrorReport> {
        let error_types = self.encode_field(self.catalog.error_classes(), &request.error_classes)?;
        let resource_types =
            self.encode_field(self.catalog.resource_types(), &request.resource_types)?;
        Ok(ErrorReport::new(resource_types, error_types))
    }

    fn encode_field<K: VocabularyKind>(
        &self,
        vocabulary: &Vocabulary<K>,
        field: &str,
    ) -> Result<FlagSet<K>> {
        let compact: String = field.chars().filter(|&c| c != ' ').collect();
        if compact.is_empty() && self.empty_fields == EmptyFieldPolicy::MatchNone {
            return Ok(FlagSet::empty());
        }

        compact.split(',').try_fold(FlagSet::empty(), |set, token| {
            match vocabulary.lookup(token) {
                Some(flag) => Ok(set | flag),
                None => {
                    log::debug!("rejecting unknown {} {token:?}", K::KIND);
                    Err(ReportError::unknown(K::KIND, token))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::IdentifierKind;
    use crate::vocabulary::builtin;

    fn encode(resource_types: &str, error_classes: &str) -> Result<ErrorReport> {
        Encoder::new(builtin().unwrap()).encode(&RawReportRequest::new(resource_types, error_classes))
    }

    #[test]
    fn test_encode_feed_and_article() {
        let report = encode("feed,article", "invalidUrl").unwrap();
        assert_eq!(report.resource_types.bits(), 0b11);
        assert_eq!(report.error_types.bits(), 0b001);
        assert_eq!(report.id, -1);
        assert_eq!(report.message, "");
    }

    #[test]
    fn test_encode_all_error_classes() {
        let report = encode("article", "malformed,noResponse,invalidUrl").unwrap();
        assert_eq!(report.resource_types.bits(), 0b10);
        assert_eq!(report.error_types.bits(), 0b111);
    }

    #[test]
    fn test_spaces_removed_everywhere() {
        let spaced = encode("  feed ,  art icle ", " no Response").unwrap();
        let compact = encode("feed,article", "noResponse").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_only_spaces_are_stripped() {
        let err = encode("feed\t", "malformed").unwrap_err();
        assert_eq!(err.token(), Some("feed\t"));
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        assert_eq!(
            encode("feed,feed,feed", "malformed,malformed").unwrap(),
            encode("feed", "malformed").unwrap()
        );
    }

    #[test]
    fn test_unknown_error_class() {
        let err = encode("feed", "bogusClass").unwrap_err();
        match &err {
            ReportError::UnknownIdentifier { kind, token } => {
                assert_eq!(*kind, IdentifierKind::ErrorClass);
                assert_eq!(token, "bogusClass");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("bogusClass"));
    }

    #[test]
    fn test_unknown_resource_type() {
        let err = encode("feed,podcast", "malformed").unwrap_err();
        assert_eq!(err.to_string(), "No such resource type podcast");
    }

    #[test]
    fn test_error_classes_checked_first() {
        let err = encode("podcast", "bogusClass").unwrap_err();
        assert_eq!(err.to_string(), "No such error class bogusClass");
    }

    #[test]
    fn test_fails_on_first_unknown_token() {
        let err = encode("feed", "first,second").unwrap_err();
        assert_eq!(err.token(), Some("first"));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        assert!(encode("Feed", "malformed").is_err());
        assert!(encode("feed", "invalidurl").is_err());
    }

    #[test]
    fn test_empty_field_rejected_by_default() {
        let err = encode("", "malformed").unwrap_err();
        assert_eq!(err.token(), Some(""));
        assert_eq!(err.to_string(), "No such resource type ");

        let err = encode("feed", "   ").unwrap_err();
        assert_eq!(err.to_string(), "No such error class ");
    }

    #[test]
    fn test_empty_field_matches_none() {
        let encoder = Encoder::new(builtin().unwrap()).empty_fields(EmptyFieldPolicy::MatchNone);
        let report = encoder
            .encode(&RawReportRequest::new(" ", "malformed"))
            .unwrap();
        assert!(report.resource_types.is_empty());
        assert_eq!(report.error_types.bits(), 0b100);

        let report = encoder.encode(&RawReportRequest::default()).unwrap();
        assert!(report.resource_types.is_empty());
        assert!(report.error_types.is_empty());
    }

    #[test]
    fn test_empty_token_inside_list_always_rejected() {
        let encoder = Encoder::new(builtin().unwrap()).empty_fields(EmptyFieldPolicy::MatchNone);
        let err = encoder
            .encode(&RawReportRequest::new("feed,,article", "malformed"))
            .unwrap_err();
        assert_eq!(err.token(), Some(""));

        let err = encoder
            .encode(&RawReportRequest::new("feed,", "malformed"))
            .unwrap_err();
        assert_eq!(err.token(), Some(""));
    }

    #[test]
    fn test_encoding_is_repeatable() {
        let encoder = Encoder::new(builtin().unwrap());
        let request = RawReportRequest::new("article, feed", "noResponse");
        assert_eq!(
            encoder.encode(&request).unwrap(),
            encoder.encode(&request).unwrap()
        );
    }
}
