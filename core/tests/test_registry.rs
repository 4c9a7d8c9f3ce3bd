// Registry construction invariants and tag lookup.

#[cfg(test)]
mod tests {
    use tagcodec_core::compression::codecs::{deflate, gzip, identity, lz4, snappy, zstd};
    use tagcodec_core::compression::registry::{resolve, standard_tags};
    use tagcodec_core::prelude::*;

    #[test]
    fn empty_registry_is_rejected() {
        let err = Registry::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Empty));
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let err = Registry::new(vec![
            identity::algorithm(),
            deflate::algorithm(),
            deflate::algorithm(),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateTag { tag: tag_ids::DEFLATE }));
    }

    #[test]
    fn registry_without_identity_is_rejected() {
        let err = Registry::new(vec![deflate::algorithm(), gzip::algorithm()]).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingIdentity));
    }

    #[test]
    fn identity_must_come_first() {
        let err = Registry::new(vec![gzip::algorithm(), identity::algorithm()]).unwrap_err();
        assert!(matches!(err, ConfigurationError::IdentityNotFirst { position: 1 }));
    }

    #[test]
    fn identity_only_registry_is_valid() {
        let reg = Registry::new(vec![identity::algorithm()]).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.identity().tag, tag_ids::IDENTITY);
    }

    #[test]
    fn iteration_follows_construction_order() {
        let reg = Registry::new(vec![
            identity::algorithm(),
            zstd::algorithm(),
            snappy::algorithm(),
            lz4::block_algorithm(),
        ])
        .unwrap();
        let order: Vec<u8> = reg.iter().map(|a| a.tag).collect();
        assert_eq!(order, vec![tag_ids::IDENTITY, tag_ids::ZSTD, tag_ids::SNAPPY_FRAMED, tag_ids::LZ4_BLOCK]);
        assert_eq!(reg.tags(), order);
    }

    #[test]
    fn lookup_by_tag() {
        let reg = Registry::from_tags(&[tag_ids::IDENTITY, tag_ids::GZIP]).unwrap();
        assert_eq!(reg.get(tag_ids::GZIP).map(|a| a.name), Some("gzip"));
        assert!(reg.get(tag_ids::DEFLATE).is_none());
    }

    #[test]
    fn from_tags_propagates_unknown_algorithm() {
        let err = Registry::from_tags(&[tag_ids::IDENTITY, 0xEE]).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownAlgorithm { tag: 0xEE }));
        assert!(err.to_string().contains("0xee"));
    }

    #[test]
    fn resolve_matches_tag_enum() {
        for tag in standard_tags() {
            let alg = resolve(tag).unwrap();
            assert_eq!(alg.tag, tag);
            assert_eq!(alg.name, CompressionTag::verify(tag).unwrap().name());
        }
    }

    #[test]
    fn compression_tag_verify_rejects_unassigned() {
        CompressionTag::verify(tag_ids::LZ4_FRAME).unwrap();
        assert!(CompressionTag::verify(0x80).is_err());
    }
}
