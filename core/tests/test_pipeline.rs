// In-memory container operations.

#[cfg(test)]
mod tests {
    use capsule_core::compression::{Algorithm, StrategyRegistry};
    use capsule_core::config::SelectorConfig;
    use capsule_core::headers::{parse_header, ContainerFlags};
    use capsule_core::pipeline::{
        compress_bytes, compress_encrypt_bytes, decompress_bytes, decrypt_decompress_bytes,
        validate_password_bytes,
    };
    use capsule_core::types::{CapsuleError, ErrorKind, FormatError, ModeError};
    use proptest::prelude::*;

    fn registry() -> &'static StrategyRegistry {
        StrategyRegistry::global()
    }

    fn sample() -> Vec<u8> {
        b"in-memory capsule, in-memory capsule, in-memory capsule!".repeat(4)
    }

    #[test]
    fn plain_flags_follow_selection() {
        let enc = compress_bytes(&sample(), &SelectorConfig::default(), registry()).unwrap();
        let h = parse_header(&enc.container).unwrap();
        assert!(!h.is_stored());
        assert!(!h.is_encrypted());
        assert_eq!(h.payload_len as usize, enc.container.len() - 9);
        assert_eq!(enc.container[9], match enc.algorithm {
            Algorithm::Compressed { marker, .. } => marker,
            other => panic!("unexpected {other}"),
        });
    }

    #[test]
    fn encrypted_flags_and_roundtrip() {
        let data = sample();
        let enc = compress_encrypt_bytes(&data, "hunter2", &SelectorConfig::default(), registry()).unwrap();
        let h = parse_header(&enc.container).unwrap();
        assert_eq!(h.flags, ContainerFlags::ENCRYPTED);

        let dec = decrypt_decompress_bytes(&enc.container, "hunter2", registry()).unwrap();
        assert_eq!(dec.data, data);
        assert_eq!(dec.algorithm, enc.algorithm);
    }

    #[test]
    fn mode_mismatch_is_reported() {
        let config = SelectorConfig::default();
        let plain = compress_bytes(&sample(), &config, registry()).unwrap();
        let sealed = compress_encrypt_bytes(&sample(), "pw", &config, registry()).unwrap();

        assert!(matches!(
            decompress_bytes(&sealed.container, registry()),
            Err(CapsuleError::Mode(ModeError::EncryptedContainer))
        ));
        assert!(matches!(
            decrypt_decompress_bytes(&plain.container, "pw", registry()),
            Err(CapsuleError::Mode(ModeError::PlainContainer))
        ));
    }

    #[test]
    fn empty_password_is_rejected_everywhere() {
        let config = SelectorConfig::default();
        let err = compress_encrypt_bytes(&sample(), "", &config, registry()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let sealed = compress_encrypt_bytes(&sample(), "pw", &config, registry()).unwrap();
        assert!(matches!(
            decrypt_decompress_bytes(&sealed.container, "", registry()),
            Err(CapsuleError::EmptyPassword)
        ));
        assert!(!validate_password_bytes(&sealed.container, "", registry()));
    }

    #[test]
    fn wrong_password_is_a_credential_error() {
        let sealed =
            compress_encrypt_bytes(&sample(), "clave123", &SelectorConfig::default(), registry()).unwrap();
        assert!(validate_password_bytes(&sealed.container, "clave123", registry()));
        assert!(!validate_password_bytes(&sealed.container, "wrong", registry()));

        match decrypt_decompress_bytes(&sealed.container, "wrong", registry()) {
            Err(CapsuleError::Credential(FormatError::UnknownMarker(_))) => {}
            other => panic!("expected credential error, got {other:?}"),
        }
    }

    #[test]
    fn header_damage_stays_a_format_error() {
        let mut sealed =
            compress_encrypt_bytes(&sample(), "clave123", &SelectorConfig::default(), registry())
                .unwrap()
                .container;
        sealed.pop();
        let err = decrypt_decompress_bytes(&sealed, "clave123", registry()).unwrap_err();
        assert!(matches!(err, CapsuleError::Format(FormatError::LengthMismatch { .. })));
        assert!(!validate_password_bytes(&sealed, "clave123", registry()));
    }

    #[test]
    fn garbage_is_never_a_valid_password() {
        assert!(!validate_password_bytes(b"", "pw", registry()));
        assert!(!validate_password_bytes(b"CPSL", "pw", registry()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_plain_roundtrip(data in proptest::collection::vec(0u8..8, 0..1024)) {
            let enc = compress_bytes(&data, &SelectorConfig::default(), registry()).unwrap();
            let dec = decompress_bytes(&enc.container, registry()).unwrap();
            prop_assert_eq!(dec.data, data);
            prop_assert_eq!(dec.algorithm, enc.algorithm);
        }

        #[test]
        fn prop_encrypted_roundtrip(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            password in "[a-z0-9]{1,12}",
        ) {
            let enc = compress_encrypt_bytes(&data, &password, &SelectorConfig::default(), registry()).unwrap();
            let dec = decrypt_decompress_bytes(&enc.container, &password, registry()).unwrap();
            prop_assert_eq!(dec.data, data);
        }
    }
}
