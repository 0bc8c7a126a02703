// Container envelope: layout, flag handling, and structural validation.

#[cfg(test)]
mod tests {
    use capsule_core::compression::StrategyRegistry;
    use capsule_core::config::SelectorConfig;
    use capsule_core::headers::{
        decode_container, encode_container, fmt_bytes, parse_header, Container, ContainerFlags,
        ContainerHeader,
    };
    use capsule_core::pipeline::{compress_bytes, decompress_bytes};
    use capsule_core::types::FormatError;

    #[test]
    fn header_layout_is_big_endian() {
        let bytes = encode_container(ContainerFlags::ENCRYPTED, &[0xAA; 0x0102]).unwrap();
        assert_eq!(&bytes[0..4], b"CPSL");
        assert_eq!(bytes[4], 0x02);
        assert_eq!(&bytes[5..9], &[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(bytes.len(), ContainerHeader::LEN + 0x0102);
    }

    #[test]
    fn every_flag_combination_survives() {
        let combos = [
            ContainerFlags::empty(),
            ContainerFlags::STORED,
            ContainerFlags::ENCRYPTED,
            ContainerFlags::STORED | ContainerFlags::ENCRYPTED,
        ];
        for flags in combos {
            let c = Container::new(flags, b"payload bytes".to_vec());
            let bytes = c.encode().unwrap();
            assert_eq!(bytes.len(), c.encoded_len());

            let back = decode_container(&bytes).unwrap();
            assert_eq!(back, c);
            assert_eq!(back.is_stored(), flags.contains(ContainerFlags::STORED));
            assert_eq!(back.is_encrypted(), flags.contains(ContainerFlags::ENCRYPTED));
        }
    }

    #[test]
    fn header_only_view() {
        let bytes = encode_container(ContainerFlags::STORED, b"abc").unwrap();
        let h = parse_header(&bytes[..9]).unwrap();
        assert!(h.is_stored());
        assert!(!h.is_encrypted());
        assert_eq!(h.payload_len, 3);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = encode_container(ContainerFlags::empty(), b"x").unwrap();
        bytes[0] = b'X';
        let err = decode_container(&bytes).unwrap_err();
        assert_eq!(err, FormatError::InvalidMagic { have: *b"XPSL", need: *b"CPSL" });
        assert!(err.to_string().contains("b\"CPSL\""));
    }

    #[test]
    fn non_printable_magic_renders_as_hex() {
        assert_eq!(fmt_bytes(&[0x00, 0xFF, 0x10, 0x20]), "0x00ff1020");
        assert_eq!(fmt_bytes(b"CPSL"), "b\"CPSL\"");
    }

    #[test]
    fn short_buffers_are_rejected() {
        for n in 0..ContainerHeader::LEN {
            let err = decode_container(&b"CPSL\x00\x00\x00\x00\x00"[..n]).unwrap_err();
            assert_eq!(err, FormatError::TooShort { have: n, need: 9 });
        }
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let bytes = encode_container(ContainerFlags::STORED, b"hello").unwrap();
        let err = decode_container(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(err, FormatError::LengthMismatch { declared: 5, actual: 4 });
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode_container(ContainerFlags::STORED, b"hello").unwrap();
        bytes.push(0);
        let err = decode_container(&bytes).unwrap_err();
        assert_eq!(err, FormatError::LengthMismatch { declared: 5, actual: 6 });
    }

    #[test]
    fn reserved_flag_bits_are_rejected() {
        let mut bytes = encode_container(ContainerFlags::STORED, b"hello").unwrap();
        bytes[4] |= 0x84;
        let err = decode_container(&bytes).unwrap_err();
        assert_eq!(err, FormatError::ReservedFlags(0x84));
    }

    #[test]
    fn empty_input_is_a_bare_stored_header() {
        let registry = StrategyRegistry::global();
        let enc = compress_bytes(b"", &SelectorConfig::default(), registry).unwrap();
        assert_eq!(enc.container, b"CPSL\x01\x00\x00\x00\x00".to_vec());
        assert!(enc.algorithm.is_stored());

        let dec = decompress_bytes(&enc.container, registry).unwrap();
        assert!(dec.data.is_empty());
    }
}
