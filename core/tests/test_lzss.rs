// LZSS codec: tokenization, wire format, and corruption handling.

#[cfg(test)]
mod tests {
    use capsule_core::compression::codecs::lzss::{
        compress, decode, decompress, encode, parse_tokens, probe, serialize_tokens,
    };
    use capsule_core::compression::{Token, LZSS_LOOKAHEAD, LZSS_WINDOW_SIZE};
    use capsule_core::types::FormatError;
    use proptest::prelude::*;

    #[test]
    fn alternating_pair_becomes_literals_then_reference() {
        let input = b"ABABABABAB";
        let tokens = encode(input);
        assert_eq!(
            tokens,
            vec![
                Token::Literal(b'A'),
                Token::Literal(b'B'),
                Token::Reference { distance: 2, length: 8 },
            ]
        );
        assert_eq!(decode(&tokens).unwrap(), input.to_vec());
    }

    #[test]
    fn wire_format_is_flag_prefixed() {
        let tokens = [Token::Literal(b'A'), Token::Reference { distance: 0x0102, length: 7 }];
        assert_eq!(serialize_tokens(&tokens), vec![1, b'A', 0, 0x01, 0x02, 7]);
        assert_eq!(parse_tokens(&[1, b'A', 0, 0x01, 0x02, 7]).unwrap(), tokens.to_vec());
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(encode(b"").is_empty());
        assert!(compress(b"").is_empty());
        assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn overlapping_reference_expands_run() {
        let tokens = [Token::Literal(b'z'), Token::Reference { distance: 1, length: 17 }];
        assert_eq!(decode(&tokens).unwrap(), vec![b'z'; 18]);
    }

    #[test]
    fn references_respect_window_and_lookahead() {
        let mut input = Vec::new();
        for i in 0..6_000u32 {
            input.push((i.wrapping_mul(2_654_435_761) >> 13) as u8 % 7);
        }
        for token in encode(&input) {
            if let Token::Reference { distance, length } = token {
                assert!(distance as usize >= 1 && distance as usize <= LZSS_WINDOW_SIZE);
                assert!(length as usize >= 4 && length as usize <= LZSS_LOOKAHEAD);
            }
        }
        assert_eq!(decompress(&compress(&input)).unwrap(), input);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse_tokens(&[1, b'a', 2, 0, 0]).unwrap_err();
        assert_eq!(err, FormatError::UnknownTokenFlag { flag: 2, offset: 2 });
    }

    #[test]
    fn truncated_literal_is_rejected() {
        let err = decompress(&[1, b'a', 1]).unwrap_err();
        assert_eq!(err, FormatError::TruncatedToken { offset: 2 });
    }

    #[test]
    fn truncated_reference_is_rejected() {
        let err = decompress(&[1, b'a', 0, 0, 1]).unwrap_err();
        assert_eq!(err, FormatError::TruncatedToken { offset: 2 });
    }

    #[test]
    fn reference_before_any_output_is_rejected() {
        let err = decompress(&[0, 0, 1, 4]).unwrap_err();
        assert_eq!(err, FormatError::DistanceOutOfRange { distance: 1, produced: 0 });
    }

    #[test]
    fn zero_distance_is_rejected() {
        let err = decode(&[Token::Literal(b'a'), Token::Reference { distance: 0, length: 4 }])
            .unwrap_err();
        assert_eq!(err, FormatError::DistanceOutOfRange { distance: 0, produced: 1 });
    }

    #[test]
    fn distance_beyond_output_is_rejected() {
        let err = decompress(&[1, b'a', 1, b'b', 0, 0, 3, 4]).unwrap_err();
        assert_eq!(err, FormatError::DistanceOutOfRange { distance: 3, produced: 2 });
    }

    #[test]
    fn probe_only_inspects_leading_tokens() {
        // Two good literals followed by garbage.
        let buf = [1, b'a', 1, b'b', 9, 9, 9];
        assert!(probe(&buf, 2).is_ok());
        assert!(probe(&buf, 3).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_roundtrip_arbitrary(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(decompress(&compress(&data)).unwrap(), data);
        }

        #[test]
        fn prop_roundtrip_low_alphabet(data in proptest::collection::vec(0u8..3, 0..2048)) {
            let tokens = encode(&data);
            prop_assert_eq!(decode(&tokens).unwrap(), data);
        }
    }
}
