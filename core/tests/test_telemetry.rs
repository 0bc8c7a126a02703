// Operation reports and log-line rendering.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use capsule_core::compression::{Algorithm, Marker};
    use capsule_core::telemetry::{OperationLog, OperationMode, OperationReport};
    use chrono::{Local, TimeZone, Utc};

    fn report(mode: OperationMode, algorithm: Algorithm, input_bytes: u64, output_bytes: u64) -> OperationReport {
        OperationReport {
            mode,
            algorithm,
            input: PathBuf::from("in.txt"),
            input_bytes,
            output: PathBuf::from("in.cpsl"),
            output_bytes,
        }
    }

    #[test]
    fn log_line_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let r = report(OperationMode::Compress, Algorithm::from_marker(Marker::Deflate), 200, 50);
        assert_eq!(
            r.to_log_line(&at),
            "[2024-01-02 03:04:05] mode=COMPRESS | alg=DEFLATE | in=in.txt (200 bytes) | out=in.cpsl (50 bytes) | ratio=75.00%"
        );
    }

    #[test]
    fn mode_and_algorithm_labels() {
        let modes = [
            (OperationMode::Compress, "COMPRESS"),
            (OperationMode::Decompress, "DECOMPRESS"),
            (OperationMode::CompressEncrypt, "COMPRESS+ENCRYPT"),
            (OperationMode::DecryptDecompress, "DECRYPT+DECOMPRESS"),
        ];
        for (mode, label) in modes {
            assert_eq!(mode.to_string(), label);
        }
        assert!(OperationMode::CompressEncrypt.is_encrypted());
        assert!(!OperationMode::Decompress.is_encrypted());

        assert_eq!(Algorithm::Stored.to_string(), "STORED");
        assert_eq!(Algorithm::LegacyLzss.to_string(), "LZSS-LEGACY");
        assert_eq!(Algorithm::from_marker(Marker::Lzss).to_string(), "LZSS");
        assert_eq!(Algorithm::from_marker(Marker::Zstd).to_string(), "ZSTD");
    }

    #[test]
    fn ratio_edge_cases() {
        assert_eq!(report(OperationMode::Compress, Algorithm::Stored, 0, 9).ratio_percent(), 0.0);

        let grew = report(OperationMode::Compress, Algorithm::Stored, 10, 19);
        assert!((grew.ratio_percent() + 90.0).abs() < 1e-9);
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert!(grew.to_log_line(&at).ends_with("ratio=-90.00%"));
    }

    #[test]
    fn report_serializes_with_labels() {
        let r = report(OperationMode::DecryptDecompress, Algorithm::LegacyLzss, 4, 8);
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(v["mode"], "DECRYPT+DECOMPRESS");
        assert_eq!(v["algorithm"], "LZSS-LEGACY");
        assert_eq!(v["input_bytes"], 4);
    }

    #[test]
    fn log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = OperationLog::new(dir.path().join("ops.log"));
        let at = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).earliest().unwrap();

        log.append_at(&report(OperationMode::Compress, Algorithm::Stored, 1, 10), &at).unwrap();
        log.append(&report(OperationMode::Decompress, Algorithm::Stored, 10, 1)).unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[2024-06-01 12:00:00] mode=COMPRESS | alg=STORED"));
        assert!(lines[1].contains("mode=DECOMPRESS"));
        assert!(text.ends_with('\n'));
    }
}
