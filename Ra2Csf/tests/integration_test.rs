use pretty_assertions::assert_eq;
use ra2csf::converter::{convert_csf_to_json, convert_json_to_csf};
use ra2csf::prelude::*;
use tempfile::tempdir;

/// Standard 24-byte CSF header: " FSC", version 3, 3 labels, 3 strings, unused, language 0
fn csf_header() -> Vec<u8> {
    let mut header = b" FSC".to_vec();
    for field in [3u32, 3, 3, 0, 0] {
        header.extend_from_slice(&field.to_le_bytes());
    }
    header
}

fn sample_table() -> CsfTable {
    CsfTable {
        header: csf_header(),
        records: vec![
            CsfRecord::new("CONTROLBAR:ToolTipTest", "Hello\\nWorld"),
            CsfRecord::with_extra("Name:E1", "美國大兵", "igisea"),
            CsfRecord::new("Name:E1", "盟軍大兵"),
        ],
    }
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ra2md.csf");

    let table = sample_table();
    write_csf(&path, &table).unwrap();
    let bytes = std::fs::read(&path).unwrap();

    let decoded = read_csf(&path).unwrap();
    assert_eq!(decoded, table);
    assert_eq!(encode_csf_bytes(&decoded).unwrap(), bytes);
    assert!(bytes.starts_with(b" FSC"));
}

#[test]
fn test_csf_to_ini_and_lookup() {
    let dir = tempdir().unwrap();
    let csf_path = dir.path().join("ra2md.csf");
    let ini_path = dir.path().join("ra2md.ini");
    write_csf(&csf_path, &sample_table()).unwrap();

    let steps = std::cell::RefCell::new(Vec::new());
    ra2csf::converter::convert_csf_to_ini_with_progress(
        csf_path.as_path(),
        ini_path.as_path(),
        &IniExportOptions::new(),
        &|p| steps.borrow_mut().push(p.phase),
    )
    .unwrap();

    let text = std::fs::read_to_string(&ini_path).unwrap();
    assert_eq!(
        text,
        "[zh-TW]\nCONTROLBAR:ToolTipTest = Hello\\nWorld\nName:E1 = 盟軍大兵\n\n"
    );
    assert_eq!(steps.borrow().len(), 4);

    let translation = Translation::load(&ini_path, "zh-TW").unwrap();
    assert_eq!(translation.get("Name:E1"), "盟軍大兵");
    assert_eq!(translation.get("Name:E2"), "Name:E2");
    assert!(matches!(
        Translation::load(&ini_path, "en-US"),
        Err(Error::SectionNotFound(_))
    ));
}

#[test]
fn test_json_round_trip_is_byte_stable() {
    let dir = tempdir().unwrap();
    let csf_path = dir.path().join("in.csf");
    let json_path = dir.path().join("in.json");
    let out_path = dir.path().join("out.csf");
    write_csf(&csf_path, &sample_table()).unwrap();

    convert_csf_to_json(&csf_path, &json_path).unwrap();
    convert_json_to_csf(&json_path, &out_path).unwrap();

    assert_eq!(
        std::fs::read(&csf_path).unwrap(),
        std::fs::read(&out_path).unwrap()
    );
}

#[test]
fn test_truncated_file_reports_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.csf");
    let mut bytes = encode_csf_bytes(&sample_table()).unwrap();
    bytes.truncate(bytes.len() - 3);
    std::fs::write(&path, bytes).unwrap();

    assert!(matches!(
        read_csf(&path),
        Err(Error::Format(FormatError::Truncated { .. }))
    ));
}

#[test]
fn test_failed_encode_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keep.csf");
    write_csf(&path, &sample_table()).unwrap();
    let before = std::fs::read(&path).unwrap();

    let mut table = sample_table();
    table.set("Näme:Bad", "x");
    assert!(matches!(
        write_csf(&path, &table),
        Err(Error::Format(FormatError::KeyNotAscii { .. }))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_batch_convert() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("mods").join("yr");
    std::fs::create_dir_all(&nested).unwrap();

    write_csf(dir.path().join("ra2.csf"), &sample_table()).unwrap();
    write_csf(nested.join("ra2md.CSF"), &sample_table()).unwrap();
    std::fs::write(nested.join("bad.csf"), b" LBL\x01\x00").unwrap();
    std::fs::write(nested.join("notes.txt"), b"ignored").unwrap();

    let files = find_csf_files(dir.path()).unwrap();
    assert_eq!(files.len(), 3);

    let options = IniExportOptions::new().with_section("en-US");
    let result = batch_convert_to_ini(&files, &options, |_| {});
    assert_eq!(result.success_count, 2);
    assert_eq!(result.fail_count, 1);
    assert_eq!(result.results.len(), 3);

    let doc = IniDocument::read(nested.join("ra2md.ini")).unwrap();
    assert_eq!(doc.get("en-US", "Name:E1"), Some("盟軍大兵"));
    assert!(!nested.join("bad.ini").exists());
}

#[test]
fn test_find_csf_files_missing_dir() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        find_csf_files(dir.path().join("missing")),
        Err(Error::WalkDirError(_))
    ));
}

#[test]
fn test_translate_and_rewrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ra2md.csf");
    write_csf(&path, &sample_table()).unwrap();

    let mut table = read_csf(&path).unwrap();
    let bracket = |text: &str, _: &str, target: &str| -> Result<String> {
        Ok(format!("[{target}] {text}"))
    };
    let summary = translate_table(&mut table, &bracket, "zh-TW", "en", &|_| {});
    assert_eq!(summary.translated, 3);
    write_csf(&path, &table).unwrap();

    let rewritten = read_csf(&path).unwrap();
    assert_eq!(rewritten.records[0].value, "[en] Hello\\nWorld");
    assert_eq!(rewritten.records[1].extra_value, "igisea");
    assert_eq!(rewritten.header, csf_header());
}

#[test]
fn test_concurrent_decode() {
    let bytes = encode_csf_bytes(&sample_table()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parse_csf_bytes(&bytes).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), sample_table());
        }
    });
}
