use indoc::indoc;

use ucd_tablegen::{
    mapping::{IdnaMap, MappingRecord, StatusCode},
    Error, Table,
};

const TABLE: &str = indoc! {"
    # IdnaMappingTable.txt
    # Date: 2025-07-22, 19:14:30 GMT

    0000..002C    ; valid                                  # 1.1  <control-0000>..COMMA
    0041          ; mapped     ; 0061                      # 1.1  LATIN CAPITAL LETTER A
    0042          ; mapped     ; 0062                      # 1.1  LATIN CAPITAL LETTER B
    00A0          ; mapped     ; 0020                      # 1.1  NO-BREAK SPACE
    00A1..00A7    ; valid      ;      ; NV8                # 1.1  INVERTED EXCLAMATION MARK..SECTION SIGN
    00A8          ; disallowed                             # 1.1  DIAERESIS
    00AD          ; ignored                                # 1.1  SOFT HYPHEN
    00DF          ; deviation  ; 0073 0073                 # 1.1  LATIN SMALL LETTER SHARP S
    1E9E          ; deviation  ; 0073 0073                 # 5.1  LATIN CAPITAL LETTER SHARP S
    200B          ; ignored                                # 1.1  ZERO WIDTH SPACE
    200C..200D    ; deviation                              # 1.1  ZERO WIDTH NON-JOINER..ZERO WIDTH JOINER
    FA6E..FA6F    ; disallowed                             # NA   <reserved-FA6E>..<reserved-FA6F>
    FA70          ; mapped     ; 4E26                      # 6.1  CJK COMPATIBILITY IDEOGRAPH-FA70
    FD40..FD4F    ; valid      ;      ; NV8                # 14.0 ARABIC LIGATURE RAHIMAHU ALLAAH..
    FD92          ; mapped     ; 0645 062C 062E            # 1.1  ARABIC LIGATURE MEEM WITH JEEM WITH KHAH INITIAL FORM
    FA6C..FA6D    ; disallowed                             # NA   <reserved-FA6C>..<reserved-FA6D>
"};

fn table() -> Table<IdnaMap> {
    Table::<IdnaMap>::from_text(TABLE).unwrap()
}

#[test]
fn ranges_are_strictly_ascending() {
    for pair in table().records().windows(2) {
        assert!(pair[0].code_max < pair[1].code_min, "{pair:?}");
        assert!(pair[0].code_min <= pair[0].code_max);
    }
}

#[test]
fn valid_never_reaches_the_table() {
    let table = table();
    for code in [0x0, 0x2C, 0xDF, 0x1E9E, 0x200C, 0x200D] {
        assert_eq!(table.get(code), None, "U+{code:04X}");
    }
}

#[test]
fn nv8_is_disallowed_and_merged() {
    let table = table();

    // 00A1..00A7 (valid, NV8) runs into 00A8 (disallowed)
    assert_eq!(
        table.get(0xA8),
        Some(&MappingRecord {
            code_min: 0xA1,
            code_max: 0xA8,
            status: StatusCode::Disallowed,
            mapping: vec![],
        })
    );
    assert_eq!(table.get(0xFD40).map(|x| x.status), Some(StatusCode::Disallowed));
}

#[test]
fn out_of_order_input_is_sorted_then_merged() {
    // FA6C..FA6D is listed last but joins FA6E..FA6F
    assert_eq!(
        table().get(0xFA6C),
        Some(&MappingRecord {
            code_min: 0xFA6C,
            code_max: 0xFA6F,
            status: StatusCode::Disallowed,
            mapping: vec![],
        })
    );
}

#[test]
fn different_mappings_stay_apart() {
    let table = table();
    assert_eq!(table.get(0x41).map(|x| x.code_max), Some(0x41));
    assert_eq!(table.get(0x42).map(|x| x.code_min), Some(0x42));
    assert_eq!(
        table.get(0xFD92).map(MappingRecord::slots),
        Some([0x645, 0x62C, 0x62E])
    );
}

#[test]
fn stats_add_up() {
    let stats = table().stats();
    assert_eq!(stats.lines, 16);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.dropped, 4);
    assert_eq!(stats.merged, 2);
    assert_eq!(table().len(), 16 - 4 - 2);
}

#[test]
fn format_error_names_the_line() {
    let text = TABLE.replace("00AD          ; ignored", "00AD          ; ignore");
    let err = Table::<IdnaMap>::from_text(&text).unwrap_err();

    assert!(matches!(err, Error::Format { line: 10, .. }));
    let message = err.to_string();
    assert!(message.starts_with("line 10: unrecognized status \"ignore\": 00AD"));
}
