//! Integration tests for the http_disposition library

use http_disposition::*;

#[test]
fn test_ascii_round_trip() {
    // A printable-ASCII filename survives a full encode/parse cycle
    let names = [
        "plans.pdf",
        "report 2024.txt",
        "this-is-a-very-long-filename-with-many-characters-0123456789.pdf",
        "100% (final).pdf",
    ];

    for name in names {
        let value = attachment(Some(name)).unwrap();
        let parsed = parse_disposition(&value).unwrap();
        assert_eq!(parsed.filename(), Some(name), "round trip of {:?}", name);
        assert_eq!(parsed.disposition_type, DispositionType::Attachment);
        // no extended clause for plain ASCII
        assert!(!value.contains("filename*"), "unexpected filename* in {:?}", value);
    }
}

#[test]
fn test_unicode_round_trip() {
    // The extended parameter carries the exact filename byte-for-byte
    let names = [
        "планы.pdf",
        "€ rates.pdf",
        "«plans».pdf",
        "€'*%().pdf",
        "это-очень-длинное-имя-файла-с-юникод-символами.pdf",
        "測試.pdf",
    ];

    for name in names {
        let value = attachment(Some(name)).unwrap();
        assert!(value.contains("filename*=UTF-8''"), "missing filename* in {:?}", value);

        let parsed = parse_disposition(&value).unwrap();
        assert_eq!(parsed.filename(), Some(name), "round trip of {:?}", name);
        assert_eq!(
            parsed.parameters.get("filename*").map(String::as_str),
            Some(name)
        );
    }
}

#[test]
fn test_fallback_substitution() {
    let value = attachment(Some("€plans.pdf")).unwrap();
    assert_eq!(
        value,
        "attachment; filename=\"?plans.pdf\"; filename*=UTF-8''%E2%82%ACplans.pdf"
    );

    let parsed = parse_disposition(&value).unwrap();
    assert_eq!(
        parsed.parameters.get("filename").map(String::as_str),
        Some("?plans.pdf")
    );
    assert_eq!(parsed.filename(), Some("€plans.pdf"));
}

#[test]
fn test_idempotent_reparse() {
    // Parsing, re-encoding the decoded filename with the same type, and
    // parsing again reaches a fixed point. Fallback loss only ever
    // affects the plain filename field, never filename*.
    let inputs = [
        "attachment; filename=\"plans.pdf\"",
        "inline; filename=\"a b c.txt\"",
        "attachment; filename=\"?????.pdf\"; filename*=UTF-8''%D0%BF%D0%BB%D0%B0%D0%BD%D1%8B.pdf",
    ];

    for input in inputs {
        let first = parse_disposition(input).unwrap();
        let options = FormatOptions {
            disposition_type: first.disposition_type.clone(),
            ..FormatOptions::default()
        };
        let reencoded = format_disposition(first.filename(), &options).unwrap();
        let second = parse_disposition(&reencoded).unwrap();

        assert_eq!(second.disposition_type, first.disposition_type);
        assert_eq!(second.filename(), first.filename());
    }
}

#[test]
fn test_invalid_type_rejected() {
    let options = FormatOptions {
        disposition_type: DispositionType::Ext("inva lid".to_string()),
        ..FormatOptions::default()
    };
    let err = format_disposition(None, &options).unwrap_err();
    assert!(matches!(err, Error::Type(_)));
}

#[test]
fn test_malformed_header_rejected() {
    let err = parse_disposition("attachment; filename=\"unterminated").unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_inline_disposition() {
    let value = inline(Some("picture.png")).unwrap();
    assert_eq!(value, "inline; filename=\"picture.png\"");

    let parsed = parse_disposition(&value).unwrap();
    assert_eq!(parsed.disposition_type, DispositionType::Inline);
    assert_eq!(parsed.filename(), Some("picture.png"));
}

#[test]
fn test_fallback_disabled_round_trip() {
    let options = FormatOptions {
        fallback: Fallback::Disabled,
        ..FormatOptions::default()
    };
    let value = format_disposition(Some("планы.pdf"), &options).unwrap();
    assert!(!value.contains("filename=\""));

    let parsed = parse_disposition(&value).unwrap();
    assert_eq!(parsed.filename(), Some("планы.pdf"));
    assert!(!parsed.parameters.contains_key("filename"));
}

#[test]
fn test_cache_returns_equal_values() {
    let cache = DispositionCache::new();
    let options = FormatOptions::default();

    let first = cache.format(Some("планы.pdf"), &options).unwrap();
    let second = cache.format(Some("планы.pdf"), &options).unwrap();

    assert_eq!(first, second);
    // the second call did not re-run the percent-encoding pass
    assert_eq!(cache.misses(), 1);

    // cached output parses identically to a fresh encode
    assert_eq!(
        parse_disposition(&first).unwrap(),
        parse_disposition(&format_disposition(Some("планы.pdf"), &options).unwrap()).unwrap()
    );
}

#[test]
fn test_concurrent_cache_access() {
    use std::sync::Arc;
    use std::thread;

    let cache = Arc::new(DispositionCache::new());
    let names = ["планы.pdf", "plans.pdf", "€ rates.pdf", "report.txt"];

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                for name in names {
                    let value = cache.format(Some(name), &FormatOptions::default()).unwrap();
                    let parsed = parse_disposition(&value).unwrap();
                    assert_eq!(parsed.filename(), Some(name));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), names.len());
}

#[test]
fn test_concurrent_parsing() {
    use std::thread;

    let inputs = [
        "attachment; filename=\"plans.pdf\"",
        "inline",
        "attachment; filename*=UTF-8''%E2%82%ACplans.pdf",
        "form-data; name=field1; filename=\"a.txt\"",
    ];

    let mut handles = Vec::new();
    for input in inputs {
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                assert!(parse_disposition(input).is_ok());
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_error_handling_chain() {
    // Empty header value
    assert!(parse_disposition("").is_err());

    // Extended value with undecodable bytes
    assert!(matches!(
        parse_disposition("attachment; filename*=UTF-8''%FF%FE"),
        Err(Error::Decode(_))
    ));

    // Unknown charsets are a grammar failure, not a decode failure
    assert!(matches!(
        parse_disposition("attachment; filename*=KOI8-R''abc"),
        Err(Error::Format(_))
    ));
}
