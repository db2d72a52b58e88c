use sms_extract::{LineClass, classify};

#[test]
fn test_message_header() {
    let class = classify("Location 12, folder \"Inbox\", phone memory");

    assert_eq!(
        class,
        LineClass::MessageHeader {
            location: "12".into(),
            folder: "Inbox".into(),
        }
    );
}

#[test]
fn test_contact_header() {
    let class = classify("Memory SM, Location 3");

    assert_eq!(
        class,
        LineClass::ContactHeader {
            bank: "SM".into(),
            location: "3".into(),
        }
    );
}

#[test]
fn test_contact_header_empty_bank() {
    let class = classify("Memory , Location 5");

    assert_eq!(
        class,
        LineClass::ContactHeader {
            bank: String::new(),
            location: "5".into(),
        }
    );
}

#[test]
fn test_link_marker_capture_mapping() {
    let class = classify("Concatenated (linked) message, ID (8bit) 113 part 2 of 3");

    assert_eq!(
        class,
        LineClass::LinkMarker {
            coding: "8bit".into(),
            id: "113".into(),
            part: "2".into(),
        }
    );
}

#[test]
fn test_field_line_raw_captures() {
    // The classifier does not trim; normalization happens later.
    let class = classify("Remote number : \"+1234567890\" ");

    assert_eq!(
        class,
        LineClass::Field {
            key: "Remote number ".into(),
            value: " \"+1234567890\" ".into(),
        }
    );
}

#[test]
fn test_header_wins_over_field() {
    // The folder name contains a colon, so the generic field pattern would
    // also match; the header check runs first.
    let class = classify("Location 1, folder \"notes: misc\"");

    assert!(matches!(class, LineClass::MessageHeader { .. }));
}

#[test]
fn test_banner_and_blank_ignored() {
    assert_eq!(classify("SMS message 5 of 10"), LineClass::Ignored);
    assert_eq!(classify(""), LineClass::Ignored);
    assert_eq!(classify("   \t  "), LineClass::Ignored);
}

#[test]
fn test_unstructured_is_trimmed() {
    assert_eq!(
        classify("  Hello World  "),
        LineClass::Unstructured("Hello World".into())
    );
}
