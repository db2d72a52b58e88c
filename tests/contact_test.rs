use sms_extract::{parse_contact_dump, parse_contact_lines};

#[test]
fn test_parse_single_contact() {
    let output = "Memory SM, Location 1\n\
                  Name: \"John Doe\"\n\
                  Number: +1234567890";

    let dump = parse_contact_dump(output);

    assert_eq!(dump.contacts.len(), 1);
    let contact = &dump.contacts[0];
    assert_eq!(contact.memory_bank, "SM");
    assert_eq!(contact.location, "1");
    assert_eq!(contact.fields["name"], "John Doe");
    assert_eq!(contact.fields["number"], "+1234567890");
}

#[test]
fn test_multiple_emails_accumulate() {
    let output = "Memory SM, Location 1\n\
                  Email: john@example.com\n\
                  Number: +111\n\
                  Email 2: doe@example.com";

    let dump = parse_contact_dump(output);
    let contact = &dump.contacts[0];

    assert_eq!(
        contact.emails,
        vec!["john@example.com", "doe@example.com"]
    );
    assert!(!contact.fields.contains_key("email"));
    assert!(!contact.fields.contains_key("email_2"));
}

#[test]
fn test_empty_bank_header_is_skipped() {
    let output = "Memory SM, Location 1\n\
                  Name: John\n\
                  Memory , Location 5\n\
                  Name: Imposter";

    let dump = parse_contact_dump(output);

    // No record for the empty bank, and the field after it does not land on
    // the previous contact.
    assert_eq!(dump.contacts.len(), 1);
    assert_eq!(dump.contacts[0].fields["name"], "John");
    assert_eq!(dump.stats.lines_dropped, 1);
}

#[test]
fn test_later_field_overwrites_earlier() {
    let output = "Memory ME, Location 2\n\
                  Name: First\n\
                  Name: Second";

    let dump = parse_contact_dump(output);

    assert_eq!(dump.contacts[0].fields["name"], "Second");
}

#[test]
fn test_contact_order_follows_headers() {
    let output = "Memory SM, Location 1\n\
                  Name: Alice\n\
                  Memory SM, Location 2\n\
                  Name: Bob";

    let dump = parse_contact_dump(output);

    assert_eq!(dump.contacts[0].fields["name"], "Alice");
    assert_eq!(dump.contacts[1].fields["name"], "Bob");
}

#[test]
fn test_message_lines_are_ignored() {
    let output = "Memory SM, Location 1\n\
                  Name: John\n\
                  Concatenated (linked) message, ID (8bit) 113 part 1 of 2\n\
                  stray body text";

    let dump = parse_contact_dump(output);

    assert_eq!(dump.contacts.len(), 1);
    assert_eq!(dump.contacts[0].fields.len(), 1);
    assert_eq!(dump.stats.lines_dropped, 0);
}

#[test]
fn test_empty_value_field_is_dropped() {
    let output = "Memory SM, Location 1\n\
                  Nickname: \"\"";

    let dump = parse_contact_dump(output);

    assert!(dump.contacts[0].fields.is_empty());
    assert_eq!(dump.stats.fields_dropped, 1);
}

#[test]
fn test_parse_from_line_iterator() {
    let lines = ["Memory SM, Location 9", "Name: Iter"];
    let dump = parse_contact_lines(lines);

    assert_eq!(dump.contacts[0].location, "9");
}
