//! Sample payloads for acquisition tests.

#![allow(dead_code)]

/// A vCard 2.1 card as exported by a phone's contacts app.
pub const VCARD_WITH_CELL: &str = "BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Appleseed;Jane;;;\r\n\
FN:Jane Appleseed\r\n\
TEL;HOME:+14155550000\r\n\
TEL;CELL:+14155551234\r\n\
EMAIL;HOME:jane@example.com\r\n\
END:VCARD\r\n";

/// A card whose only number is a home number.
pub const VCARD_WITHOUT_CELL: &str = "BEGIN:VCARD\n\
VERSION:3.0\n\
FN:John Appleseed\n\
TEL;TYPE=HOME:+14155550000\n\
END:VCARD\n";

/// A card with indentation and a formatted mobile number.
pub const VCARD_FORMATTED_CELL: &str = "BEGIN:VCARD\n  \
  TEL;CELL:+44 (20) 7123-4567  \n\
END:VCARD\n";
