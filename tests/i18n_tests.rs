use auction_portal::Locale;
use chrono::{TimeZone, Utc};

#[test]
fn exact_tags_negotiate_to_their_locale() {
    assert_eq!(Locale::negotiate("en-US"), Locale::EnUs);
    assert_eq!(Locale::negotiate("ja-JP"), Locale::JaJp);
    assert_eq!(Locale::negotiate("ja_JP"), Locale::JaJp);
}

#[test]
fn primary_subtags_negotiate_to_the_shipped_regional_locale() {
    assert_eq!(Locale::negotiate("ja"), Locale::JaJp);
    assert_eq!(Locale::negotiate("en"), Locale::EnUs);
    assert_eq!(Locale::negotiate("en-GB"), Locale::EnUs);
}

#[test]
fn unknown_tags_fall_back_to_english() {
    assert_eq!(Locale::negotiate("fr-FR"), Locale::EnUs);
    assert_eq!(Locale::negotiate(""), Locale::EnUs);
}

#[test]
fn strict_parsing_rejects_unknown_tags() {
    assert!("de-DE".parse::<Locale>().is_err());
    assert_eq!("JA-jp".parse::<Locale>(), Ok(Locale::JaJp));
}

#[test]
fn locales_serialize_as_their_bcp47_tag() {
    assert_eq!(serde_json::to_string(&Locale::JaJp).unwrap(), "\"ja-JP\"");
    assert_eq!(
        serde_json::from_str::<Locale>("\"en-US\"").unwrap(),
        Locale::EnUs
    );
}

#[test]
fn dates_format_per_locale() {
    let at = Utc.with_ymd_and_hms(2026, 9, 4, 13, 5, 0).unwrap();

    assert_eq!(Locale::EnUs.format_date(at), "Sep 4, 2026");
    assert_eq!(Locale::JaJp.format_date(at), "2026年9月4日");

    assert_eq!(Locale::EnUs.format_datetime(at), "Sep 4, 2026 13:05");
    assert_eq!(Locale::JaJp.format_datetime(at), "2026年9月4日 13:05");
}
