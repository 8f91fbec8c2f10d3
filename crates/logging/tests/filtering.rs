//! Integration tests for the severity and tag filter gate.
//!
//! These tests verify whitelist and blacklist behaviour for both tables, the
//! shared polarity, the ordering of the two checks and that opting into
//! filter-before-format does not change any decision.

use taglog::{CaptureBuffer, Delivery, Flags, Logger, LoggerConfig, Severity, Tag};

fn capture_logger() -> (Logger, CaptureBuffer) {
    let buffer = CaptureBuffer::new();
    let logger = Logger::with_sink(buffer.clone().into());
    logger.replace_flags(Flags::SEVERITY_PREFIX | Flags::END_OF_LINE_SUFFIX);
    (logger, buffer)
}

fn emit_all(logger: &Logger, tag: Option<&Tag>) {
    for severity in Severity::ALL {
        logger.log(severity, tag, &[]);
    }
}

fn delivered(logger: &Logger, tag: Option<&Tag>) -> Vec<Severity> {
    Severity::ALL
        .into_iter()
        .filter(|severity| {
            logger
                .try_log(*severity, tag, &[])
                .expect("capture buffers never fail")
                .is_written()
        })
        .collect()
}

// ============================================================================
// Severity Filter Tests
// ============================================================================

/// Whitelist with Error and Fatal listed passes exactly those severities.
#[test]
fn severity_whitelist_passes_only_listed() {
    let (logger, buffer) = capture_logger();
    logger.set_flag(Flags::SEVERITY_FILTER | Flags::WHITELIST_FILTER);
    logger.set_filter(Severity::Error);
    logger.set_filter(Severity::Fatal);

    emit_all(&logger, None);
    assert_eq!(buffer.contents(), "[Error]\n[Fatal]\n");
}

/// Blacklist with Debug listed suppresses exactly Debug.
#[test]
fn severity_blacklist_suppresses_only_listed() {
    let (logger, buffer) = capture_logger();
    logger.set_flag(Flags::SEVERITY_FILTER);
    logger.clear_flag(Flags::WHITELIST_FILTER);
    logger.set_filter(Severity::Debug);

    emit_all(&logger, None);
    assert_eq!(
        buffer.contents(),
        "[Trace]\n[Info]\n[Warning]\n[Error]\n[Fatal]\n"
    );
}

/// An empty whitelist suppresses everything once the filter is enabled.
#[test]
fn empty_whitelist_suppresses_everything() {
    let (logger, _buffer) = capture_logger();
    logger.set_flag(Flags::SEVERITY_FILTER | Flags::WHITELIST_FILTER);
    assert!(delivered(&logger, None).is_empty());
}

/// Listed entries are ignored while the filter flag is clear.
#[test]
fn tables_are_ignored_without_filter_flags() {
    let (logger, _buffer) = capture_logger();
    logger.set_flag(Flags::WHITELIST_FILTER);
    logger.set_filter(Severity::Info);
    assert_eq!(delivered(&logger, None), Severity::ALL);
}

/// Clearing a listed severity restores the previous decision.
#[test]
fn clear_filter_restores_decision() {
    let (logger, _buffer) = capture_logger();
    logger.set_flag(Flags::SEVERITY_FILTER);
    logger.clear_flag(Flags::WHITELIST_FILTER);
    logger.set_filter(Severity::Warning);
    assert!(!delivered(&logger, None).contains(&Severity::Warning));
    logger.clear_filter(Severity::Warning);
    assert_eq!(delivered(&logger, None), Severity::ALL);
}

// ============================================================================
// Tag Filter Tests
// ============================================================================

/// Tag whitelist passes listed tags and drops untagged calls.
#[test]
fn tag_whitelist() {
    let (logger, _buffer) = capture_logger();
    let net = Tag::new("net");
    let disk = Tag::new("disk");
    logger.set_flag(Flags::TAG_FILTER | Flags::WHITELIST_FILTER);
    logger.set_filter(&net);

    assert_eq!(delivered(&logger, Some(&net)), Severity::ALL);
    assert!(delivered(&logger, Some(&disk)).is_empty());
    assert!(delivered(&logger, None).is_empty());
}

/// The `NONE` sentinel can be listed like any other tag.
#[test]
fn sentinel_tag_can_be_listed() {
    let (logger, _buffer) = capture_logger();
    logger.set_flag(Flags::TAG_FILTER);
    logger.clear_flag(Flags::WHITELIST_FILTER);
    logger.set_filter(Tag::no_tag());

    assert!(delivered(&logger, None).is_empty());
    assert_eq!(delivered(&logger, Some(&Tag::new("other"))), Severity::ALL);
}

/// Two tags with the same name occupy separate table entries.
#[test]
fn same_name_tags_filter_independently() {
    let (logger, _buffer) = capture_logger();
    let first = Tag::new("worker");
    let second = Tag::new("worker");
    logger.set_flag(Flags::TAG_FILTER | Flags::WHITELIST_FILTER);
    logger.set_filter(&first);

    assert_eq!(delivered(&logger, Some(&first)), Severity::ALL);
    assert!(delivered(&logger, Some(&second)).is_empty());
}

/// Tags created anywhere in the process get distinct identities, so listing
/// one never lets another through.
#[test]
fn separately_created_tags_filter_independently() {
    let (logger, buffer) = capture_logger();
    logger.replace_flags(
        Flags::TAG_PREFIX | Flags::TAG_FILTER | Flags::WHITELIST_FILTER | Flags::END_OF_LINE_SUFFIX,
    );

    let tags: Vec<Tag> = (0..64).map(|n| Tag::new(format!("t{n}"))).collect();
    let ids: std::collections::HashSet<_> = tags.iter().map(Tag::id).collect();
    assert_eq!(ids.len(), tags.len());

    logger.set_filter(&tags[0]);
    for tag in &tags {
        logger.info(Some(tag), &[&"x"]);
    }
    assert_eq!(buffer.contents(), "[t0]x\n");
}

// ============================================================================
// Combined Gate Tests
// ============================================================================

/// Both checks must pass and the polarity applies to both tables.
#[test]
fn both_tables_share_polarity() {
    let (logger, _buffer) = capture_logger();
    let net = Tag::new("net");
    logger.set_flag(Flags::SEVERITY_FILTER | Flags::TAG_FILTER);
    logger.clear_flag(Flags::WHITELIST_FILTER);
    logger.set_filter(Severity::Trace);
    logger.set_filter(&net);

    assert!(delivered(&logger, Some(&net)).is_empty());
    assert_eq!(
        delivered(&logger, None),
        vec![
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal
        ]
    );

    logger.set_flag(Flags::WHITELIST_FILTER);
    assert_eq!(delivered(&logger, Some(&net)), vec![Severity::Trace]);
    assert!(delivered(&logger, None).is_empty());
}

/// Filter-before-format yields the same decisions as the default order.
#[test]
fn filter_before_format_matches_default_order() {
    let tags = [Tag::new("a"), Tag::new("b")];
    let mut config = LoggerConfig::with_flags(
        Flags::SEVERITY_FILTER | Flags::TAG_FILTER | Flags::WHITELIST_FILTER,
    );
    config
        .list_severity(Severity::Info)
        .list_severity(Severity::Error)
        .list_tag(tags[0].id());

    let late = Logger::with_config(CaptureBuffer::new().into(), &config);
    config.flags.insert(Flags::FILTER_BEFORE_FORMAT);
    let early = Logger::with_config(CaptureBuffer::new().into(), &config);

    for tag in tags.iter().map(Some).chain([None]) {
        for severity in Severity::ALL {
            let a = late.try_log(severity, tag, &[&"x"]).expect("write");
            let b = early.try_log(severity, tag, &[&"x"]).expect("write");
            assert_eq!(a, b, "{severity:?} {tag:?}");
        }
    }
    assert_eq!(
        late.try_log(Severity::Error, Some(&tags[0]), &[]).expect("write"),
        Delivery::Written
    );
}
