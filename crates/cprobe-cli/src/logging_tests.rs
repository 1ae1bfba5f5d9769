use tracing::level_filters::LevelFilter;

use crate::logging::filter_for;

#[test]
fn one_v_is_debug() {
    assert_eq!(filter_for(1).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(filter_for(1).to_string(), "debug");
}

#[test]
fn two_or_more_v_is_trace() {
    for verbosity in [2, 3, u8::MAX] {
        assert_eq!(filter_for(verbosity).max_level_hint(), Some(LevelFilter::TRACE));
    }
}
