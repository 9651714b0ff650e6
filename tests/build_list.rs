//! End-to-end coverage for the build listing view.

use buildlist::{render_build_list, Build, BuildState, FixedWidth, Theme, HEADERS};
use chrono::{Duration, Utc};
use console::strip_ansi_codes;

fn sample_build() -> Build {
    Build {
        id: "bld-1".into(),
        hash: "abc123".into(),
        state: BuildState::Success,
        prebuild_id: Some("pb-9".into()),
        created_at: Utc::now() - Duration::hours(2),
    }
}

#[test]
fn wide_terminal_renders_styled_table() {
    let out = render_build_list(&[sample_build()], &FixedWidth(Some(120)), Theme::default_ref());
    let plain = strip_ansi_codes(&out).to_string();
    let lines: Vec<&str> = plain.lines().collect();

    // Header line carries all five labels.
    assert!(lines.len() >= 2);
    for label in HEADERS {
        assert!(lines[0].contains(label), "header missing {:?}", label);
    }

    // Data line carries every field value.
    for value in ["bld-1", "abc123", "success", "pb-9", "2 hours ago"] {
        assert!(lines[1].contains(value), "data row missing {:?}", value);
    }
}

#[test]
fn styled_output_fits_inside_the_breakpoint() {
    let out = render_build_list(&[sample_build()], &FixedWidth(Some(120)), Theme::default_ref());
    for line in out.lines() {
        assert!(
            console::measure_text_width(line) <= 120,
            "line wider than terminal: {:?}",
            line
        );
    }
}

#[test]
fn narrow_terminal_falls_back_with_all_fields() {
    let out = render_build_list(&[sample_build()], &FixedWidth(Some(10)), Theme::default_ref());

    // No fixed-width alignment: block form, not a header row.
    assert!(out.contains("ID: bld-1"));
    for value in ["abc123", "success", "pb-9"] {
        assert!(out.contains(value), "fallback missing {:?}", value);
    }
}

#[test]
fn redirected_output_falls_back_without_a_width() {
    let out = render_build_list(&[sample_build()], &FixedWidth(None), Theme::default_ref());
    assert!(out.contains("Configuration hash: abc123"));
    assert!(out.contains("Prebuild ID: pb-9"));
}

#[test]
fn empty_list_renders_header_only_table() {
    let out = render_build_list(&[], &FixedWidth(Some(120)), Theme::default_ref());
    let plain = strip_ansi_codes(&out).to_string();
    assert_eq!(plain.lines().count(), 1);
    for label in HEADERS {
        assert!(plain.contains(label));
    }
}

#[test]
fn empty_list_without_terminal_is_empty_output() {
    let out = render_build_list(&[], &FixedWidth(None), Theme::default_ref());
    assert!(out.is_empty());
}

#[test]
fn many_builds_keep_input_order() {
    let builds: Vec<Build> = (0..8)
        .map(|i| Build {
            id: format!("bld-{}", i),
            hash: format!("hash{}", i),
            state: if i % 2 == 0 {
                BuildState::Success
            } else {
                BuildState::Error
            },
            prebuild_id: None,
            created_at: Utc::now() - Duration::minutes(i),
        })
        .collect();

    let out = render_build_list(&builds, &FixedWidth(Some(120)), Theme::default_ref());
    let plain = strip_ansi_codes(&out).to_string();

    let mut last = 0;
    for i in 0..8 {
        let needle = format!("bld-{}", i);
        let pos = plain.find(&needle).unwrap_or_else(|| panic!("missing {}", needle));
        assert!(pos >= last, "{} out of order", needle);
        last = pos;
    }
}
