// File: crates/tufte-core/tests/style.rs
// Purpose: Style sheet fragments, resolution order, presets and colour parsing.

use skia_safe::Color;
use tufte_core::style::{find, parse_colour, presets, FontFamily, ResolvedStyle, StyleProp, StyleSheet};
use tufte_core::GraphError;

#[test]
fn tufte_fragments_in_order() {
    let names: Vec<&str> = StyleSheet::tufte().fragments().iter().map(|f| f.name).collect();
    assert_eq!(names, ["figure", "grid", "axes", "spines"]);
    let names: Vec<&str> = StyleSheet::base().fragments().iter().map(|f| f.name).collect();
    assert_eq!(names, ["figure"]);
}

#[test]
fn tufte_sheet_resolves() {
    let sheet = StyleSheet::tufte();
    let style = sheet.resolve(&[]);
    assert_eq!(sheet.background, Color::from_rgb(0xff, 0xff, 0xf8));
    assert_eq!(sheet.colour, Color::from_rgb(0x4b, 0x4b, 0x4b));
    assert_eq!(style.figure_face, sheet.background);
    assert_eq!(style.axes_face, sheet.background);
    assert_eq!(style.text_colour, sheet.colour);
    assert_eq!(style.grid_colour, sheet.background);
    assert_eq!(style.font_family, FontFamily::Serif);
    assert!(!style.frame_on);
    assert!(style.grid);
    assert!(!style.x_tick_marks && !style.y_tick_marks);
    let s = style.spines;
    assert!(!s.left && !s.bottom && !s.right && !s.top);
}

#[test]
fn base_sheet_keeps_spines_and_ticks() {
    let style = StyleSheet::base().resolve(&[]);
    assert!(style.frame_on);
    assert!(!style.grid);
    assert!(style.x_tick_marks);
    assert!(style.spines.left && style.spines.top);
    assert_eq!(style.figure_face, Color::WHITE);
}

#[test]
fn overrides_win_over_fragments() {
    let sheet = StyleSheet::tufte();
    let style = ResolvedStyle::resolve(&sheet.fragments(), &[StyleProp::Grid(false), StyleProp::SpineTop(true)]);
    assert!(!style.grid);
    assert!(style.spines.top);
}

#[test]
fn custom_colours_flow_into_fragments() {
    let sheet = StyleSheet::tufte().with_background(Color::WHITE).with_colour(Color::BLACK).with_fontsize(12.0);
    let style = sheet.resolve(&[]);
    assert_eq!(style.grid_colour, Color::WHITE);
    assert_eq!(style.edge_colour, Color::BLACK);
    assert_eq!(style.font_size, 12.0);
}

#[test]
fn presets_lookup() {
    assert_eq!(presets().len(), 2);
    assert_eq!(find("BASE").name, "base");
    assert_eq!(find("tufte").name, "tufte");
    assert_eq!(find("unknown").name, "tufte");
}

#[test]
fn parse_colours() {
    assert_eq!(parse_colour("#FFFFF8").unwrap(), Color::from_rgb(0xff, 0xff, 0xf8));
    assert_eq!(parse_colour("#4b4b4b80").unwrap(), Color::from_argb(0x80, 0x4b, 0x4b, 0x4b));
    assert_eq!(parse_colour("LightGrey").unwrap(), Color::from_rgb(0xd3, 0xd3, 0xd3));
    assert_eq!(parse_colour("lightgray").unwrap(), parse_colour("lightgrey").unwrap());
    for bad in ["#12345", "#GGGGGG", "chartreuse-ish", ""] {
        assert!(matches!(parse_colour(bad), Err(GraphError::InvalidColour(_))), "{bad}");
    }
}
