//! Line converter behavior through the public API

use a2h::converter::{Attributes, Color};
use a2h::{ConverterOptions, LineConverter};

use crate::helpers::{convert, convert_with};

#[test]
fn plain_text_is_one_container_per_line() {
    assert_eq!(
        convert("one\ntwo\n"),
        "<div class=\"l\">one</div>\n<div class=\"l\">two</div>\n"
    );
}

#[test]
fn style_carries_into_following_lines() {
    assert_eq!(
        convert("\x1b[34mfirst\nsecond\x1b[m\nthird\n"),
        "<div class=\"l\"><span style=\"color:#0000aa;\">first</span></div>\n\
         <div class=\"l\"><span style=\"color:#0000aa;\">second</span></div>\n\
         <div class=\"l\">third</div>\n"
    );
}

#[test]
fn bold_on_a_later_line_brightens_earlier_color() {
    assert_eq!(
        convert("\x1b[32ma\n\x1b[1mb\n"),
        "<div class=\"l\"><span style=\"color:#00aa00;\">a</span></div>\n\
         <div class=\"l\"><span style=\"color:#00aa00;\"></span>\
         <span style=\"font-weight:bold;color:#55ff55;\">b</span></div>\n"
    );
}

#[test]
fn short_extended_color_keeps_following_codes() {
    // The dangling 5 after 38 is read as blink
    assert_eq!(
        convert("\x1b[38;5mx\x1b[0m\n"),
        "<div class=\"l\"><span class=\"blink\" style=\"\">x</span></div>\n"
    );
}

#[test]
fn gamma_option_changes_emitted_colors() {
    let options = ConverterOptions {
        gamma: 2.0,
        ..ConverterOptions::default()
    };
    assert_eq!(
        convert_with(b"\x1b[38;2;255;128;0mx\n", options),
        "<div class=\"l\"><span style=\"color:#ff4000;\">x</span></div>\n"
    );
}

#[test]
fn first_line_flag_resets_state() {
    let mut converter = LineConverter::new(Vec::new(), ConverterOptions::default());
    converter.convert_line(b"\x1b[32mgreen\n", true).unwrap();
    assert_eq!(converter.attributes().fg, Color::Indexed(2));

    converter.convert_line(b"again\n", true).unwrap();
    assert_eq!(*converter.attributes(), Attributes::default());
    assert_eq!(converter.rows(), 2);

    let html = String::from_utf8(converter.into_inner()).unwrap();
    assert!(html.ends_with("<div class=\"l\">again</div>\n"));
}

#[test]
fn finish_is_idempotent() {
    let mut converter = LineConverter::new(Vec::new(), ConverterOptions::default());
    converter.convert_line(b"x\n", true).unwrap();
    converter.finish().unwrap();
    converter.finish().unwrap();
    assert_eq!(converter.get_ref().as_slice(), b"<div class=\"l\">x</div>\n");
}
