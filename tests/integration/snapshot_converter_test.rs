//! Inline snapshots of converted markup

use crate::helpers::convert;

#[test]
fn snapshot_all_attributes() {
    let html = convert("\x1b[1;2;3;4;5;9;38;5;208;48;2;0;0;64mALL\x1b[0m\n");
    insta::assert_snapshot!(html.trim_end(), @r#"<div class="l"><span class="blink" style="font-weight:bold;opacity:0.5;font-style:italic;text-decoration:underline line-through;color:#d45500;background-color:#000040;">ALL</span></div>"#);
}

#[test]
fn snapshot_reverse_video() {
    let html = convert("\x1b[7m REV \x1b[27m\n");
    insta::assert_snapshot!(html.trim_end(), @r#"<div class="l"><span style="color:#000000;background-color:#ffffff;"> REV </span></div>"#);
}

#[test]
fn snapshot_grayscale() {
    let html = convert("\x1b[38;5;244mgray\x1b[m\n");
    insta::assert_snapshot!(html.trim_end(), @r#"<div class="l"><span style="color:#808080;">gray</span></div>"#);
}

#[test]
fn snapshot_concealed_text() {
    let html = convert("\x1b[41;8msecret\x1b[28mshown\x1b[0m\n");
    insta::assert_snapshot!(html.trim_end(), @r#"<div class="l"><span style="color:#aa0000;background-color:#aa0000;">secret</span><span style="background-color:#aa0000;">shown</span></div>"#);
}
