//! Captured terminal output converted end to end

use a2h::{ConverterOptions, LineConverter};

use crate::helpers::load_fixture;

fn convert_fixture(name: &str) -> Vec<String> {
    let html = LineConverter::convert_to_string(&load_fixture(name), ConverterOptions::default());
    html.lines().map(str::to_string).collect()
}

#[test]
fn rustc_diagnostic() {
    let lines = convert_fixture("rustc_error.ansi");
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "<div class=\"l\"><span style=\"font-weight:bold;\"></span>\
         <span style=\"font-weight:bold;color:#ff5555;\">error[E0425]</span>\
         <span style=\"font-weight:bold;\">: cannot find value `x` in this scope</span></div>"
    );
    assert_eq!(
        lines[1],
        "<div class=\"l\"> <span style=\"font-weight:bold;\"></span>\
         <span style=\"font-weight:bold;color:#5555ff;\">--&gt; </span>src/main.rs:2:5</div>"
    );
    assert_eq!(
        lines[2],
        "<div class=\"l\"><span style=\"font-weight:bold;\"></span>\
         <span style=\"font-weight:bold;color:#5555ff;\">  |</span></div>"
    );
    assert!(lines[3].ends_with("|</span>     println!(\"{}\", x);</div>"));
}

#[test]
fn progress_output() {
    let lines = convert_fixture("progress.ansi");
    assert_eq!(
        lines,
        vec![
            "<div class=\"l\">Compiling a2h v0.1.0</div>".to_string(),
            // 39 leaves the foreground alone
            "<div class=\"l\"><span style=\"color:#00aa00;\">    Finished</span>\
             <span style=\"color:#00aa00;\"> dev profile [unoptimized]</span></div>"
                .to_string(),
            "<div class=\"l\"><span style=\"color:#00aa00;\"></span>\
             <span style=\"color:#000000;background-color:#00aa00;\">progress 100%</span>\
             <span style=\"color:#00aa00;\"></span></div>"
                .to_string(),
        ]
    );
}
