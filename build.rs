use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY_STYLESHEET: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // main.css pulls layout, sidebar, drawer and page partials through @import
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY_STYLESHEET))
        .expect("Failed to bundle dashboard CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify dashboard CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(OUTPUT_BUNDLE, css.code).expect("Failed to write bundle.css");
}
