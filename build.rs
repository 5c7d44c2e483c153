use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_OUT: &str = "assets/dist/bundle.css";

/// Resolve the @import graph of the shell stylesheet into one minified file.
fn bundle_css() -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .map_err(|e| format!("bundle {}: {}", CSS_ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {}", e))?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    let result = fs::create_dir_all(CSS_OUT_DIR)
        .map_err(|e| format!("create {}: {}", CSS_OUT_DIR, e))
        .and_then(|_| bundle_css())
        .and_then(|css| fs::write(CSS_OUT, css).map_err(|e| format!("write {}: {}", CSS_OUT, e)));

    if let Err(e) = result {
        panic!("CSS bundling failed: {}", e);
    }
}
