use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

fn main() {
    emit_readme_doc();
}
