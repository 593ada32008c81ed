#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const FAMILY: &str = "\
0 HEAD
0 @I1@ INDI
1 NAME Kari /Nordmann/
1 BIRT
2 DATE 1 MAR 1950
0 @I2@ INDI
1 NAME Ola /Nordmann/
1 BIRT
2 DATE 1920
1 DEAT
2 DATE 1990
0 @I3@ INDI
1 NAME Anne /Hansen/
0 @I4@ INDI
1 NAME Per /Hansen/
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I3@
1 CHIL @I1@
0 @F2@ FAM
1 HUSB @I4@
1 CHIL @I3@
0 TRLR
";

/// Write `contents` to `<dir>/<name>` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
