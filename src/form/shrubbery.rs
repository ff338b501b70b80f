//! Shrubbery creation: plants ASCII trees in `<target>_shrubbery`

use std::path::{Path, PathBuf};

use crate::error::FormError;
use crate::form::Outcome;
use crate::grade::Grade;

pub const NAME: &str = "ShrubberyCreationForm";
pub const SIGN_GRADE: Grade = Grade::fixed(145);
pub const EXECUTE_GRADE: Grade = Grade::fixed(137);

/// Two trees and a bush
pub const SHRUBBERY: &str = r#"       ###
      #o###
    #####o###
   #o#\#|#/###
    ###\|/#o#
     # }|{  #
       }|{

      ^
     ^^^
    ^^^^^
   ^^^^^^^
  ^^^^^^^^^
 ^^^^^^^^^^^
^^^^^^^^^^^^^
     |||
     |||

   .''.
  /    \
 /      \
.        .
|        |
|  ____  |
.  \  /  .
 \  \/  /
  \____/
"#;

/// Where the shrubbery for `target` is planted
pub fn file_path(dir: &Path, target: &str) -> PathBuf {
    dir.join(format!("{}_shrubbery", target))
}

/// Write the shrubbery file, replacing any previous one
pub(crate) fn plant(dir: &Path, target: &str) -> Result<Outcome, FormError> {
    let path = file_path(dir, target);
    std::fs::write(&path, SHRUBBERY).map_err(|source| FormError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(Outcome::Planted { path })
}

pub(crate) fn report(path: &Path) -> String {
    format!("Created shrubbery file: {}", path.display())
}
