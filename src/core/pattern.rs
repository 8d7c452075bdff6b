use regex::Regex;

/// Build the regex that decides which module identifiers get scanned.
///
/// An identifier matches when it contains one of `paths`, followed by any run
/// of word, `-` or `/` characters, then `/<filename>.ts` or `/<filename>.tsx`
/// at the very end. Both fragments and filename are matched literally.
pub fn module_pattern(paths: &[String], filename: &str) -> Result<Regex, regex::Error> {
    let fragments = paths
        .iter()
        .map(|path| format!("({})", regex::escape(path)))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        r"({})[\w/-]*/{}\.tsx?$",
        fragments,
        regex::escape(filename)
    ))
}
