/// Check the three-letter delegation code format.
///
/// Valid codes are exactly three ASCII uppercase letters. A missing code
/// fails the check; callers decide whether an earlier rule already
/// claimed the row.
pub fn is_valid_code_format(code: Option<&str>) -> bool {
    let Some(code) = code else {
        return false;
    };
    code.len() == 3 && code.chars().all(|ch| ch.is_ascii_uppercase())
}
