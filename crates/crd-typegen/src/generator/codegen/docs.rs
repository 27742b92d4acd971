/// Renders `lines` as a JSDoc block at the given indentation.
///
/// Returns an empty string when there is nothing to document.
pub(crate) fn doc_block(lines: &[String], indent: &str) -> String {
  if lines.is_empty() {
    return String::new();
  }

  let mut block = format!("{indent}/**\n");
  for line in lines {
    let line = escape_comment(line.trim_end());
    if line.is_empty() {
      block.push_str(&format!("{indent} *\n"));
    } else {
      block.push_str(&format!("{indent} * {line}\n"));
    }
  }
  block.push_str(&format!("{indent} */\n"));
  block
}

fn escape_comment(line: &str) -> String {
  line.replace("*/", "*\\/")
}
