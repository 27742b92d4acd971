use std::{
  char::{ToLowercase, ToUppercase},
  iter::Peekable,
};

use any_ascii::any_ascii;

/// Builds the synthetic name of the type owned by `parent_name` through `field_name`.
///
/// Root types (empty parent) keep the raw schema key; nested types append the
/// `PascalCase` field name to the parent name.
pub(crate) fn synthetic_type_name(parent_name: &str, field_name: &str) -> String {
  if parent_name.is_empty() {
    field_name.to_string()
  } else {
    format!("{parent_name}{}", to_pascal_case(field_name))
  }
}

/// Converts a property name into a `PascalCase` name segment.
///
/// Mixed-case names without separators (`apiVersion`, `HTTPGet`) keep their inner
/// capitalization. Everything else is split on separators and camel boundaries,
/// capitalized per word, and stripped of non-alphanumeric characters. A name with no
/// alphanumeric characters at all becomes `Unnamed`, so a nested type never reuses its
/// parent's name.
pub(crate) fn to_pascal_case(name: &str) -> String {
  let segment = pascal_segment(name);
  if segment.is_empty() {
    return UNNAMED_SEGMENT.to_string();
  }
  segment
}

const UNNAMED_SEGMENT: &str = "Unnamed";

fn pascal_segment(name: &str) -> String {
  let ascii = any_ascii(name);

  let has_separators = ascii.contains(['-', '_', '.', ' ', '/', '$', '@']);
  let has_upper = ascii.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = ascii.chars().any(|c| c.is_ascii_lowercase());

  if !has_separators && has_upper && has_lower {
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut chars = cleaned.chars();
    return match chars.next() {
      None => String::new(),
      Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    };
  }

  ascii
    .chars()
    .capitalize_words_with_boundaries()
    .filter(char::is_ascii_alphanumeric)
    .collect()
}

/// An extension trait for char iterators to add word capitalization.
pub trait CapitalizeWordsExt: Iterator<Item = char> {
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized,
  {
    CapitalizeWordsWithBoundaries {
      iter: self.peekable(),
      capitalize_next: true,
      prev_was_lower: false,
      pending_upper: None,
      pending_lower: None,
    }
  }
}

pub struct CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  iter: Peekable<I>,
  capitalize_next: bool,
  prev_was_lower: bool,
  pending_upper: Option<ToUppercase>,
  pending_lower: Option<ToLowercase>,
}

impl<I> Iterator for CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(ref mut upper_iter) = self.pending_upper {
      if let Some(c) = upper_iter.next() {
        return Some(c);
      }
      self.pending_upper = None;
    }

    if let Some(ref mut lower_iter) = self.pending_lower {
      if let Some(c) = lower_iter.next() {
        return Some(c);
      }
      self.pending_lower = None;
    }

    let c = self.iter.next()?;

    if !c.is_ascii_alphanumeric() {
      self.capitalize_next = self.iter.peek().is_some_and(char::is_ascii_alphanumeric);
      self.prev_was_lower = false;
      return Some(c);
    }

    let is_lower = c.is_ascii_lowercase();
    let is_upper = c.is_ascii_uppercase();

    let should_capitalize = self.capitalize_next
      || (self.prev_was_lower && is_upper)
      || (is_upper && self.iter.peek().is_some_and(char::is_ascii_lowercase));

    self.prev_was_lower = is_lower;
    self.capitalize_next = false;

    if should_capitalize {
      let mut upper = c.to_uppercase();
      let first = upper.next();
      self.pending_upper = Some(upper);
      first
    } else {
      let mut lower = c.to_lowercase();
      let first = lower.next();
      self.pending_lower = Some(lower);
      first
    }
  }
}
