//! Item naming helpers shared by the content-hash splitter.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use crate::constants::hashing::NOHASH_MARKER;
use crate::types::HashKey;

/// Anything that exposes a name for content hashing.
///
/// Paths contribute their final component (`dir/a.png` -> `a.png`,
/// `dir/..` -> `..`), strings contribute themselves.
pub trait NamedItem {
    /// Name used to build the hash key.
    fn item_name(&self) -> Cow<'_, str>;
}

impl NamedItem for Path {
    fn item_name(&self) -> Cow<'_, str> {
        if let Some(name) = self.file_name() {
            return name.to_string_lossy();
        }
        // `file_name` is None for trailing `..`; roots and prefixes stay unnamed.
        match self.components().next_back() {
            Some(last @ (Component::ParentDir | Component::CurDir | Component::Normal(_))) => {
                last.as_os_str().to_string_lossy()
            }
            _ => Cow::Borrowed(""),
        }
    }
}

impl NamedItem for PathBuf {
    fn item_name(&self) -> Cow<'_, str> {
        self.as_path().item_name()
    }
}

impl NamedItem for str {
    fn item_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NamedItem for String {
    fn item_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: NamedItem + ?Sized> NamedItem for &T {
    fn item_name(&self) -> Cow<'_, str> {
        (**self).item_name()
    }
}

/// Drop everything from the first `_nohash_` marker onward.
///
/// `x_nohash_1.wav` and `x_nohash_2.wav` both become `x`.
pub fn strip_nohash_suffix(name: &str) -> &str {
    match name.find(NOHASH_MARKER) {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Hash key for an item: category immediately followed by the stripped name.
pub fn hash_key(category: &str, name: &str) -> HashKey {
    let stripped = strip_nohash_suffix(name);
    let mut key = HashKey::with_capacity(category.len() + stripped.len());
    key.push_str(category);
    key.push_str(stripped);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_use_their_file_name() {
        assert_eq!(Path::new("data/cats/a.png").item_name(), "a.png");
        assert_eq!(PathBuf::from("a_nohash_1.png").item_name(), "a_nohash_1.png");
        assert_eq!(Path::new("/").item_name(), "");
    }

    #[test]
    fn trailing_parent_component_is_kept_as_the_name() {
        assert_eq!(Path::new("a/..").item_name(), "..");
        assert_eq!(PathBuf::from("..").item_name(), "..");
        assert_eq!(Path::new("").item_name(), "");
        assert_eq!(hash_key("cats", &Path::new("a/..").item_name()), "cats..");
    }

    #[test]
    fn strings_and_references_use_themselves() {
        let owned = String::from("clip.wav");
        assert_eq!(owned.item_name(), "clip.wav");
        assert_eq!("clip.wav".item_name(), "clip.wav");
        let path = Path::new("x/y.txt");
        assert_eq!((&path).item_name(), "y.txt");
    }

    #[test]
    fn nohash_suffix_is_stripped_to_end_of_name() {
        assert_eq!(strip_nohash_suffix("x_nohash_1"), "x");
        assert_eq!(strip_nohash_suffix("x_nohash_2.png"), "x");
        assert_eq!(strip_nohash_suffix("a_nohash_b_nohash_c"), "a");
        assert_eq!(strip_nohash_suffix("plain.png"), "plain.png");
        assert_eq!(strip_nohash_suffix("_nohash_"), "");
    }

    #[test]
    fn hash_key_concatenates_category_and_stripped_name() {
        assert_eq!(hash_key("cats", "a.png"), "catsa.png");
        assert_eq!(hash_key("cats", "a_nohash_1.png"), "catsa");
        assert_eq!(hash_key("", "b"), "b");
    }
}
