/// Identifier for a dataset category (for example a class label or directory).
/// Examples: `cats`, `dogs`, `speech/yes`
pub type CategoryId = String;
/// Byte source for the content hash: category followed by the stripped item name.
/// Example: `catsa.png`
pub type HashKey = String;
/// Position of an item inside a dataset of known length.
pub type ItemIndex = usize;
