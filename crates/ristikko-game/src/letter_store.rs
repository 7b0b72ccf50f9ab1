use std::collections::BTreeMap;

use ristikko_core::{CellId, Letter};

use crate::PersistenceError;

/// Entered letters keyed by cell.
///
/// A key can be absent (never touched), present but empty (cleared), or hold a
/// letter. The distinction matters for [`clear_all`](Self::clear_all), which only
/// blanks keys that already exist, and for the persisted snapshot.
///
/// The store does not know about the grid; callers keep blocked cells out of it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterStore {
    entries: BTreeMap<CellId, Option<Letter>>,
}

impl LetterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the letter at `id`, or `None` if the cell is empty or absent.
    #[must_use]
    pub fn get(&self, id: CellId) -> Option<Letter> {
        self.entries.get(&id).copied().flatten()
    }

    /// Returns `true` if `id` has an entry, even an empty one.
    #[must_use]
    pub fn contains_key(&self, id: CellId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of keys, including empty entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all keys and their (possibly empty) values in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Option<Letter>)> + '_ {
        self.entries.iter().map(|(id, letter)| (*id, *letter))
    }

    /// Records `letter` at `id`.
    pub fn set(&mut self, id: CellId, letter: Letter) {
        self.entries.insert(id, Some(letter));
    }

    /// Blanks the entry at `id`, creating an empty entry if none existed.
    pub fn clear(&mut self, id: CellId) {
        self.entries.insert(id, None);
    }

    /// Blanks every existing entry. Absent keys stay absent.
    pub fn clear_all(&mut self) {
        for letter in self.entries.values_mut() {
            *letter = None;
        }
    }

    /// Drops entries whose key fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(CellId) -> bool) {
        self.entries.retain(|id, _| keep(*id));
    }

    /// Encodes the store as a JSON object mapping decimal ids to letters.
    ///
    /// Empty entries are written as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        let raw: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|(id, letter)| {
                let value = letter.as_ref().map(ToString::to_string).unwrap_or_default();
                (id.to_string(), value)
            })
            .collect();
        Ok(serde_json::to_string(&raw)?)
    }

    /// Decodes a snapshot written by [`to_json`](Self::to_json).
    ///
    /// Entries with a key that is not a positive integer, or with a value that is
    /// neither empty nor an accepted letter, are skipped and logged at `warn`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Json`] if `json` is not an object of strings.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            match decode_entry(key, &value) {
                Ok((id, letter)) => {
                    entries.insert(id, letter);
                }
                Err(err) => log::warn!("skipping saved entry: {err}"),
            }
        }
        Ok(Self { entries })
    }
}

fn decode_entry(key: String, value: &str) -> Result<(CellId, Option<Letter>), PersistenceError> {
    let Some(id) = key.parse::<u16>().ok().and_then(CellId::try_new) else {
        return Err(PersistenceError::InvalidCellId { key });
    };
    if value.is_empty() {
        return Ok((id, None));
    }
    let letter = value
        .parse::<Letter>()
        .map_err(|source| PersistenceError::InvalidLetter { id, source })?;
    Ok((id, Some(letter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u16) -> CellId {
        CellId::new(value)
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_set_get_clear() {
        let mut store = LetterStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(id(5)), None);

        store.set(id(5), letter('A'));
        assert_eq!(store.get(id(5)), Some(letter('A')));

        store.clear(id(5));
        assert_eq!(store.get(id(5)), None);
        assert!(store.contains_key(id(5)));

        store.clear(id(9));
        assert!(store.contains_key(id(9)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_all_keeps_keys_and_does_not_create_new_ones() {
        let mut store = LetterStore::new();
        for (value, ch) in [(3, 'K'), (7, 'Ä'), (12, 'O')] {
            store.set(id(value), letter(ch));
        }

        store.clear_all();

        for value in [3, 7, 12] {
            assert!(store.contains_key(id(value)));
            assert_eq!(store.get(id(value)), None);
        }
        assert!(!store.contains_key(id(4)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_json_snapshot() {
        let mut store = LetterStore::new();
        store.set(id(5), letter('a'));
        store.set(id(12), letter('Ö'));
        store.clear(id(7));

        let json = store.to_json().unwrap();
        assert!(json.contains(r#""5":"A""#));
        assert!(json.contains(r#""7":"""#));
        assert!(json.contains(r#""12":"Ö""#));

        assert_eq!(LetterStore::from_json(&json).unwrap(), store);
    }

    #[test]
    fn test_from_json_accepts_empty_object() {
        assert!(LetterStore::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            LetterStore::from_json("not json"),
            Err(PersistenceError::Json(_))
        ));
        assert!(matches!(
            LetterStore::from_json(r#"{"1": 5}"#),
            Err(PersistenceError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_skips_invalid_entries() {
        let json = r#"{"0":"A","abc":"B","2":"ß","3":"AB","4":"7","5":"k","6":""}"#;
        let store = LetterStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(id(5)), Some(letter('K')));
        assert!(store.contains_key(id(6)));
        for value in [2, 3, 4] {
            assert!(!store.contains_key(id(value)), "cell {value}");
        }
    }

    #[test]
    fn test_decode_entry_errors() {
        assert!(matches!(
            decode_entry("0".to_owned(), "A"),
            Err(PersistenceError::InvalidCellId { key }) if key == "0"
        ));
        assert!(matches!(
            decode_entry("3".to_owned(), "7"),
            Err(PersistenceError::InvalidLetter { id, .. }) if id == CellId::new(3)
        ));
    }

    #[test]
    fn test_retain() {
        let mut store = LetterStore::new();
        store.set(id(1), letter('A'));
        store.set(id(2), letter('B'));
        store.retain(|id| id.value() != 2);
        assert!(store.contains_key(id(1)));
        assert!(!store.contains_key(id(2)));
    }
}
